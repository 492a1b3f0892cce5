use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, play_match, ui, AiPlayer, CliPlayer, FleetConfig, GameSession, MatchResult,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play(GameArgs),
    /// Watch the computer play against itself.
    Auto(GameArgs),
}

#[derive(Args)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Board dimension N for an NxN board")]
    size: Option<usize>,
    #[arg(long, value_delimiter = ',', help = "Vessel lengths (e.g., --fleet 3,2,2,1,1,1,1)")]
    fleet: Option<Vec<usize>>,
    #[arg(long, help = "JSON file with a fleet configuration")]
    config: Option<PathBuf>,
}

impl GameArgs {
    /// File values (or defaults), overridden by command-line flags.
    fn fleet_config(&self) -> anyhow::Result<FleetConfig> {
        let mut config = match &self.config {
            Some(path) => FleetConfig::from_json_file(path)?,
            None => FleetConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(fleet) = &self.fleet {
            config.lengths = fleet.clone();
        }
        config.validate().context("invalid fleet configuration")?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }

    fn session(&self, rng: &mut SmallRng) -> anyhow::Result<GameSession> {
        let config = self.fleet_config()?;
        GameSession::generate(&config, rng).context("generating fleets")
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Play(args) => {
            ui::print_greeting(&mut out)?;
            let mut rng = args.rng();
            let mut session = args.session(&mut rng)?;
            let mut human = CliPlayer::stdio();
            let mut computer = AiPlayer::new();
            play_match(&mut session, &mut human, &mut computer, &mut rng, &mut out)?
        }
        Commands::Auto(args) => {
            let mut rng = args.rng();
            let mut session = args.session(&mut rng)?;
            let mut first = AiPlayer::new();
            let mut second = AiPlayer::new();
            play_match(&mut session, &mut first, &mut second, &mut rng, &mut out)?
        }
    };

    if result == MatchResult::Aborted {
        writeln!(out, "Game aborted.")?;
    }
    out.flush()?;
    Ok(())
}
