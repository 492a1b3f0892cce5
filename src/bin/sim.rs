use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{generate_grid, play_match, AiPlayer, FleetConfig, GameSession, MatchResult, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = FleetConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let player1 = generate_grid(&config, &mut rng1)?;
    let player2 = generate_grid(&config, &mut rng2)?;
    let mut session = GameSession::new(player1, player2);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let result = play_match(&mut session, &mut p1, &mut p2, &mut rng1, &mut std::io::sink())?;

    let winner = match result {
        MatchResult::Winner(Side::Human) => Some("player1"),
        MatchResult::Winner(Side::Computer) => Some("player2"),
        MatchResult::Aborted => None,
    };

    let summary = |side: Side| {
        json!({
            "shots": session.shots_fired(side),
            "remaining": session.grid(side).remaining_vessels(),
        })
    };
    let result = json!({
        "player1": summary(Side::Human),
        "player2": summary(Side::Computer),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
