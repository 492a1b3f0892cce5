#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::string::String;

use log::warn;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::core::{Coord, GridView, ShotError, ShotOutcome};

use super::Player;

/// A parsed line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Coord),
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter two numbers separated by a space!")]
    Malformed,
}

/// Parse `"x y"` (column then row, 1-based) or `"stop"`.
///
/// Only the shape of the input is checked; whether the cell is on the board
/// is for the board to decide.
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("stop") {
        return Ok(Command::Stop);
    }
    let mut parts = input.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };
    let col = x.parse().map_err(|_| InputError::Malformed)?;
    let row = y.parse().map_err(|_| InputError::Malformed)?;
    Ok(Command::Fire(Coord::unchecked(col, row)))
}

fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship wounded!",
        ShotOutcome::Sunk { .. } => "Ship destroyed!",
    }
}

fn describe_error(err: &ShotError) -> String {
    match err {
        ShotError::OutOfRange { size, .. } => {
            format!("You are trying to shoot outside the board! Coordinates must be between 1 and {size}.")
        }
        ShotError::AlreadyShot { .. } => "You have already shot at this cell!".to_string(),
        ShotError::GameOver => "The game is already over!".to_string(),
    }
}

/// Human player reading targets from `input` and reporting to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<BufReader<Stdin>, Stdout> {
    /// Player on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            warn!("failed to write to the terminal: {}", e);
        }
    }

    /// Prompt until a well-formed line arrives. `None` on end of input.
    fn read_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            self.say(format_args!("Your move (format: x y): "));
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_command(&line) {
                Ok(command) => return Ok(Some(command)),
                Err(e) => self.say(format_args!("{e}\n")),
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &GridView<'_>) -> Option<Coord> {
        match self.read_command() {
            Ok(Some(Command::Fire(target))) => Some(target),
            Ok(Some(Command::Stop)) => {
                self.say(format_args!("Game terminated. Thanks for playing!\n"));
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("failed to read from the terminal: {}", e);
                None
            }
        }
    }

    fn handle_shot_result(&mut self, _target: Coord, result: &Result<ShotOutcome, ShotError>) {
        match result {
            Ok(outcome) => self.say(format_args!("{}\n", describe(*outcome))),
            Err(e) => {
                let msg = describe_error(e);
                self.say(format_args!("{msg}\n"));
            }
        }
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.say(format_args!("Computer move: {} -> {}\n", target, describe(outcome)));
    }
}
