//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: fires at a uniformly random unshot cell
//! - CliPlayer: reads targets from a terminal

use rand::rngs::SmallRng;

use crate::core::{Coord, GridView, ShotError, ShotOutcome};

/// Interface implemented by different player types.
///
/// The match runner treats every player alike: it asks for a target, fires
/// it at the opponent's board and reports the result back.
pub trait Player {
    /// Choose the next target on the opponent's board, seen with ships
    /// hidden. `None` means the player wants to stop the game.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &GridView<'_>) -> Option<Coord>;

    /// Inform the player of the result of its last shot. A refused shot is
    /// followed by another call to `select_target`.
    fn handle_shot_result(&mut self, _target: Coord, _result: &Result<ShotOutcome, ShotError>) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coord, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::{random_target, AiPlayer};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_command, CliPlayer, Command, InputError};
