//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_grid, AiPlayer, Coord, FleetConfig, GameSession, Grid, Player, ShotError,
    ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{play_match, CliPlayer, MatchResult};
