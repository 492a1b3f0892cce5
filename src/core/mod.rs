//! Core battleship game engine (no_std compatible)
//!
//! Pure game logic: coordinates, vessels, boards, fleet generation and turn
//! resolution. Needs only `alloc`, `rand` and `log`, so it builds without
//! the `std` feature.

pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod game;
pub mod grid;
pub mod ship;
pub mod turn;

// Re-export commonly used types
pub use common::{ConfigError, FleetError, NoTargetsLeft, PlacementError, ShotError, ShotOutcome};
pub use config::*;
pub use coord::Coord;
pub use fleet::{generate_grid, place_random, random_vessel, try_generate};
pub use game::GameSession;
pub use grid::{CellState, Grid, GridView};
pub use ship::{Orientation, Vessel};
pub use turn::{Side, TurnResolver, TurnState};
