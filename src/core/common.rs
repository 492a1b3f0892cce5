//! Shot outcomes and the errors returned by board operations.

use thiserror::Error;

use super::coord::Coord;

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed on water.
    Miss,
    /// Shot hit a vessel that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a vessel, carrying its length.
    Sunk { length: usize },
}

impl ShotOutcome {
    /// Hits of either kind grant the shooter another shot.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Reasons a shot is refused. A refused shot leaves the board untouched and
/// does not consume a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("cell {coord} is outside the {size}x{size} board")]
    OutOfRange { coord: Coord, size: usize },
    #[error("cell {coord} has already been shot")]
    AlreadyShot { coord: Coord },
    #[error("the game is already over")]
    GameOver,
}

/// Reasons a vessel cannot be added to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("vessel has no cells")]
    Empty,
    #[error("vessel extends past the board at {0}")]
    OutOfBounds(Coord),
    #[error("vessel overlaps another vessel at {0}")]
    Overlap(Coord),
    #[error("vessel touches another vessel at {0}")]
    Adjacent(Coord),
}

/// Fleet configurations that can never be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    #[error("fleet has no vessels")]
    EmptyFleet,
    #[error("vessel lengths must be at least 1")]
    ZeroLength,
    #[error("placement budgets must be at least 1")]
    ZeroBudget,
    #[error("a vessel of length {length} does not fit on a {size}x{size} board")]
    VesselTooLong { length: usize, size: usize },
    #[error("fleet needs {cells} cells but the board only has {area}")]
    FleetTooLarge { cells: usize, area: usize },
}

/// Errors returned by the fleet generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("invalid fleet configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not lay out the fleet after {restarts} board restarts")]
    Exhausted { restarts: usize },
}

/// Returned by target selection when every cell has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no unshot cells remain")]
pub struct NoTargetsLeft;
