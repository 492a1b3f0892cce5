//! Random fleet layout.
//!
//! Vessels are placed greedily, longest first, from uniformly random bows
//! and orientations. Greedy placement can leave no room for a later vessel;
//! when that happens the whole board is thrown away and generation starts
//! over, up to `max_restarts` times.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use super::common::{FleetError, PlacementError};
use super::config::FleetConfig;
use super::coord::Coord;
use super::grid::Grid;
use super::ship::{Orientation, Vessel};

/// Draw a random, unchecked vessel of `length` somewhere on an N×N board.
pub fn random_vessel<R: Rng>(rng: &mut R, size: usize, length: usize) -> Vessel {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let bow = Coord::unchecked(rng.random_range(1..=size), rng.random_range(1..=size));
    Vessel::new(bow, length, orientation)
}

/// Try up to `attempts` random draws for one vessel. Returns the last
/// rejection if none fit.
pub fn place_random<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    length: usize,
    attempts: usize,
) -> Result<(), PlacementError> {
    let mut last = PlacementError::Empty;
    for _ in 0..attempts {
        match grid.add_vessel(random_vessel(rng, grid.size(), length)) {
            Ok(()) => return Ok(()),
            Err(e) => last = e,
        }
    }
    Err(last)
}

/// Build one board from scratch, giving up on the first vessel that does
/// not fit within its attempt budget.
pub fn try_generate<R: Rng>(config: &FleetConfig, rng: &mut R) -> Result<Grid, PlacementError> {
    let mut lengths: Vec<usize> = config.lengths.clone();
    lengths.sort_unstable_by(|a, b| b.cmp(a));

    let mut grid = Grid::new(config.size);
    for length in lengths {
        place_random(&mut grid, rng, length, config.attempts_per_vessel).map_err(|e| {
            debug!("no room for a vessel of length {}: {}", length, e);
            e
        })?;
    }
    Ok(grid)
}

/// Generate a fully populated board for `config`.
pub fn generate_grid<R: Rng>(config: &FleetConfig, rng: &mut R) -> Result<Grid, FleetError> {
    config.validate()?;
    for restart in 0..config.max_restarts {
        if let Ok(grid) = try_generate(config, rng) {
            if restart > 0 {
                debug!("fleet laid out after {} restarts", restart);
            }
            return Ok(grid);
        }
    }
    warn!(
        "giving up on a {}x{} board with fleet {:?}",
        config.size, config.size, config.lengths
    );
    Err(FleetError::Exhausted {
        restarts: config.max_restarts,
    })
}
