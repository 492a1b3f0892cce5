use alloc::vec::Vec;

use log::{trace, warn};
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng};

use crate::core::{Coord, GridView, NoTargetsLeft};

use super::Player;

/// Pick a cell that has not been resolved yet, uniformly at random.
///
/// Cells marked around sunk vessels count as resolved, so they are never
/// chosen.
pub fn random_target<R: Rng>(enemy: &GridView<'_>, rng: &mut R) -> Result<Coord, NoTargetsLeft> {
    let open: Vec<Coord> = enemy.unshot().collect();
    open.choose(rng).copied().ok_or(NoTargetsLeft)
}

/// Computer opponent without memory: every shot is a fresh random pick.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &GridView<'_>) -> Option<Coord> {
        match random_target(enemy, rng) {
            Ok(target) => {
                trace!("computer picked {}", target);
                Some(target)
            }
            Err(e) => {
                warn!("computer cannot move: {}", e);
                None
            }
        }
    }
}
