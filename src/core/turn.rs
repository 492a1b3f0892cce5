//! Whose turn it is, and when the game ends.

use core::fmt;

use super::common::{ShotError, ShotOutcome};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => f.write_str("User"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

/// Current state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    /// `Side` must supply the next target.
    Awaiting(Side),
    /// The game is over.
    Finished { winner: Side },
}

/// Turn state machine. Any hit keeps the shooter on turn, a miss hands the
/// turn over, and sinking the defender's last vessel ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResolver {
    state: TurnState,
}

impl TurnResolver {
    pub fn new(first: Side) -> Self {
        Self {
            state: TurnState::Awaiting(first),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Side on turn, or `None` once finished.
    pub fn current(&self) -> Option<Side> {
        match self.state {
            TurnState::Awaiting(side) => Some(side),
            TurnState::Finished { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::Finished { winner } => Some(winner),
            TurnState::Awaiting(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::Finished { .. })
    }

    /// Advance after the side on turn fired at the opponent's board.
    ///
    /// `defender_remaining` is the defender's afloat-vessel count after the
    /// shot. Refused shots leave the state unchanged so the same side fires
    /// again.
    pub fn resolve(
        &mut self,
        result: &Result<ShotOutcome, ShotError>,
        defender_remaining: usize,
    ) -> TurnState {
        let TurnState::Awaiting(shooter) = self.state else {
            return self.state;
        };
        let Ok(outcome) = result else {
            return self.state;
        };
        self.state = if defender_remaining == 0 {
            TurnState::Finished { winner: shooter }
        } else if outcome.is_hit() {
            TurnState::Awaiting(shooter)
        } else {
            TurnState::Awaiting(shooter.opponent())
        };
        self.state
    }
}

impl Default for TurnResolver {
    /// The human moves first.
    fn default() -> Self {
        Self::new(Side::Human)
    }
}
