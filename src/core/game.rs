//! A game session: both boards, whose turn it is, and shot counts.

use log::info;
use rand::Rng;

use super::{
    common::{FleetError, ShotError, ShotOutcome},
    config::FleetConfig,
    coord::Coord,
    fleet::generate_grid,
    grid::{Grid, GridView},
    turn::{Side, TurnResolver, TurnState},
};

/// Both boards of one game plus the turn state.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Indexed by [`Side::index`]: each side's own board.
    grids: [Grid; 2],
    turns: TurnResolver,
    shots: [usize; 2],
}

impl GameSession {
    /// Start a game from two prepared boards. The human fires first.
    pub fn new(human: Grid, computer: Grid) -> Self {
        Self {
            grids: [human, computer],
            turns: TurnResolver::default(),
            shots: [0; 2],
        }
    }

    /// Generate both fleets from `config` and start a game.
    pub fn generate<R: Rng>(config: &FleetConfig, rng: &mut R) -> Result<Self, FleetError> {
        let human = generate_grid(config, rng)?;
        let computer = generate_grid(config, rng)?;
        info!(
            "new game on a {}x{} board with {} vessels per side",
            config.size,
            config.size,
            config.lengths.len()
        );
        Ok(Self::new(human, computer))
    }

    /// Let `side` move first instead of the human.
    pub fn with_first(mut self, side: Side) -> Self {
        self.turns = TurnResolver::new(side);
        self
    }

    /// The board owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    /// What `viewer` sees of `owner`'s board: everything on its own board,
    /// only shot results on the opponent's.
    pub fn view(&self, owner: Side, viewer: Side) -> GridView<'_> {
        self.grid(owner).view(owner != viewer)
    }

    pub fn state(&self) -> TurnState {
        self.turns.state()
    }

    /// Side on turn, or `None` once the game is over.
    pub fn current(&self) -> Option<Side> {
        self.turns.current()
    }

    pub fn winner(&self) -> Option<Side> {
        self.turns.winner()
    }

    pub fn is_finished(&self) -> bool {
        self.turns.is_finished()
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The side on turn fires at the opponent's board.
    ///
    /// Refused shots (off the board, already shot) leave both the board and
    /// the turn unchanged.
    pub fn fire(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        let shooter = self.current().ok_or(ShotError::GameOver)?;
        let defender = &mut self.grids[shooter.opponent().index()];
        let result = defender.receive_shot(target);
        let remaining = defender.remaining_vessels();
        if result.is_ok() {
            self.shots[shooter.index()] += 1;
        }
        if let TurnState::Finished { winner } = self.turns.resolve(&result, remaining) {
            info!(
                "{} won after {} shots",
                winner,
                self.shots[winner.index()]
            );
        }
        result
    }
}
