#![cfg(feature = "std")]
//! Drives a game between two players until one side has no vessels left.

use std::io::Write;

use anyhow::Context;
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    core::{GameSession, Side},
    player::Player,
    ui,
};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Winner(Side),
    /// A player stopped the game, or kept firing refused shots.
    Aborted,
}

/// Play `session` to the end, drawing the boards to `out` before each turn.
///
/// Refused shots are reported to the shooter, who is asked again without
/// losing the turn. A player that produces `size * size * 4` refused shots
/// in a row aborts the match.
pub fn play_match<W: Write>(
    session: &mut GameSession,
    human: &mut dyn Player,
    computer: &mut dyn Player,
    rng: &mut SmallRng,
    out: &mut W,
) -> anyhow::Result<MatchResult> {
    let size = session.grid(Side::Human).size();
    let refusal_limit = size * size * 4;
    let mut refused = 0usize;

    while let Some(side) = session.current() {
        if refused == 0 {
            ui::draw_boards(out, session).context("drawing boards")?;
            writeln!(out, "{}\n{}'s turn!", "-".repeat(20), side)?;
        }

        let (shooter, defender): (&mut dyn Player, &mut dyn Player) = match side {
            Side::Human => (&mut *human, &mut *computer),
            Side::Computer => (&mut *computer, &mut *human),
        };

        let enemy = session.view(side.opponent(), side);
        let Some(target) = shooter.select_target(rng, &enemy) else {
            info!("{} stopped the game", side);
            return Ok(MatchResult::Aborted);
        };

        let result = session.fire(target);
        shooter.handle_shot_result(target, &result);
        match result {
            Ok(outcome) => {
                refused = 0;
                debug!("{} fired at {}: {:?}", side, target, outcome);
                defender.handle_opponent_shot(target, outcome);
            }
            Err(e) => {
                refused += 1;
                debug!("{} fired at {}: refused ({})", side, target, e);
                if refused >= refusal_limit {
                    warn!("{} made {} refused shots in a row, aborting", side, refused);
                    return Ok(MatchResult::Aborted);
                }
            }
        }
    }

    let winner = session
        .winner()
        .context("game loop ended without a winner")?;
    ui::draw_boards(out, session).context("drawing boards")?;
    writeln!(out, "{}\n{} won!", "-".repeat(20), winner)?;
    Ok(MatchResult::Winner(winner))
}
