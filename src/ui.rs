#![cfg(feature = "std")]
//! Text rendering of boards. Cells of a sunk vessel reuse the hit symbol; its
//! contour shows as misses.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::string::String;

use crate::core::{CellState, Coord, GameSession, GridView, Side};

const EMPTY_SIGN: char = '\u{25A1}';
const SHIP_SIGN: char = '\u{25A0}';
const HIT_SIGN: char = '\u{2573}';
const MISS_SIGN: char = '\u{25CF}';

/// Symbol used for a cell state.
pub fn cell_symbol(state: CellState) -> char {
    match state {
        CellState::Empty => EMPTY_SIGN,
        CellState::Ship => SHIP_SIGN,
        CellState::Hit | CellState::Sunk => HIT_SIGN,
        CellState::Miss => MISS_SIGN,
    }
}

/// Render a board as a table with 1-based column and row labels.
pub fn render_grid(view: &GridView<'_>) -> String {
    let size = view.size();
    let mut out = String::from("    |");
    for col in 1..=size {
        let _ = write!(out, " {col} |");
    }
    for row in 1..=size {
        let _ = write!(out, "\n{row:<4}|");
        for col in 1..=size {
            let state = view.cell(Coord::unchecked(col, row)).unwrap_or(CellState::Empty);
            let _ = write!(out, " {} |", cell_symbol(state));
        }
    }
    out
}

/// Print both boards as the human sees them.
pub fn draw_boards<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(out, "User board:")?;
    writeln!(out, "{}", render_grid(&session.view(Side::Human, Side::Human)))?;
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(out, "Computer board:")?;
    writeln!(out, "{}", render_grid(&session.view(Side::Computer, Side::Human)))?;
    Ok(())
}

/// Greeting and input instructions.
pub fn print_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "-------------------")?;
    writeln!(out, "  Welcome to the   ")?;
    writeln!(out, "     Battleship    ")?;
    writeln!(out, "       game!       ")?;
    writeln!(out, "-------------------")?;
    writeln!(out, " Input format: x y ")?;
    writeln!(out, " x - column number ")?;
    writeln!(out, " y - row number    ")?;
    writeln!(out, " 'stop' to quit    ")?;
    Ok(())
}
