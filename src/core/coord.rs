//! Board coordinates.

use core::fmt;

use super::common::ShotError;

/// Offsets of the eight cells surrounding a cell.
static NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A 1-based (column, row) position on the board.
///
/// Values outside the board are representable: vessels derived from a random
/// bow may run off the edge and are rejected when placed, and a shot at a
/// coordinate outside the board is reported by the grid rather than here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Horizontal position, 1 at the left edge.
    pub col: usize,
    /// Vertical position, 1 at the top edge.
    pub row: usize,
}

impl Coord {
    /// Checked constructor for coordinates coming from outside the engine.
    pub fn new(col: usize, row: usize, size: usize) -> Result<Self, ShotError> {
        let coord = Self { col, row };
        if coord.within(size) {
            Ok(coord)
        } else {
            Err(ShotError::OutOfRange { coord, size })
        }
    }

    /// Construct without a range check.
    pub const fn unchecked(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Whether the coordinate lies on an N×N board.
    pub fn within(&self, size: usize) -> bool {
        (1..=size).contains(&self.col) && (1..=size).contains(&self.row)
    }

    /// Row-major offset into an N×N cell array. Only meaningful when `within(size)`.
    pub(crate) fn index(&self, size: usize) -> usize {
        (self.row - 1) * size + (self.col - 1)
    }

    /// The up to eight cells touching this one, diagonals included.
    ///
    /// Cells that would fall below 1 are skipped; cells past the far edge are
    /// yielded and left for the caller to bound-check.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dc, dr)| {
            let col = self.col.checked_add_signed(dc)?;
            let row = self.row.checked_add_signed(dr)?;
            (col >= 1 && row >= 1).then_some(Coord { col, row })
        })
    }

    /// Chebyshev distance, so touching cells (diagonals included) are at distance 1.
    pub fn distance(&self, other: &Coord) -> usize {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }
}

impl From<(usize, usize)> for Coord {
    /// Build from a `(col, row)` pair without a range check.
    fn from((col, row): (usize, usize)) -> Self {
        Self::unchecked(col, row)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.col, coord.row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.col, self.row)
    }
}
