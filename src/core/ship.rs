//! Vessel geometry and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use super::coord::Coord;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend to the right of the bow.
    Horizontal,
    /// Cells extend downwards from the bow.
    Vertical,
}

impl Orientation {
    /// Column and row step between consecutive cells.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A straight vessel anchored at its bow, with a hit flag per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    bow: Coord,
    orientation: Orientation,
    cells: Vec<Coord>,
    hits: Vec<bool>,
}

impl Vessel {
    /// Lay out a vessel of `length` cells from `bow`.
    ///
    /// No bounds are checked here; a vessel running off the board is a
    /// legitimate draw that the grid rejects on placement. Cells past
    /// `usize::MAX` saturate there, which is off every board.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        let (dc, dr) = orientation.step();
        let cells = (0..length)
            .map(|i| {
                Coord::unchecked(
                    bow.col.saturating_add(i * dc),
                    bow.row.saturating_add(i * dr),
                )
            })
            .collect();
        Vessel {
            bow,
            orientation,
            cells,
            hits: alloc::vec![false; length],
        }
    }

    /// Occupied cells, bow first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is part of this vessel.
    pub fn occupies(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// Register a shot. Returns `true` and marks the cell as hit if the shot
    /// lands on this vessel; hitting the same cell again reports a hit again.
    pub fn is_hit_by(&mut self, shot: Coord) -> bool {
        match self.cells.iter().position(|&c| c == shot) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Number of cells hit so far.
    pub fn hits_taken(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// Check if the vessel is sunk (all cells hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// The ring of cells touching the vessel, diagonals included, without
    /// bounds filtering. May contain duplicates.
    pub fn contour(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .flat_map(|&c| c.neighbours())
            .filter(move |n| !self.occupies(*n))
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: ({}), length: {}, orientation: {:?}, hits: {} }}",
            self.bow,
            self.len(),
            self.orientation,
            self.hits_taken(),
        )
    }
}
