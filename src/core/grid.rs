//! Board state: cell matrix, placed vessels and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use super::common::{PlacementError, ShotError, ShotOutcome};
use super::coord::Coord;
use super::ship::Vessel;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open water that has not been shot.
    Empty,
    /// Intact part of a vessel.
    Ship,
    /// Hit part of a vessel that is still afloat.
    Hit,
    /// Shot water, or water next to a sunk vessel.
    Miss,
    /// Part of a sunk vessel.
    Sunk,
}

impl CellState {
    /// Cells that can no longer be shot.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }
}

/// An N×N board owned by one side.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
    /// Index into `vessels` for every cell a vessel occupies.
    owners: Vec<Option<usize>>,
    vessels: Vec<Vessel>,
    afloat: usize,
}

impl Grid {
    /// Create an empty board (no vessels placed).
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: alloc::vec![CellState::Empty; size * size],
            owners: alloc::vec![None; size * size],
            vessels: Vec::new(),
            afloat: 0,
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// State of `coord`, or `None` if it is off the board.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        coord
            .within(self.size)
            .then(|| self.cells[coord.index(self.size)])
    }

    /// Placed vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels with at least one intact cell.
    pub fn remaining_vessels(&self) -> usize {
        self.afloat
    }

    /// Returns `true` once every placed vessel is sunk.
    pub fn is_defeated(&self) -> bool {
        self.afloat == 0
    }

    /// Read-only view for display and targeting. With `hide_ships`, intact
    /// vessel cells read as [`CellState::Empty`].
    pub fn view(&self, hide_ships: bool) -> GridView<'_> {
        GridView {
            grid: self,
            hide_ships,
        }
    }

    fn occupied(&self, coord: Coord) -> bool {
        coord.within(self.size) && self.owners[coord.index(self.size)].is_some()
    }

    /// Check that `vessel` could be placed without mutating the board.
    pub fn check_placement(&self, vessel: &Vessel) -> Result<(), PlacementError> {
        if let Some(&off) = vessel.cells().iter().find(|c| !c.within(self.size)) {
            return Err(PlacementError::OutOfBounds(off));
        }
        if let Some(&taken) = vessel.cells().iter().find(|&&c| self.occupied(c)) {
            return Err(PlacementError::Overlap(taken));
        }
        if let Some(near) = vessel.contour().find(|&c| self.occupied(c)) {
            return Err(PlacementError::Adjacent(near));
        }
        Ok(())
    }

    /// Place a vessel. Every cell must be on the board, unoccupied, and not
    /// touching another vessel, diagonals included. The board is unchanged on
    /// error.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if vessel.is_empty() {
            return Err(PlacementError::Empty);
        }
        self.check_placement(&vessel)?;

        let id = self.vessels.len();
        for &c in vessel.cells() {
            let idx = c.index(self.size);
            self.cells[idx] = CellState::Ship;
            self.owners[idx] = Some(id);
        }
        trace!("placed {:?}", vessel);
        self.vessels.push(vessel);
        self.afloat += 1;
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// A refused shot leaves the board unchanged. Sinking a vessel marks its
    /// cells [`CellState::Sunk`] and every untouched cell around it
    /// [`CellState::Miss`], since no other vessel can be there.
    pub fn receive_shot(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        let state = self.cell(target).ok_or(ShotError::OutOfRange {
            coord: target,
            size: self.size,
        })?;
        if state.is_resolved() {
            return Err(ShotError::AlreadyShot { coord: target });
        }

        let idx = target.index(self.size);
        let Some(id) = self.owners[idx] else {
            self.cells[idx] = CellState::Miss;
            trace!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[idx] = CellState::Hit;
        let vessel = &mut self.vessels[id];
        vessel.is_hit_by(target);
        if !vessel.is_sunk() {
            trace!("shot at {} hit {:?}", target, vessel);
            return Ok(ShotOutcome::Hit);
        }

        let length = vessel.len();
        self.mark_sunk(id);
        self.afloat -= 1;
        debug!(
            "shot at {} sank a vessel of length {}, {} remaining",
            target, length, self.afloat
        );
        Ok(ShotOutcome::Sunk { length })
    }

    fn mark_sunk(&mut self, id: usize) {
        let size = self.size;
        let vessel = &self.vessels[id];
        for &c in vessel.cells() {
            self.cells[c.index(size)] = CellState::Sunk;
        }
        for c in vessel.contour() {
            if !c.within(size) {
                continue;
            }
            let cell = &mut self.cells[c.index(size)];
            if *cell == CellState::Empty {
                *cell = CellState::Miss;
            }
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("afloat", &self.afloat)
            .field("vessels", &self.vessels)
            .finish()
    }
}

/// Borrowed, read-only view of a [`Grid`].
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
    hide_ships: bool,
}

impl<'a> GridView<'a> {
    pub fn size(&self) -> usize {
        self.grid.size
    }

    pub fn hides_ships(&self) -> bool {
        self.hide_ships
    }

    /// Cell state as seen through this view.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        self.grid.cell(coord).map(|state| match state {
            CellState::Ship if self.hide_ships => CellState::Empty,
            other => other,
        })
    }

    pub fn remaining_vessels(&self) -> usize {
        self.grid.afloat
    }

    /// All board coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + 'a {
        let size = self.grid.size;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Coord::unchecked(col, row)))
    }

    /// Coordinates that can still be shot.
    pub fn unshot(&self) -> impl Iterator<Item = Coord> + 'a {
        let grid = self.grid;
        self.coords()
            .filter(move |&c| !grid.cells[c.index(grid.size)].is_resolved())
    }
}
