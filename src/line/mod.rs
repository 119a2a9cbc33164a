// vim: set ai et ts=4 sw=4 sts=4:
pub mod gaps;
mod solver;

pub use self::gaps::GapVectors;
pub use self::solver::resolve;

use std::fmt;
use super::util::{Direction, Direction::*};
use super::grid::{Cell, Grid};

/// A single row or column of the puzzle, together with its clue.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub direction: Direction,
    pub index:     usize,
    pub length:    usize,
    pub clue:      &'a [usize],
}

impl<'a> Line<'a> {
    pub fn new(direction: Direction, index: usize, length: usize, clue: &'a [usize]) -> Self {
        Line { direction, index, length, clue }
    }

    /// Maps a position along this line to a (row, col) grid coordinate.
    pub fn square_index(&self, at: usize) -> (usize, usize) {
        match self.direction {
            Horizontal => (self.index, at),
            Vertical   => (at, self.index),
        }
    }
    pub fn cells(&self, grid: &Grid) -> Vec<Cell> {
        match self.direction {
            Horizontal => grid.row(self.index),
            Vertical   => grid.col(self.index),
        }
    }
    pub fn is_trivially_empty(&self) -> bool {
        self.clue.is_empty()
    }
    pub fn is_completed(&self, grid: &Grid) -> bool {
        self.cells(grid).iter().all(|c| c.is_known())
    }
    pub fn resolve(&self, grid: &Grid) -> Resolution {
        resolve(self.clue, &self.cells(grid))
    }
}
impl<'a> fmt::Display for Line<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {:?}", self.direction.line_name(), self.index, self.clue)
    }
}

// -------------------------------------------------------------

/// What a single resolver pass knows about one cell.
///
/// `locked` cells are settled for this pass: either they were already known
/// in the grid, or two placements disagreed about them (then `state` is back
/// to `Unknown`).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Update {
    pub state:  Cell,
    pub locked: bool,
}
impl Update {
    pub fn from_cell(cell: Cell) -> Self {
        Update { state: cell, locked: cell.is_known() }
    }
    /// Determined by this pass and not known before.
    pub fn is_newly_known(&self) -> bool {
        !self.locked && self.state.is_known()
    }
    /// Proven undeterminable from this line alone, for now.
    pub fn is_ambiguous(&self) -> bool {
        self.locked && !self.state.is_known()
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub updates:  Vec<Update>,
    /// Number of placements consistent with the known squares.
    pub feasible: usize,
}
impl Resolution {
    pub fn newly_known(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.updates.iter()
                    .enumerate()
                    .filter(|(_, u)| u.is_newly_known())
                    .map(|(i, u)| (i, u.state))
    }
    pub fn is_ambiguous(&self) -> bool {
        self.updates.iter().any(|u| u.is_ambiguous())
    }
}
