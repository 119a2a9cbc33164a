// vim: set ai et ts=4 sw=4 sts=4:
//! Nonogram solver based purely on line logic.
//!
//! Every row and column is solved on its own by intersecting all placements
//! of its clue that agree with the squares known so far; rows and columns are
//! alternated until nothing changes. Puzzles that need guessing are returned
//! partially solved.
pub mod util;
pub mod grid;
pub mod line;
pub mod puzzle;
pub mod render;
pub mod prompt;

pub use self::grid::{Cell, Grid};
pub use self::puzzle::{solve, Puzzle, Solver};
