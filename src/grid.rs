// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;

pub trait HasGridLocation {
    fn get_row(&self) -> usize;
    fn get_col(&self) -> usize;
    fn fmt_location(&self) -> String {
        format!("(row={:-2}, col={:-2})", self.get_row(), self.get_col())
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Cell {
    Unknown,
    Filled,
    Empty,
}
impl Cell {
    pub fn is_known(self) -> bool {
        self != Cell::Unknown
    }
    pub fn name(self) -> &'static str {
        match self {
            Cell::Unknown => "Unknown",
            Cell::Filled  => "Filled",
            Cell::Empty   => "Empty",
        }
    }
}
impl Default for Cell {
    fn default() -> Self { Cell::Unknown }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Cell::Filled  => "\u{2588}", // full block
            Cell::Empty   => "X",
            Cell::Unknown => "?",
        })
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct StatusChange {
    pub row: usize,
    pub col: usize,
    pub old: Cell,
    pub new: Cell,
}
impl StatusChange {
    pub fn new(row: usize, col: usize, old: Cell, new: Cell) -> Self {
        Self { row, col, old, new }
    }
}
impl HasGridLocation for StatusChange {
    fn get_row(&self) -> usize { self.row }
    fn get_col(&self) -> usize { self.col }
}
impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Change: in square {}, status was changed from {} to {}",
            self.fmt_location(),
            self.old.name(),
            self.new.name())
    }
}

pub type Changes = Vec<StatusChange>;

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone)]
pub enum StatusError {
    OutOfBounds { row: usize, col: usize },
    WasAlreadySet(StatusChange), // status was already filled in or crossed out, cannot be reverted to unknown
    Conflicts(StatusChange),     // new status conflicts with existing (non-unknown) status
}
impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusError::OutOfBounds { row, col } =>
                write!(f, "StatusError: square (row={}, col={}) is outside the grid", row, col),
            StatusError::WasAlreadySet(change) =>
                write!(f, "StatusError: in {}, cannot revert status {} back to {}",
                    change.fmt_location(), change.old.name(), change.new.name()),
            StatusError::Conflicts(change) =>
                write!(f, "StatusError: in {}, attempt to change status from {} to {} was rejected: conflicting information",
                    change.fmt_location(), change.old.name(), change.new.name()),
        }
    }
}

// if it worked: the change, if any; if it didn't, the change that was rejected
pub type StatusResult = Result<Option<StatusChange>, StatusError>;

// ------------------------------------------------

/// Fixed-size grid of cells, stored row-major.
///
/// The dimensions never change after construction, and a cell can only move
/// from `Unknown` to a known value; every other transition is rejected by
/// [`Grid::set`].
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}
impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Unknown; rows * cols],
        }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, new_status: Cell) -> StatusResult {
        let i = self.offset(row, col).ok_or(StatusError::OutOfBounds { row, col })?;
        let old = self.cells[i];
        let change = StatusChange::new(row, col, old, new_status);

        // once a square's status is known it can't be changed anymore
        if old != Cell::Unknown {
            if new_status == Cell::Unknown { return Err(StatusError::WasAlreadySet(change)); }
            if old != new_status           { return Err(StatusError::Conflicts(change));     }
            return Ok(None);
        }
        if new_status == Cell::Unknown {
            return Ok(None);
        }
        self.cells[i] = new_status;
        Ok(Some(change))
    }

    pub fn row(&self, row: usize) -> Vec<Cell> {
        self.cells[row * self.cols..(row + 1) * self.cols].to_vec()
    }
    pub fn col(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).filter_map(|row| self.get(row, col)).collect()
    }

    pub fn count(&self, status: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == status).count()
    }
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_known())
    }

    pub fn runs_of_row(&self, row: usize) -> Vec<usize> {
        runs_of(&self.row(row))
    }
    pub fn runs_of_col(&self, col: usize) -> Vec<usize> {
        runs_of(&self.col(col))
    }
}

/// Lengths of the maximal sequences of filled squares in a line, in order.
pub fn runs_of(cells: &[Cell]) -> Vec<usize> {
    let mut result = Vec::<usize>::new();
    let mut current: usize = 0;
    for &cell in cells {
        if cell == Cell::Filled {
            current += 1;
        } else if current > 0 {
            result.push(current);
            current = 0;
        }
    }
    if current > 0 {
        result.push(current);
    }
    result
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row(row) {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(rows={}, cols={}, unknown={})", self.rows, self.cols, self.count(Cell::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Cell::*;

    #[test]
    fn new_grid_is_all_unknown() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count(Unknown), 12);
        assert!(!grid.is_solved());
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.get(1, 2), Some(Unknown));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn set_reports_the_change() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.set(0, 1, Filled), Ok(Some(StatusChange::new(0, 1, Unknown, Filled))));
        assert_eq!(grid.set(0, 1, Filled), Ok(None));
        assert_eq!(grid.get(0, 1), Some(Filled));
        assert_eq!(grid.row(0), vec![Unknown, Filled]);
        assert_eq!(grid.col(1), vec![Filled, Unknown]);
    }

    #[test]
    fn set_is_monotonic() {
        let mut grid = Grid::new(1, 2);
        grid.set(0, 0, Empty).unwrap();
        match grid.set(0, 0, Filled) {
            Err(StatusError::Conflicts(change)) => assert_eq!(change.old, Empty),
            other => panic!("expected a conflict, got {:?}", other),
        }
        match grid.set(0, 0, Unknown) {
            Err(StatusError::WasAlreadySet(_)) => {}
            other => panic!("expected a rejected revert, got {:?}", other),
        }
        assert_eq!(grid.get(0, 0), Some(Empty));
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(1, 1);
        assert_eq!(grid.set(1, 0, Filled), Err(StatusError::OutOfBounds { row: 1, col: 0 }));
    }

    #[test]
    fn runs_are_computed_per_line() {
        assert_eq!(runs_of(&[Filled, Filled, Empty, Filled, Empty]), vec![2, 1]);
        assert_eq!(runs_of(&[Empty, Empty]), Vec::<usize>::new());
        assert_eq!(runs_of(&[Filled, Unknown, Filled]), vec![1, 1]);
    }

    #[test]
    fn display_is_one_line_per_row() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Filled).unwrap();
        grid.set(1, 1, Empty).unwrap();
        assert_eq!(grid.to_string(), "\u{2588}?\n?X\n");
    }
}
