// vim: set ai et ts=4 sw=4 sts=4:
pub mod solver;

pub use self::solver::{solve, Solver, Sweep};

use std::fmt;
use std::io;
use std::convert::TryFrom;
use log::debug;
use yaml_rust::{Yaml, YamlLoader, ScanError};

use super::grid::Grid;
use super::line::Line;
use super::util::{Direction, Direction::*};

#[derive(Debug)]
pub enum Error {
    Validation(String),       // clue data is malformed
    Infeasible {              // a clue cannot fit in its line
        direction: Direction,
        index:     usize,
        clue:      Vec<usize>,
        available: usize,
    },
    Yaml(ScanError),
    Io(io::Error),
}
impl From<ScanError> for Error {
    fn from(other: ScanError) -> Self {
        Error::Yaml(other)
    }
}
impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        Error::Io(other)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Invalid clues: {}", msg),
            Error::Infeasible { direction, index, clue, available } =>
                write!(f, "Clue {:?} of {} {} needs {} squares but only {} are available",
                    clue, direction.line_name(), index, min_length(clue), available),
            Error::Yaml(err) => write!(f, "Invalid YAML: {}", err),
            Error::Io(err)   => write!(f, "I/O error: {}", err),
        }
    }
}

/// Smallest line length that can hold `clue`.
pub fn min_length(clue: &[usize]) -> usize {
    clue.iter().sum::<usize>() + clue.len().saturating_sub(1)
}

/// Parses a clue written as whitespace-separated positive integers.
/// Blank text or a lone `0` is the clue of an empty line.
pub fn parse_clue(text: &str) -> Result<Vec<usize>, Error> {
    let clue = text.split_whitespace()
                   .map(|part| part.parse::<usize>()
                                   .map_err(|_| Error::Validation(format!("'{}' is not a non-negative integer", part))))
                   .collect::<Result<Vec<_>, _>>()?;
    if clue == [0] {
        return Ok(vec![]);
    }
    Ok(clue)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    row_clues: Vec<Vec<usize>>,
    col_clues: Vec<Vec<usize>>,
}

impl Puzzle {
    /// Validates the clues: every block length must be positive and every
    /// clue must fit within the opposite dimension.
    pub fn new(row_clues: Vec<Vec<usize>>, col_clues: Vec<Vec<usize>>) -> Result<Self, Error> {
        Self::_check_lines(Horizontal, &row_clues, col_clues.len())?;
        Self::_check_lines(Vertical, &col_clues, row_clues.len())?;
        debug!("validated {}x{} puzzle", row_clues.len(), col_clues.len());
        Ok(Puzzle { row_clues, col_clues })
    }

    fn _check_lines(direction: Direction, clues: &[Vec<usize>], available: usize) -> Result<(), Error> {
        for (index, clue) in clues.iter().enumerate() {
            if clue.iter().any(|&n| n == 0) {
                return Err(Error::Validation(
                    format!("clue {:?} of {} {} contains a non-positive block length",
                            clue, direction.line_name(), index)));
            }
            if min_length(clue) > available {
                return Err(Error::Infeasible {
                    direction,
                    index,
                    clue: clue.clone(),
                    available,
                });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize { self.row_clues.len() }
    pub fn cols(&self) -> usize { self.col_clues.len() }
    pub fn row_clues(&self) -> &[Vec<usize>] { &self.row_clues }
    pub fn col_clues(&self) -> &[Vec<usize>] { &self.col_clues }

    pub fn row(&self, y: usize) -> Line {
        Line::new(Horizontal, y, self.cols(), &self.row_clues[y])
    }
    pub fn col(&self, x: usize) -> Line {
        Line::new(Vertical, x, self.rows(), &self.col_clues[x])
    }
    /// All rows, then all columns.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.rows()).map(move |y| self.row(y))
                        .chain((0..self.cols()).map(move |x| self.col(x)))
    }

    /// Rebuilds the puzzle whose solution is `grid`, reading the run lengths
    /// off every row and column.
    pub fn from_solution(grid: &Grid) -> Result<Puzzle, Error> {
        if !grid.is_solved() {
            return Err(Error::Validation("grid still has unknown squares".to_string()));
        }
        let row_clues = (0..grid.rows()).map(|y| grid.runs_of_row(y)).collect();
        let col_clues = (0..grid.cols()).map(|x| grid.runs_of_col(x)).collect();
        Puzzle::new(row_clues, col_clues)
    }

    pub fn from_yaml_str(s: &str) -> Result<Puzzle, Error> {
        let docs: Vec<Yaml> = YamlLoader::load_from_str(s)?;
        match docs.first() {
            Some(doc) => Puzzle::from_yaml(doc),
            None      => Err(Error::Validation("empty puzzle document".to_string())),
        }
    }

    pub fn from_yaml(doc: &Yaml) -> Result<Puzzle, Error> {
        let row_clues = Self::_parse_lines(&doc["rows"], "rows")?;
        let col_clues = Self::_parse_lines(&doc["cols"], "cols")?;
        Puzzle::new(row_clues, col_clues)
    }

    fn _parse_lines(input: &Yaml, key: &str) -> Result<Vec<Vec<usize>>, Error> {
        let list: &Vec<Yaml> = input.as_vec().ok_or_else(|| Error::Validation(
            format!("'{}' must be a list of clues", key)))?;
        list.iter()
            .map(|yaml_val| Self::_parse_line_runs(yaml_val))
            .collect()
    }

    fn _parse_line_runs(input: &Yaml) -> Result<Vec<usize>, Error> {
        match input {
            Yaml::String(s)  => parse_clue(s),
            Yaml::Integer(0) => Ok(vec![]),
            Yaml::Integer(n) => usize::try_from(*n)
                                    .map(|len| vec![len])
                                    .map_err(|_| Error::Validation(format!("{} is not a valid block length", n))),
            Yaml::Array(items) => items.iter()
                                       .map(|item| match item {
                                           Yaml::Integer(n) => usize::try_from(*n).map_err(|_|
                                               Error::Validation(format!("{} is not a valid block length", n))),
                                           _ => Err(Error::Validation(format!("unexpected block length: {:?}", item))),
                                       })
                                       .collect(),
            Yaml::Null       => Ok(vec![]),
            _ => Err(Error::Validation(format!("unexpected clue: {:?}", input))),
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{} puzzle", self.rows(), self.cols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::Cell::{Empty, Filled};

    fn clues(lines: &[&[usize]]) -> Vec<Vec<usize>> {
        lines.iter().map(|clue| clue.to_vec()).collect()
    }

    #[test]
    fn oversized_clue_is_infeasible() {
        match Puzzle::new(vec![vec![10]], vec![vec![1]]) {
            Err(Error::Infeasible { direction, index, clue, available }) => {
                assert_eq!(direction, Horizontal);
                assert_eq!(index, 0);
                assert_eq!(clue, vec![10]);
                assert_eq!(available, 1);
            }
            other => panic!("expected an infeasible clue, got {:?}", other),
        }
    }

    #[test]
    fn column_clue_is_checked_against_row_count() {
        let err = Puzzle::new(vec![vec![], vec![]], vec![vec![1, 1]]).unwrap_err();
        assert!(matches!(err, Error::Infeasible { direction: Vertical, index: 0, .. }));
        assert!(err.to_string().contains("needs 3 squares but only 2"));
    }

    #[test]
    fn zero_block_is_rejected() {
        let err = Puzzle::new(vec![vec![1, 0]], vec![vec![1], vec![]]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn exact_fit_is_accepted() {
        let puzzle = Puzzle::new(vec![vec![1, 1]], vec![vec![1], vec![], vec![1]]).unwrap();
        assert_eq!(puzzle.rows(), 1);
        assert_eq!(puzzle.cols(), 3);
        assert_eq!(puzzle.lines().count(), 4);
        assert_eq!(puzzle.col(2).clue, &[1]);
        assert_eq!(puzzle.row(0).length, 3);
    }

    #[test]
    fn parse_clue_handles_blank_and_zero() {
        assert_eq!(parse_clue("3 1  2").unwrap(), vec![3, 1, 2]);
        assert_eq!(parse_clue("").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_clue("0").unwrap(), Vec::<usize>::new());
        assert!(parse_clue("1 x").is_err());
        assert!(parse_clue("-1").is_err());
    }

    #[test]
    fn loads_from_yaml() {
        let puzzle = Puzzle::from_yaml_str("
rows:
    - 1 1
    - 3
    -
cols:
    - 2
    - 1
    - [2]
").unwrap();
        assert_eq!(puzzle.row_clues(), clues(&[&[1, 1], &[3], &[]]).as_slice());
        assert_eq!(puzzle.col_clues(), clues(&[&[2], &[1], &[2]]).as_slice());
    }

    #[test]
    fn yaml_without_cols_is_rejected() {
        let err = Puzzle::from_yaml_str("rows:\n    - 1\n").unwrap_err();
        assert!(err.to_string().contains("'cols'"));
    }

    #[test]
    fn malformed_yaml_is_reported() {
        assert!(matches!(Puzzle::from_yaml_str("rows: [1, 2"), Err(Error::Yaml(_))));
        assert!(matches!(Puzzle::from_yaml_str("rows:\n  - -3\ncols:\n  - 1\n"), Err(Error::Validation(_))));
    }

    #[test]
    fn from_solution_reads_run_lengths() {
        let mut grid = Grid::new(2, 3);
        for (x, cell) in [Filled, Empty, Filled].iter().enumerate() {
            grid.set(0, x, *cell).unwrap();
        }
        for x in 0..3 {
            grid.set(1, x, Filled).unwrap();
        }
        let puzzle = Puzzle::from_solution(&grid).unwrap();
        assert_eq!(puzzle.row_clues(), clues(&[&[1, 1], &[3]]).as_slice());
        assert_eq!(puzzle.col_clues(), clues(&[&[2], &[1], &[2]]).as_slice());
        assert!(Puzzle::from_solution(&Grid::new(1, 1)).is_err());
    }
}
