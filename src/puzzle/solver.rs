// vim: set ai et ts=4 sw=4 sts=4:
use log::{debug, info, trace, warn, error};
use super::Puzzle;
use super::super::line::Line;
use super::super::grid::{Grid, Cell, Cell::{Empty, Unknown}, Changes};

/// Outcome of one pass over a set of lines.
#[derive(Debug, Default)]
struct Pass {
    changes: Changes,
    update: bool, // some square was committed
    done: bool,   // no line reported an ambiguous square
}

/// What one iteration of the solver loop did.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub number: usize,
    pub changes: Changes,
    /// The row pass left no ambiguity, so the column pass was not run.
    pub columns_skipped: bool,
}

/// Line-logic solver: alternates row and column passes over a grid it owns
/// until a sweep changes nothing or no line is left ambiguous.
///
/// Puzzles that need guessing come out partially solved.
#[derive(Debug)]
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    grid: Grid,
    update: bool,
    done: bool,
    sweeps: usize,
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Solver {
            puzzle,
            grid: Grid::new(puzzle.rows(), puzzle.cols()),
            update: true,
            done: false,
            sweeps: 0,
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn sweeps(&self) -> usize { self.sweeps }

    /// Runs a single iteration of the solver loop; `None` once it has terminated.
    pub fn step(&mut self) -> Option<Sweep> {
        if !self.update || self.done {
            return None;
        }
        self.sweeps += 1;
        let puzzle = self.puzzle;

        let rows = (0..puzzle.rows()).map(|y| puzzle.row(y)).collect::<Vec<_>>();
        let row_pass = Self::_run_pass(&mut self.grid, &rows);
        let mut changes = row_pass.changes;
        self.update = row_pass.update;
        self.done = row_pass.done;

        // every row is either solved or contradicted; the columns can't add anything
        let columns_skipped = self.done;
        if !columns_skipped {
            let cols = (0..puzzle.cols()).map(|x| puzzle.col(x)).collect::<Vec<_>>();
            let col_pass = Self::_run_pass(&mut self.grid, &cols);
            changes.extend(col_pass.changes);
            self.update |= col_pass.update;
            self.done = col_pass.done;
        }

        debug!("sweep {}: {} square(s) committed{}, {} unknown left",
               self.sweeps,
               changes.len(),
               if columns_skipped { " (column pass skipped)" } else { "" },
               self.grid.count(Unknown));

        Some(Sweep {
            number: self.sweeps,
            changes,
            columns_skipped,
        })
    }

    fn _run_pass(grid: &mut Grid, lines: &[Line]) -> Pass {
        let mut pass = Pass { done: true, ..Pass::default() };

        for line in lines {
            if line.is_completed(grid) {
                continue;
            }

            if line.is_trivially_empty() {
                for at in 0..line.length {
                    Self::_commit(grid, line, at, Empty, &mut pass.changes);
                }
                pass.update = true;
                continue;
            }

            let resolution = line.resolve(grid);
            if resolution.feasible == 0 {
                warn!("{}: no placement is consistent with the grid", line);
            }
            if resolution.is_ambiguous() {
                pass.done = false;
            }
            for (at, status) in resolution.newly_known() {
                Self::_commit(grid, line, at, status, &mut pass.changes);
                pass.update = true;
            }
        }
        pass
    }

    fn _commit(grid: &mut Grid, line: &Line, at: usize, status: Cell, changes: &mut Changes) {
        let (row, col) = line.square_index(at);
        match grid.set(row, col, status) {
            Ok(Some(change)) => {
                trace!("{}", change);
                changes.push(change);
            }
            Ok(None) => {}
            Err(err) => error!("{}: {}", line, err),
        }
    }

    /// Runs the solver to termination and hands back the grid.
    pub fn run(mut self) -> Grid {
        while self.step().is_some() {}

        let unknown = self.grid.count(Unknown);
        if unknown == 0 {
            info!("solved {} in {} sweep(s)", self.puzzle, self.sweeps);
        } else {
            info!("line logic stalled on {} after {} sweep(s) with {} unknown square(s)",
                  self.puzzle, self.sweeps, unknown);
        }
        self.grid
    }
}

impl<'a> Iterator for Solver<'a> {
    type Item = Sweep;

    fn next(&mut self) -> Option<Sweep> {
        self.step()
    }
}

/// Solves `puzzle` as far as line logic allows.
pub fn solve(puzzle: &Puzzle) -> Grid {
    Solver::new(puzzle).run()
}
