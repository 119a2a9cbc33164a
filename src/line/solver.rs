// vim: set ai et ts=4 sw=4 sts=4:
use std::iter::once;
use log::trace;
use super::{GapVectors, Update, Resolution};
use super::gaps::arrangement_count;
use super::super::grid::Cell::{self, Empty, Filled, Unknown};

/// Squares implied by a placement, as consecutive (status, count) segments
/// covering the whole line: the leading gap, then each run followed by the gap
/// after it.
fn segments<'a>(clue: &'a [usize], gap: &'a [usize]) -> impl Iterator<Item = (Cell, usize)> + 'a {
    once((Empty, gap[0]))
        .chain(clue.iter()
                   .zip(gap[1..].iter())
                   .flat_map(|(&run, &blank)| once((Filled, run)).chain(once((Empty, blank)))))
}

/// A placement is rejected if any locked, known square disagrees with it.
fn is_feasible(clue: &[usize], gap: &[usize], updates: &[Update]) -> bool {
    let mut offset: usize = 0;
    for (status, len) in segments(clue, gap) {
        let conflicting = updates[offset..offset+len].iter()
                                                     .any(|u| u.locked && u.state != Unknown && u.state != status);
        if conflicting {
            return false;
        }
        offset += len;
    }
    true
}

fn merge(clue: &[usize], gap: &[usize], updates: &mut [Update]) {
    let mut offset: usize = 0;
    for (status, len) in segments(clue, gap) {
        for update in updates[offset..offset+len].iter_mut().filter(|u| !u.locked) {
            if update.state == Unknown {
                update.state = status;
            } else if update.state != status {
                // placements disagree; nothing later can settle this square
                update.locked = true;
                update.state = Unknown;
            }
        }
        offset += len;
    }
}

/// Intersects every placement of `clue` that is consistent with `cells`.
///
/// A square comes out newly known iff all consistent placements agree on it.
/// `clue` must be non-empty and fit into the line.
pub fn resolve(clue: &[usize], cells: &[Cell]) -> Resolution {
    let mut updates = cells.iter()
                           .map(|&c| Update::from_cell(c))
                           .collect::<Vec<_>>();
    let mut feasible: usize = 0;

    for gap in GapVectors::new(clue, cells.len()) {
        if !is_feasible(clue, &gap, &updates) {
            continue;
        }
        feasible += 1;
        merge(clue, &gap, &mut updates);
    }
    trace!("clue {:?}: {} of {} placement(s) feasible",
           clue, feasible, arrangement_count(clue, cells.len()));

    Resolution { updates, feasible }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(resolution: &Resolution) -> Vec<Cell> {
        resolution.updates.iter().map(|u| u.state).collect()
    }

    #[test]
    fn single_run_in_three_squares_is_ambiguous() {
        let resolution = resolve(&[1], &[Unknown; 3]);
        assert_eq!(resolution.feasible, 3);
        assert_eq!(states(&resolution), vec![Unknown; 3]);
        assert!(resolution.updates.iter().all(|u| u.is_ambiguous()));
        assert_eq!(resolution.newly_known().count(), 0);
    }

    #[test]
    fn pinned_square_forces_its_neighbours() {
        let resolution = resolve(&[1], &[Unknown, Filled, Unknown]);
        assert_eq!(resolution.feasible, 1);
        assert_eq!(resolution.newly_known().collect::<Vec<_>>(), vec![(0, Empty), (2, Empty)]);
        assert_eq!(resolution.updates[1], Update { state: Filled, locked: true });
        assert!(!resolution.is_ambiguous());
    }

    #[test]
    fn overlap_of_long_run_is_filled() {
        // a run of 3 in 4 squares always covers the middle two
        let resolution = resolve(&[3], &[Unknown; 4]);
        assert_eq!(states(&resolution), vec![Unknown, Filled, Filled, Unknown]);
        assert_eq!(resolution.newly_known().collect::<Vec<_>>(), vec![(1, Filled), (2, Filled)]);
        assert!(resolution.is_ambiguous());
    }

    #[test]
    fn exact_fit_determines_every_square() {
        let resolution = resolve(&[2, 1], &[Unknown; 4]);
        assert_eq!(states(&resolution), vec![Filled, Filled, Empty, Filled]);
        assert!(resolution.updates.iter().all(|u| u.is_newly_known()));
    }

    #[test]
    fn known_empty_square_prunes_placements() {
        // 2 1 in 6 with square 2 empty: the 2 must sit at 0..2
        let cells = [Unknown, Unknown, Empty, Unknown, Unknown, Unknown];
        let resolution = resolve(&[2, 1], &cells);
        assert_eq!(resolution.feasible, 3);
        assert_eq!(states(&resolution), vec![Filled, Filled, Empty, Unknown, Unknown, Unknown]);
        assert_eq!(resolution.newly_known().collect::<Vec<_>>(), vec![(0, Filled), (1, Filled)]);
    }

    #[test]
    fn known_squares_are_never_overridden() {
        let cells = [Filled, Unknown, Unknown, Unknown, Unknown];
        let resolution = resolve(&[1, 1], &cells);
        assert_eq!(resolution.updates[0], Update { state: Filled, locked: true });
        assert_eq!(resolution.updates[1], Update { state: Empty, locked: false });
    }

    #[test]
    fn contradiction_leaves_line_untouched() {
        let resolution = resolve(&[2], &[Filled, Empty, Filled]);
        assert_eq!(resolution.feasible, 0);
        assert_eq!(resolution.newly_known().count(), 0);
        assert!(!resolution.is_ambiguous());
    }
}
