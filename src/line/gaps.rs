// vim: set ai et ts=4 sw=4 sts=4:
//! Enumeration of every placement of a line's runs.
//!
//! A placement is expressed as a gap vector: for k runs, k+1 blank-run lengths
//! `g0..gk`, where `g0` leads the line, `gk` trails it, and every interior gap
//! is at least 1. The gaps and the run lengths always sum to the line length.
use super::super::util::binomial;

/// True once every run is packed against the end of the line.
pub fn is_last_gap(gap: &[usize]) -> bool {
    match gap.split_last() {
        Some((&trailing, rest)) => trailing == 0 && rest.iter().skip(1).all(|&g| g == 1),
        None                    => true,
    }
}

/// Advances `gap` in place to the next placement, moving runs from left to
/// right. Returns false (leaving `gap` untouched) if it already was the last one.
pub fn next_gap(gap: &mut [usize]) -> bool {
    if is_last_gap(gap) {
        return false;
    }
    let last = gap.len() - 1;

    // slack left at the end: slide the last run one square to the right
    if gap[last] > 0 {
        gap[last - 1] += 1;
        gap[last] -= 1;
        return true;
    }

    // otherwise find the rightmost run that can still be shifted; it is the
    // one in front of the rightmost interior gap wider than 1
    let i = match (1..last).rev().find(|&i| gap[i] > 1) {
        Some(i) => i,
        None    => return false,
    };
    let slack: usize = gap[i..].iter().sum::<usize>() - (last - i) - 1;
    gap[i - 1] += 1;
    for g in &mut gap[i..last] {
        *g = 1;
    }
    gap[last] = slack;
    true
}

/// Gap vector with every run packed as far left as possible, or `None` if
/// the clue doesn't fit in `length` squares.
pub fn first_gap(clue: &[usize], length: usize) -> Option<Vec<usize>> {
    let trailing = length.checked_sub(clue.iter().sum::<usize>())?
                         .checked_sub(clue.len().saturating_sub(1))?;
    let mut gap = vec![1; clue.len() + 1];
    gap[0] = 0;
    gap[clue.len()] = trailing;
    Some(gap)
}

/// Number of placements of `clue` in a line of `length` squares, C(L - S + 1, k).
pub fn arrangement_count(clue: &[usize], length: usize) -> usize {
    let occupied: usize = clue.iter().sum();
    if clue.is_empty() {
        return 1;
    }
    if occupied + clue.len() - 1 > length {
        return 0;
    }
    binomial(length - occupied + 1, clue.len())
}

/// Lazy, restartable sequence of all gap vectors for one line, ordered from
/// leftmost packing to rightmost packing.
///
/// Only the current vector is kept; cloning the iterator before it is consumed
/// gives an independent restart.
#[derive(Debug, Clone)]
pub struct GapVectors {
    current: Vec<usize>,
    started: bool,
    exhausted: bool,
}
impl GapVectors {
    /// `clue` must hold at least one run and fit into `length` squares.
    pub fn new(clue: &[usize], length: usize) -> Self {
        assert!(!clue.is_empty(), "empty clues have no gap vectors");
        let current = match first_gap(clue, length) {
            Some(gap) => gap,
            None      => panic!("clue {:?} does not fit in {} squares", clue, length),
        };
        GapVectors {
            current,
            started: false,
            exhausted: false,
        }
    }
}
impl Iterator for GapVectors {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !next_gap(&mut self.current) {
            self.exhausted = true;
            return None;
        }
        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all(clue: &[usize], length: usize) -> Vec<Vec<usize>> {
        GapVectors::new(clue, length).collect()
    }

    #[test]
    fn single_run_slides_right() {
        assert_eq!(all(&[1], 3), vec![vec![0, 2], vec![1, 1], vec![2, 0]]);
    }

    #[test]
    fn earlier_runs_move_after_later_ones_are_packed_right() {
        assert_eq!(all(&[1, 2], 6), vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![0, 3, 0],
            vec![1, 1, 1],
            vec![1, 2, 0],
            vec![2, 1, 0],
        ]);
    }

    #[test]
    fn tight_clue_has_one_placement() {
        assert_eq!(all(&[2, 1, 3], 8), vec![vec![0, 1, 1, 0]]);
    }

    #[test]
    fn count_matches_stars_and_bars() {
        for &(ref clue, length) in &[(vec![1], 3), (vec![1, 2], 5), (vec![1, 2], 6), (vec![3, 1, 1], 10),
                                     (vec![1, 1, 1, 1], 12), (vec![5], 5), (vec![2, 2], 9)] {
            let gaps = all(clue, length);
            let distinct = gaps.iter().cloned().collect::<HashSet<_>>();
            assert_eq!(gaps.len(), arrangement_count(clue, length), "clue {:?} in {}", clue, length);
            assert_eq!(distinct.len(), gaps.len());
        }
        assert_eq!(arrangement_count(&[1, 1, 1, 1], 12), 126);
    }

    #[test]
    fn first_is_leftmost_and_last_is_rightmost() {
        let gaps = all(&[3, 1, 1], 10);
        assert_eq!(gaps.first(), Some(&vec![0, 1, 1, 3]));
        assert_eq!(gaps.last(), Some(&vec![3, 1, 1, 0]));
    }

    #[test]
    fn every_vector_covers_the_line() {
        let clue = [2, 3, 1];
        for gap in GapVectors::new(&clue, 11) {
            assert_eq!(gap.iter().sum::<usize>() + clue.iter().sum::<usize>(), 11);
            assert!(gap[1..gap.len() - 1].iter().all(|&g| g >= 1));
        }
    }

    #[test]
    fn clone_restarts_the_sequence() {
        let gaps = GapVectors::new(&[2], 4);
        let first_pass: Vec<_> = gaps.clone().collect();
        let second_pass: Vec<_> = gaps.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 3);
    }

    #[test]
    fn next_gap_stops_at_the_terminal_vector() {
        let mut gap = vec![2, 1, 0];
        assert!(is_last_gap(&gap));
        assert!(!next_gap(&mut gap));
        assert_eq!(gap, vec![2, 1, 0]);
    }

    #[test]
    fn infeasible_clue_has_no_placements() {
        assert_eq!(arrangement_count(&[3, 3], 6), 0);
        assert_eq!(arrangement_count(&[], 4), 1);
        assert_eq!(first_gap(&[3, 3], 6), None);
        assert_eq!(first_gap(&[7], 6), None);
    }

    #[test]
    fn first_gap_packs_runs_left() {
        assert_eq!(first_gap(&[3, 3], 7), Some(vec![0, 1, 0]));
        assert_eq!(first_gap(&[1, 2], 6), Some(vec![0, 1, 2]));
        assert_eq!(first_gap(&[], 4), Some(vec![4]));
    }
}
