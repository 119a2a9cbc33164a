// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use ansi_term::{ANSIString, Colour, Style};

use super::grid::Grid;
use super::line::Line;
use super::puzzle::Puzzle;
use super::util::{lalign_colored, ralign_joined_coloreds, Direction::*};

/// A grid drawn inside a box, with the row clues on the left and the column
/// clues stacked on top.
pub struct Board<'a> {
    pub puzzle: &'a Puzzle,
    pub grid: &'a Grid,
    /// Draw a thin separator every N squares; `None` or `Some(0)` draws none.
    pub subdivision: Option<usize>,
    pub color: bool,
}

impl<'a> Board<'a> {
    pub fn new(puzzle: &'a Puzzle, grid: &'a Grid) -> Self {
        Board { puzzle, grid, subdivision: Some(5), color: false }
    }

    fn _clue_parts(&self, line: &Line) -> Vec<ANSIString<'static>> {
        // clues of lines that are already fully known are dimmed
        let style = match line.is_completed(self.grid) {
            true  => Style::new().fg(Colour::Fixed(241)),
            false => Style::default(),
        };
        let parts = line.clue.iter()
                             .map(|len| style.paint(len.to_string()))
                             .collect::<Vec<_>>();
        if parts.is_empty() {
            return vec![style.paint("0")];
        }
        parts
    }

    /// The separator interval actually drawn; zero means no separators.
    fn _subdivision(&self) -> Option<usize> {
        self.subdivision.filter(|&n| n > 0)
    }

    fn _fmt(&self) -> String {
        let row_prefixes: Vec<Vec<ANSIString>> =
            self.puzzle.lines().filter(|line| line.direction == Horizontal)
                               .map(|line| self._clue_parts(&line))
                               .collect();
        let col_headers: Vec<Vec<ANSIString>> =
            self.puzzle.lines().filter(|line| line.direction == Vertical)
                               .map(|line| self._clue_parts(&line))
                               .collect();

        // widths without escape sequences, plus the spaces between clue numbers
        let prefix_len = row_prefixes.iter()
                                     .map(|parts| parts.iter().map(|part| part.len()).sum::<usize>() + parts.len() - 1)
                                     .max().unwrap_or(0);
        let max_col_runs = col_headers.iter()
                                      .map(|parts| parts.len())
                                      .max().unwrap_or(0);
        let height = self.grid.rows();
        let blank_prefix = " ".repeat(prefix_len);

        let mut result = String::new();

        for i in (0..max_col_runs).rev() {
            result.push_str(&self._fmt_header(&col_headers, i, &blank_prefix));
        }
        result.push_str(&self._fmt_border(&blank_prefix, ["\u{2554}", "\u{2557}", "\u{2564}"], "\u{2550}"));

        for y in 0..height {
            let squares = self.grid.row(y).iter()
                                          .map(|cell| format!(" {} ", cell))
                                          .collect::<Vec<_>>();
            result.push_str(&self._fmt_line(
                &ralign_joined_coloreds(&row_prefixes[y], prefix_len, self.color),
                ["\u{2551}", "\u{2551}", "\u{2502}"],
                &squares,
            ));

            let at_subdivision = self._subdivision().map_or(false, |n| (y+1) % n == 0);
            if at_subdivision && y+1 < height {
                result.push_str(&self._fmt_border(&blank_prefix, ["\u{255F}", "\u{2562}", "\u{253C}"], "\u{2500}"));
            }
        }
        result.push_str(&self._fmt_border(&blank_prefix, ["\u{255A}", "\u{255D}", "\u{2567}"], "\u{2550}"));

        result
    }

    /// A horizontal rule across the board; `delims` is left, right, separator.
    fn _fmt_border(&self, prefix: &str, delims: [&str; 3], fill: &str) -> String {
        let squares = vec![fill.repeat(3); self.grid.cols()];
        self._fmt_line(prefix, delims, &squares)
    }

    fn _fmt_line(&self, prefix: &str, delims: [&str; 3], content_parts: &[String]) -> String {
        let [left, right, separator] = delims;
        let mut result = format!("{} {}", prefix, left);
        for (idx, s) in content_parts.iter().enumerate() {
            result.push_str(s);
            let at_subdivision = self._subdivision().map_or(false, |n| (idx+1) % n == 0);
            if at_subdivision && idx+1 < content_parts.len() {
                result.push_str(separator);
            }
        }
        result.push_str(right);
        result.push('\n');
        result
    }

    /// One row of the column clues; `depth` counts from the clue nearest the board.
    fn _fmt_header(&self, col_headers: &[Vec<ANSIString>], depth: usize, prefix: &str) -> String {
        let content_parts = col_headers.iter()
            .map(|parts| match parts.len().checked_sub(depth + 1) {
                Some(i) => format!(" {}", lalign_colored(&parts[i], 2, self.color)),
                None    => String::from("   "),
            })
            .collect::<Vec<_>>();
        self._fmt_line(prefix, [" ", " ", " "], &content_parts)
    }
}
impl<'a> fmt::Display for Board<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self._fmt())
    }
}
