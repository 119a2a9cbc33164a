// vim: set ai et ts=4 sw=4 sts=4:
//! Interactive collection of puzzle dimensions and clues.
use std::io::{self, BufRead, Write};
use log::debug;

use super::puzzle::{Puzzle, Error, parse_clue, min_length};
use super::util::{Direction, Direction::*};

const INVALID_CLUE: &str = "Error: Invalid clue. Clues should be a list of positive integers separated by spaces.";

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String, Error> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before the puzzle was complete")));
    }
    Ok(line.trim().to_string())
}

/// Parses dimensions written as `RxC`.
pub fn parse_dimensions(text: &str) -> Option<(usize, usize)> {
    let lowered = text.to_lowercase();
    let parts = lowered.split('x').map(|p| p.trim()).collect::<Vec<_>>();
    if parts.len() != 2 {
        return None;
    }
    match (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
        (Ok(rows), Ok(cols)) if rows > 0 && cols > 0 => Some((rows, cols)),
        _ => None,
    }
}

fn ask_dimensions<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(usize, usize), Error> {
    loop {
        let answer = read_line(input, output, "Enter puzzle dimensions: ")?;
        match parse_dimensions(&answer) {
            Some(dims) => return Ok(dims),
            None => writeln!(output, "Error: Invalid dimensions. Dimensions should be input in the form RxC \
                                      where R is the number of rows and C is the number of columns")?,
        }
    }
}

fn ask_clues<R: BufRead, W: Write>(input: &mut R, output: &mut W, direction: Direction, count: usize, available: usize)
    -> Result<Vec<Vec<usize>>, Error>
{
    let mut clues = Vec::with_capacity(count);
    for index in 0..count {
        loop {
            let answer = read_line(input, output, &format!("Enter clues for {} {}: ", direction.line_name(), index+1))?;
            match parse_clue(&answer) {
                Ok(ref clue) if clue.contains(&0) => writeln!(output, "{}", INVALID_CLUE)?,
                Ok(clue) if min_length(&clue) <= available => {
                    clues.push(clue);
                    break;
                }
                Ok(clue) => writeln!(output, "Error: Clue {:?} does not fit in {} squares.", clue, available)?,
                Err(_) => writeln!(output, "{}", INVALID_CLUE)?,
            }
        }
    }
    Ok(clues)
}

/// Asks for the dimensions, then for every row and column clue, re-asking
/// whenever an answer can't be used.
pub fn ask_puzzle<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Puzzle, Error> {
    let (rows, cols) = ask_dimensions(input, output)?;
    debug!("reading clues for a {}x{} puzzle", rows, cols);
    let row_clues = ask_clues(input, output, Horizontal, rows, cols)?;
    let col_clues = ask_clues(input, output, Vertical, cols, rows)?;
    Puzzle::new(row_clues, col_clues)
}
