//! Puzzles and their plain-text file format.
//!
//! A file holds any number of records:
//!
//! ```text
//! # INICIO
//! C A S A
//! X O S O
//! Q W E R
//! T Y U I
//! CASA OSO
//! # FIN
//! ```
//!
//! Every line between the markers except the last is a grid row of
//! space-separated letters; the last is the word list. Text outside records
//! is ignored.

use crate::{is_letter, parse_wordlist, Error, Grid, Result, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const START_MARKER: &str = "# INICIO";
pub const END_MARKER: &str = "# FIN";

/// A grid together with the words hidden in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<Word>,
}

impl Puzzle {
    pub fn new(grid: Grid, words: Vec<Word>) -> Self {
        Self { grid, words }
    }
}

impl fmt::Display for Puzzle {
    /// Writes one record in the file format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{START_MARKER}")?;
        writeln!(f, "{}", self.grid)?;
        let words: Vec<&str> = self.words.iter().map(Word::as_str).collect();
        writeln!(f, "{}", words.join(" "))?;
        writeln!(f, "{END_MARKER}")
    }
}

/// Serialize puzzles as consecutive records
pub fn write_puzzles(puzzles: &[Puzzle]) -> String {
    puzzles.iter().map(Puzzle::to_string).collect()
}

/// Parse every record in `input`
pub fn parse_puzzles(input: &str) -> Result<Vec<Puzzle>> {
    let mut puzzles = Vec::new();
    let mut open: Option<(usize, Vec<(usize, &str)>)> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line == START_MARKER {
            if let Some((start, _)) = open {
                return Err(malformed(
                    line_no,
                    format!("start marker inside the record opened at line {start}"),
                ));
            }
            open = Some((line_no, Vec::new()));
        } else if line == END_MARKER {
            let (start, body) = open
                .take()
                .ok_or_else(|| malformed(line_no, "end marker without a start marker"))?;
            puzzles.push(parse_record(start, line_no, &body)?);
        } else if let Some((_, body)) = open.as_mut() {
            if !line.is_empty() {
                body.push((line_no, line));
            }
        }
    }

    if let Some((start, _)) = open {
        return Err(malformed(start, "record is never closed"));
    }
    Ok(puzzles)
}

fn parse_record(start: usize, end: usize, body: &[(usize, &str)]) -> Result<Puzzle> {
    let Some(((words_line, words_text), rows)) = body.split_last() else {
        return Err(malformed(start, "empty record"));
    };
    if rows.is_empty() {
        return Err(malformed(end, "record has a word list but no grid rows"));
    }

    let mut cells = Vec::with_capacity(rows.len());
    for &(line_no, text) in rows {
        let mut row = Vec::new();
        for token in text.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if is_letter(c) => row.push(c),
                _ => {
                    return Err(malformed(
                        line_no,
                        format!("expected a single uppercase letter, found {token:?}"),
                    ))
                }
            }
        }
        cells.push(row);
    }

    let grid = Grid::from_rows(cells).map_err(|e| malformed(rows[0].0, e.to_string()))?;
    let words = parse_wordlist(words_text).map_err(|e| malformed(*words_line, e.to_string()))?;
    Ok(Puzzle::new(grid, words))
}

fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::MalformedPuzzle {
        line,
        reason: reason.into(),
    }
}
