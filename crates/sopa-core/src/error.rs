use thiserror::Error;

/// Errors produced by the word-search engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An orientation tag or name outside the five supported directions
    #[error("unsupported orientation: {0}")]
    UnsupportedOrientation(String),

    /// The planner ran out of options or exceeded its retraction budget
    #[error("could not place {words} words on a {size}x{size} grid after {retractions} retractions")]
    Unplaceable {
        words: usize,
        size: usize,
        retractions: usize,
    },

    #[error("word list is empty")]
    EmptyWordList,

    /// A word that is not two or more letters of the Spanish alphabet
    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    /// A puzzle file record that could not be parsed (line is 1-based)
    #[error("malformed puzzle at line {line}: {reason}")]
    MalformedPuzzle { line: usize, reason: String },

    #[error("grid is not square: {rows} rows but a row has {columns} columns")]
    NotSquare { rows: usize, columns: usize },

    #[error("grid has no cells")]
    EmptyGrid,
}

pub type Result<T> = std::result::Result<T, Error>;
