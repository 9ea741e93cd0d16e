//! Word-search ("sopa de letras") engine.
//!
//! Generation sizes a square grid for a word list, places every word with
//! randomized backtracking so overlapping words agree on shared letters, and
//! fills the remaining cells with random letters. Solving scans a finished
//! grid for each word along the five supported orientations.
//!
//! ```
//! use sopa_core::{parse_wordlist, Generator, Solver};
//!
//! let words = parse_wordlist("perro gato auto").unwrap();
//! let generated = Generator::with_seed(7).generate(&words).unwrap();
//! let solution = Solver::new().solve(&generated.puzzle.grid, &words);
//! assert!(solution.is_complete());
//! ```

mod error;
mod filler;
mod generator;
pub mod geometry;
mod grid;
mod placement;
pub mod planner;
mod puzzle;
mod size;
mod solver;
mod words;

pub use error::{Error, Result};
pub use filler::{fill, random_letter};
pub use generator::{Generated, Generator};
pub use geometry::letter_positions;
pub use grid::Grid;
pub use placement::{Orientation, Placement, PlacementSet, Position};
pub use planner::{plan, Backtracking, PlannerConfig};
pub use puzzle::{parse_puzzles, write_puzzles, Puzzle, END_MARKER, START_MARKER};
pub use size::estimate_size;
pub use solver::{Solution, Solver};
pub use words::{is_letter, parse_wordlist, wordlist_from_tokens, Word, ALPHABET, MIN_WORD_LEN};
