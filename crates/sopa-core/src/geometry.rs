//! Footprint computation shared by the planner, the filler and the solver.

use crate::{Orientation, Placement, Position};

/// Cells a placement occupies, paired with the letter written at each one.
///
/// Reversed orientations write the word back-to-front over the same cells
/// the forward orientation would use, so the start cell always holds the
/// first cell written, not the word's first letter.
pub fn letter_positions(placement: &Placement) -> Vec<(Position, char)> {
    let (row_step, col_step) = placement.orientation.step();
    let mut letters = placement.word.letters().to_vec();
    if placement.orientation.is_reversed() {
        letters.reverse();
    }

    letters
        .into_iter()
        .enumerate()
        .map(|(i, letter)| {
            let pos = Position::new(
                placement.start_row + i * row_step,
                placement.start_col + i * col_step,
            );
            (pos, letter)
        })
        .collect()
}

/// Last cell of a footprint of `len` letters
pub fn footprint_end(start: Position, len: usize, orientation: Orientation) -> Position {
    let (row_step, col_step) = orientation.step();
    let offset = len.saturating_sub(1);
    Position::new(start.row + offset * row_step, start.col + offset * col_step)
}

/// Whether a word of `len` letters starting at `start` stays inside a `size` grid
pub fn fits(start: Position, len: usize, orientation: Orientation, size: usize) -> bool {
    if len == 0 {
        return false;
    }
    // steps never go backwards, so the end cell is the furthest on both axes
    let end = footprint_end(start, len, orientation);
    end.row < size && end.col < size
}
