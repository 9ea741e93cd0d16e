use crate::{Grid, Orientation, Placement, PlacementSet, Position, Word};
use tracing::debug;

/// Outcome of solving one puzzle, in word-list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    results: Vec<(Word, Option<Placement>)>,
}

impl Solution {
    pub fn results(&self) -> &[(Word, Option<Placement>)] {
        &self.results
    }

    pub fn get(&self, word: &Word) -> Option<&Placement> {
        self.results
            .iter()
            .find(|(w, _)| w == word)
            .and_then(|(_, p)| p.as_ref())
    }

    /// Found placements, for highlighting
    pub fn placements(&self) -> PlacementSet {
        self.results.iter().filter_map(|(_, p)| p.clone()).collect()
    }

    /// Words that do not appear in the grid
    pub fn missing(&self) -> impl Iterator<Item = &Word> {
        self.results
            .iter()
            .filter(|(_, p)| p.is_none())
            .map(|(w, _)| w)
    }

    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|(_, p)| p.is_some())
    }
}

/// Unit struct solver; stateless, all state is per-call
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Locate every word of `words` in `grid`
    pub fn solve(&self, grid: &Grid, words: &[Word]) -> Solution {
        let results = words
            .iter()
            .map(|word| {
                let placement = self.find_word_placement(word, grid);
                if placement.is_none() {
                    debug!(%word, "word not found");
                }
                (word.clone(), placement)
            })
            .collect();
        Solution { results }
    }

    /// Cells holding the word's first letter, column by column
    pub fn first_letter_candidates(&self, word: &Word, grid: &Grid) -> Vec<Position> {
        let first = word.first_letter();
        grid.positions()
            .filter(|&pos| grid.get(pos) == Some(first))
            .collect()
    }

    /// First placement of `word` found from any anchor, probing orientations
    /// in `Orientation::ALL` order
    pub fn find_word_placement(&self, word: &Word, grid: &Grid) -> Option<Placement> {
        self.first_letter_candidates(word, grid)
            .into_iter()
            .find_map(|anchor| {
                Orientation::ALL
                    .into_iter()
                    .find_map(|orientation| probe(word, grid, anchor, orientation))
            })
    }
}

/// Read `word` from `anchor` along `orientation`, returning the placement
/// normalized to the footprint's first cell.
fn probe(word: &Word, grid: &Grid, anchor: Position, orientation: Orientation) -> Option<Placement> {
    let size = grid.size() as isize;
    let len = word.len() as isize;
    let (row, col) = (anchor.row as isize, anchor.col as isize);

    // Reading direction from the anchor, which holds the first letter
    let (row_step, col_step): (isize, isize) = match orientation {
        Orientation::Horizontal => (0, 1),
        Orientation::HorizontalReversed => (0, -1),
        Orientation::Vertical => (1, 0),
        Orientation::VerticalReversed => (-1, 0),
        Orientation::Diagonal => (1, 1),
    };

    let end_row = row + (len - 1) * row_step;
    let end_col = col + (len - 1) * col_step;
    if !(0..size).contains(&end_row) || !(0..size).contains(&end_col) {
        return None;
    }

    let matches = word.letters().iter().enumerate().all(|(i, &letter)| {
        let i = i as isize;
        let r = (row + i * row_step) as usize;
        let c = (col + i * col_step) as usize;
        grid.at(r, c) == letter
    });
    if !matches {
        return None;
    }

    Some(Placement::new(
        word.clone(),
        row.min(end_row) as usize,
        col.min(end_col) as usize,
        orientation,
    ))
}
