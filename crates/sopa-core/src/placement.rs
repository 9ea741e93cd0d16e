use crate::{Error, Result, Word};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The direction a word's letters follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    Horizontal,
    HorizontalReversed,
    Vertical,
    VerticalReversed,
    /// Top-left to bottom-right
    Diagonal,
}

impl Orientation {
    /// All orientations, in solver probe priority order
    pub const ALL: [Orientation; 5] = [
        Orientation::Horizontal,
        Orientation::HorizontalReversed,
        Orientation::Vertical,
        Orientation::VerticalReversed,
        Orientation::Diagonal,
    ];

    pub fn is_reversed(&self) -> bool {
        matches!(
            self,
            Orientation::HorizontalReversed | Orientation::VerticalReversed
        )
    }

    /// Row and column step between consecutive cells of a footprint
    pub fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal | Orientation::HorizontalReversed => (0, 1),
            Orientation::Vertical | Orientation::VerticalReversed => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }

    /// Stable numeric tag (1..=5)
    pub fn tag(&self) -> u8 {
        match self {
            Orientation::Horizontal => 1,
            Orientation::HorizontalReversed => 2,
            Orientation::Vertical => 3,
            Orientation::VerticalReversed => 4,
            Orientation::Diagonal => 5,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.tag() == tag)
            .ok_or_else(|| Error::UnsupportedOrientation(tag.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "HORIZONTAL",
            Orientation::HorizontalReversed => "HORIZONTAL_REVERSED",
            Orientation::Vertical => "VERTICAL",
            Orientation::VerticalReversed => "VERTICAL_REVERSED",
            Orientation::Diagonal => "DIAGONAL",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_uppercase().replace(['-', ' '], "_");
        Orientation::ALL
            .into_iter()
            .find(|o| o.name() == wanted)
            .ok_or_else(|| Error::UnsupportedOrientation(s.to_string()))
    }
}

/// A word's committed start cell and orientation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub word: Word,
    pub start_row: usize,
    pub start_col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(word: Word, start_row: usize, start_col: usize, orientation: Orientation) -> Self {
        Self {
            word,
            start_row,
            start_col,
            orientation,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_row, self.start_col)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {}",
            self.word, self.start_row, self.start_col, self.orientation
        )
    }
}

/// Word to placement mapping, iterated in commit order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementSet {
    placements: Vec<Placement>,
}

impl PlacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn get(&self, word: &Word) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.word == word)
    }

    /// Whether this exact placement (word, start, orientation) is present
    pub fn contains(&self, placement: &Placement) -> bool {
        self.get(&placement.word) == Some(placement)
    }

    /// Commit a placement; an existing entry for the same word is replaced in place
    pub fn insert(&mut self, placement: Placement) {
        match self.placements.iter_mut().find(|p| p.word == placement.word) {
            Some(existing) => *existing = placement,
            None => self.placements.push(placement),
        }
    }

    pub fn remove(&mut self, word: &Word) -> Option<Placement> {
        let idx = self.placements.iter().position(|p| &p.word == word)?;
        Some(self.placements.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// True if every placement here is also in `other`
    pub fn is_subset_of(&self, other: &PlacementSet) -> bool {
        self.placements.iter().all(|p| other.contains(p))
    }

    /// Letter held at every occupied cell
    pub fn occupancy(&self) -> HashMap<Position, char> {
        let mut cells = HashMap::new();
        for placement in &self.placements {
            for (pos, letter) in crate::geometry::letter_positions(placement) {
                cells.insert(pos, letter);
            }
        }
        cells
    }

    /// Check that overlapping placements agree on every shared cell
    pub fn is_consistent(&self) -> bool {
        let mut cells: HashMap<Position, char> = HashMap::new();
        for placement in &self.placements {
            for (pos, letter) in crate::geometry::letter_positions(placement) {
                if let Some(&existing) = cells.get(&pos) {
                    if existing != letter {
                        return false;
                    }
                }
                cells.insert(pos, letter);
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a PlacementSet {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

impl FromIterator<Placement> for PlacementSet {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        let mut set = PlacementSet::new();
        for placement in iter {
            set.insert(placement);
        }
        set
    }
}
