//! Randomized backtracking placement of words on a square grid.
//!
//! Words are placed in list order. Each word scans a shuffled candidate
//! space of every start cell crossed with every orientation and takes the
//! first candidate that fits and agrees with the letters already committed.
//! When a word has no valid candidate the previous word is retracted and
//! re-rolled with the earlier placements held fixed.

use crate::geometry::{fits, letter_positions};
use crate::{Error, Orientation, Placement, PlacementSet, Position, Result, Word};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// How the planner handles a dead end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backtracking {
    /// Record every configuration that led to a dead end and never re-enter it
    #[default]
    Memoized,
    /// Plain chronological retraction; may retry a known-bad configuration
    Chronological,
}

/// Configuration for placement planning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub strategy: Backtracking,
    /// Retractions allowed before giving up with `Unplaceable`
    pub max_retractions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: Backtracking::Memoized,
            max_retractions: 10_000,
        }
    }
}

impl PlannerConfig {
    pub fn chronological() -> Self {
        Self {
            strategy: Backtracking::Chronological,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanState {
    /// Looking for a placement for the word at this index
    Placing(usize),
    /// The word at this index had no valid candidate
    Retracting(usize),
    Done,
    Failed,
}

struct Planner<'a> {
    words: &'a [Word],
    size: usize,
    config: &'a PlannerConfig,
    placements: PlacementSet,
    failed: Vec<PlacementSet>,
    retractions: usize,
}

/// Assign every word a conflict-free placement on a `size` grid.
///
/// Words are expected to be unique. Identical inputs and an identically
/// seeded `rng` give an identical result.
pub fn plan<R: Rng + ?Sized>(
    words: &[Word],
    size: usize,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<PlacementSet> {
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }
    if let Some(word) = words.iter().find(|w| w.len() > size) {
        warn!(%word, size, "word is longer than the grid");
        return Err(Error::Unplaceable {
            words: words.len(),
            size,
            retractions: 0,
        });
    }

    Planner::new(words, size, config).run(rng, |_, _| {})
}

impl<'a> Planner<'a> {
    fn new(words: &'a [Word], size: usize, config: &'a PlannerConfig) -> Self {
        Self {
            words,
            size,
            config,
            placements: PlacementSet::new(),
            failed: Vec::new(),
            retractions: 0,
        }
    }

    /// Drive the state machine; `on_commit` sees the prefix each placement is committed on
    fn run<R, F>(mut self, rng: &mut R, mut on_commit: F) -> Result<PlacementSet>
    where
        R: Rng + ?Sized,
        F: FnMut(&PlacementSet, &Placement),
    {
        let words = self.words;
        let size = self.size;
        let mut state = PlanState::Placing(0);
        loop {
            state = match state {
                PlanState::Placing(i) if i == words.len() => PlanState::Done,
                PlanState::Placing(i) => match self.try_to_place(&words[i], rng) {
                    Some(placement) => {
                        trace!(%placement, "committed");
                        on_commit(&self.placements, &placement);
                        self.placements.insert(placement);
                        PlanState::Placing(i + 1)
                    }
                    None => PlanState::Retracting(i),
                },
                PlanState::Retracting(i) => self.retract(i),
                PlanState::Done => {
                    debug!(
                        words = words.len(),
                        size,
                        retractions = self.retractions,
                        "placement complete"
                    );
                    return Ok(self.placements);
                }
                PlanState::Failed => {
                    warn!(
                        words = words.len(),
                        size,
                        retractions = self.retractions,
                        "giving up on placement"
                    );
                    return Err(Error::Unplaceable {
                        words: words.len(),
                        size,
                        retractions: self.retractions,
                    });
                }
            };
        }
    }

    fn try_to_place<R: Rng + ?Sized>(&self, word: &Word, rng: &mut R) -> Option<Placement> {
        let mut positions: Vec<Position> = (0..self.size)
            .flat_map(|col| (0..self.size).map(move |row| Position::new(row, col)))
            .collect();
        let mut orientations = Orientation::ALL;
        positions.shuffle(rng);
        orientations.shuffle(rng);

        let occupied = self.placements.occupancy();
        let known_bad = match self.config.strategy {
            Backtracking::Memoized => known_bad_extensions(&self.placements, &self.failed),
            Backtracking::Chronological => Vec::new(),
        };

        for pos in positions {
            for &orientation in &orientations {
                let candidate = Placement::new(word.clone(), pos.row, pos.col, orientation);
                if should_skip_placement(&candidate, &known_bad) {
                    continue;
                }
                if is_placement_valid(&candidate, &occupied, self.size) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn retract(&mut self, i: usize) -> PlanState {
        if i == 0 || self.retractions >= self.config.max_retractions {
            return PlanState::Failed;
        }
        self.retractions += 1;

        if self.config.strategy == Backtracking::Memoized {
            self.failed.push(self.placements.clone());
        }

        let back = i - 1;
        let retracted = self.placements.remove(&self.words[back]);
        debug!(
            failed_word = %self.words[i],
            retracted = ?retracted.as_ref().map(|p| p.word.as_str()),
            retractions = self.retractions,
            "retracting"
        );
        PlanState::Placing(back)
    }
}

/// Check bounds and letter agreement of `candidate` against the occupied cells
/// of the committed placements
pub fn is_placement_valid(
    candidate: &Placement,
    occupied: &HashMap<Position, char>,
    size: usize,
) -> bool {
    fits(
        candidate.start(),
        candidate.word.len(),
        candidate.orientation,
        size,
    ) && letter_positions(candidate)
        .into_iter()
        .all(|(pos, letter)| occupied.get(&pos).map_or(true, |&other| other == letter))
}

/// Failed configurations that extend `committed`; only these can rule out a
/// candidate for the next word
pub fn known_bad_extensions<'f>(
    committed: &PlacementSet,
    failed: &'f [PlacementSet],
) -> Vec<&'f PlacementSet> {
    failed
        .iter()
        .filter(|f| committed.is_subset_of(f))
        .collect()
}

/// Whether committing `candidate` would recreate a configuration already known
/// to lead to a dead end. `known_bad` comes from [`known_bad_extensions`].
pub fn should_skip_placement(candidate: &Placement, known_bad: &[&PlacementSet]) -> bool {
    known_bad.iter().any(|f| f.contains(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{estimate_size, parse_wordlist};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const DICTIONARY: &str = "MANY DAFFY INCREDIBLE MATCH PENITENT ADMIT DECOROUS BROAD STUPID \
        AGONIZING DISGUSTED DROP FORGETFUL RULE OBESE CATS TYPICAL SPACE BOTTLE RARE FILTHY \
        SMOKE WOOZY YOUTHFUL CROWDED RACE ITCHY SOUND PUNCH MESS EARTH SOFT MEAL ANNOYED HOME \
        DETERMINED FINICKY CLOISTERED FEAR MUTE FRESH ZANY HELP OVEN SILLY PIE DAM ALARM WILD \
        WAVE NIGHT ACOUSTIC CREEPY WHOLESALE BLINK NEIGHBORLY WONDERFUL RUN SLEEPY EXUBERANT";

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn assert_invariants(words: &[Word], placements: &PlacementSet, size: usize) {
        assert_eq!(placements.len(), words.len());
        for w in words {
            let placement = placements.get(w).expect("every word placed");
            for (pos, _) in letter_positions(placement) {
                assert!(pos.row < size && pos.col < size, "{placement} out of bounds");
            }
        }
        assert!(placements.is_consistent());
    }

    #[test]
    fn test_is_placement_valid() {
        let placements: PlacementSet = [
            Placement::new(word("GATO"), 2, 2, Orientation::Diagonal),
            Placement::new(word("AUTO"), 6, 0, Orientation::HorizontalReversed),
        ]
        .into_iter()
        .collect();
        let perro = word("PERRO");

        let across = Placement::new(perro.clone(), 0, 0, Orientation::Horizontal);
        let off_board = Placement::new(perro.clone(), 6, 6, Orientation::Diagonal);
        let shares_o = Placement::new(perro.clone(), 1, 5, Orientation::Vertical);
        let clashes = Placement::new(perro, 1, 2, Orientation::VerticalReversed);

        let occupied = placements.occupancy();
        assert!(is_placement_valid(&across, &occupied, 7));
        assert!(!is_placement_valid(&off_board, &occupied, 7));
        assert!(is_placement_valid(&shares_o, &occupied, 7));
        assert!(!is_placement_valid(&clashes, &occupied, 7));
    }

    #[test]
    fn test_should_skip_placement() {
        let gato = Placement::new(word("GATO"), 0, 0, Orientation::Horizontal);
        let auto = Placement::new(word("AUTO"), 1, 0, Orientation::Horizontal);
        let failed: Vec<PlacementSet> = vec![[gato.clone(), auto.clone()].into_iter().collect()];

        let prefix: PlacementSet = [gato.clone()].into_iter().collect();
        let known_bad = known_bad_extensions(&prefix, &failed);
        assert_eq!(known_bad.len(), 1);
        assert!(should_skip_placement(&auto, &known_bad));

        let elsewhere = Placement::new(word("AUTO"), 2, 0, Orientation::Horizontal);
        assert!(!should_skip_placement(&elsewhere, &known_bad));

        let other_prefix: PlacementSet =
            [Placement::new(word("GATO"), 3, 0, Orientation::Horizontal)]
                .into_iter()
                .collect();
        let known_bad = known_bad_extensions(&other_prefix, &failed);
        assert!(known_bad.is_empty());
        assert!(!should_skip_placement(&auto, &known_bad));
    }

    #[test]
    fn test_plan_places_every_word() {
        let words = parse_wordlist(DICTIONARY).unwrap();
        for seed in 0..40u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut chosen = words.clone();
            chosen.shuffle(&mut rng);
            chosen.truncate(10);

            let size = estimate_size(&chosen);
            let placements = plan(&chosen, size, &PlannerConfig::default(), &mut rng).unwrap();
            assert_invariants(&chosen, &placements, size);
        }
    }

    #[test]
    fn test_commit_order_follows_word_list() {
        let words = parse_wordlist("PERRO GATO AUTO CASA").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let placements = plan(&words, 8, &PlannerConfig::default(), &mut rng).unwrap();
        let order: Vec<&Word> = placements.iter().map(|p| &p.word).collect();
        assert_eq!(order, words.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_plan_chronological() {
        let words = parse_wordlist("PERRO ELECTRON COMIDA RELOJ TERMO").unwrap();
        let size = estimate_size(&words);
        for seed in 0..10u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placements = plan(&words, size, &PlannerConfig::chronological(), &mut rng).unwrap();
            assert_invariants(&words, &placements, size);
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let words = parse_wordlist("CAT DOG").unwrap();
        let size = estimate_size(&words);
        let first = plan(&words, size, &PlannerConfig::default(), &mut StdRng::seed_from_u64(7));
        let second = plan(&words, size, &PlannerConfig::default(), &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_dense_list_is_exhausted_before_the_budget() {
        // Eight 4-letter words cannot share the nine lines of a 4x4 board
        let words = parse_wordlist("CASA ASAS SACO OCAS ALAS SALA CAOS COSA").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        match plan(&words, 4, &PlannerConfig::default(), &mut rng) {
            Err(Error::Unplaceable {
                words: 8,
                size: 4,
                retractions,
            }) => {
                assert!(retractions > 0);
                assert!(retractions < PlannerConfig::default().max_retractions);
            }
            other => panic!("expected the search to run out of options, got {other:?}"),
        }
    }

    #[test]
    fn test_word_longer_than_grid() {
        let words = parse_wordlist("ELECTRON").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            plan(&words, 5, &PlannerConfig::default(), &mut rng),
            Err(Error::Unplaceable {
                words: 1,
                size: 5,
                retractions: 0
            })
        );
    }

    #[test]
    fn test_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            plan(&[], 5, &PlannerConfig::default(), &mut rng),
            Err(Error::EmptyWordList)
        );
    }

    #[test]
    fn test_retraction_budget() {
        // A 2x2 board holds at most two disjoint two-letter words
        let words = parse_wordlist("AB CD EF GH").unwrap();
        let config = PlannerConfig {
            strategy: Backtracking::Chronological,
            max_retractions: 25,
        };
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            plan(&words, 2, &config, &mut rng),
            Err(Error::Unplaceable { retractions: 25, .. })
        ));
    }

    #[test]
    fn test_memoized_search_exhausts() {
        let words = parse_wordlist("AB CD EF").unwrap();
        let config = PlannerConfig {
            strategy: Backtracking::Memoized,
            max_retractions: usize::MAX,
        };
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            plan(&words, 2, &config, &mut rng),
            Err(Error::Unplaceable { .. })
        ));
    }

    fn plan_recording(
        words: &[Word],
        size: usize,
        config: &PlannerConfig,
        seed: u64,
    ) -> (Result<PlacementSet>, Vec<(PlacementSet, Placement)>) {
        let mut commits = Vec::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let result = Planner::new(words, size, config).run(&mut rng, |prefix, placement| {
            commits.push((prefix.clone(), placement.clone()))
        });
        (result, commits)
    }

    #[test]
    fn test_memoized_never_repeats_a_commit() {
        let words = parse_wordlist("AB CD EF").unwrap();
        let config = PlannerConfig {
            strategy: Backtracking::Memoized,
            max_retractions: usize::MAX,
        };
        let (result, commits) = plan_recording(&words, 2, &config, 5);
        assert!(matches!(result, Err(Error::Unplaceable { .. })));
        assert!(commits.len() > words.len());

        let mut seen = HashSet::new();
        for (prefix, placement) in &commits {
            assert!(
                seen.insert((prefix.clone(), placement.clone())),
                "{placement} committed twice on the same prefix"
            );
        }
    }

    #[test]
    fn test_chronological_repeats_commits() {
        // 9 placements for AB and at most 9 for CD under each: 90 distinct
        // commits at most, fewer than the 200 retractions allowed
        let words = parse_wordlist("AB CD EF").unwrap();
        let config = PlannerConfig {
            strategy: Backtracking::Chronological,
            max_retractions: 200,
        };
        let (result, commits) = plan_recording(&words, 2, &config, 5);
        assert!(matches!(
            result,
            Err(Error::Unplaceable { retractions: 200, .. })
        ));
        let distinct: HashSet<_> = commits.iter().cloned().collect();
        assert!(distinct.len() < commits.len());
    }

    #[test]
    fn test_commits_extend_the_prefix() {
        let words = parse_wordlist("ABC DEF GHI ADG").unwrap();
        let config = PlannerConfig {
            strategy: Backtracking::Memoized,
            max_retractions: usize::MAX,
        };
        let (result, commits) = plan_recording(&words, 3, &config, 5);
        for (prefix, placement) in &commits {
            assert_eq!(placement.word, words[prefix.len()]);
            assert!(is_placement_valid(placement, &prefix.occupancy(), 3));
        }
        if let Ok(placements) = result {
            assert_invariants(&words, &placements, 3);
        }
    }
}
