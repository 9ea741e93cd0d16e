use crate::{estimate_size, filler, planner, Grid, PlacementSet, PlannerConfig, Puzzle, Result, Word};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// A freshly generated puzzle and the placements used to build it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub puzzle: Puzzle,
    pub placements: PlacementSet,
}

/// Word-search puzzle generator.
///
/// Owns its random source; give each concurrent caller its own generator.
pub struct Generator {
    config: PlannerConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: PlannerConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_config_and_seed(config: PlannerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Size the grid, plan placements and fill the board
    pub fn generate(&mut self, words: &[Word]) -> Result<Generated> {
        let size = estimate_size(words);
        debug!(words = words.len(), size, "generating puzzle");
        let placements = self.plan(words, size)?;
        let grid = self.fill(size, &placements);
        Ok(Generated {
            puzzle: Puzzle::new(grid, words.to_vec()),
            placements,
        })
    }

    pub fn plan(&mut self, words: &[Word], size: usize) -> Result<PlacementSet> {
        planner::plan(words, size, &self.config, &mut self.rng)
    }

    pub fn fill(&mut self, size: usize, placements: &PlacementSet) -> Grid {
        filler::fill(size, placements, &mut self.rng)
    }
}
