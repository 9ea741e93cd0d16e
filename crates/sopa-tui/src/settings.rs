use crate::theme::ThemeName;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sopa_core::{Backtracking, PlannerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User preferences, stored as JSON in the platform config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color the letters of placed and found words
    pub highlight: bool,
    pub theme: ThemeName,
    /// Planner retraction budget before a word list is reported as unplaceable
    pub max_retractions: usize,
    pub strategy: Backtracking,
}

impl Default for Settings {
    fn default() -> Self {
        let planner = PlannerConfig::default();
        Self {
            highlight: true,
            theme: ThemeName::Dark,
            max_retractions: planner.max_retractions,
            strategy: planner.strategy,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sopa")
            .join("settings.json")
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid settings file");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating settings directory {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        Ok(())
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            strategy: self.strategy,
            max_retractions: self.max_retractions,
        }
    }
}
