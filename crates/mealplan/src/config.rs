//! Composer configuration.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Season;
use crate::error::{MenuError, Result};

/// Cuisines every composition starts from.
pub const DEFAULT_CUISINES: [&str; 6] = [
    "european",
    "asian",
    "mediterranean",
    "russian",
    "italian",
    "mexican",
];

/// Configuration for menu composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Acceptable cuisines before any dish is picked.
    pub cuisines: BTreeSet<String>,
    /// Pin the season instead of reading the local clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            cuisines: DEFAULT_CUISINES.iter().map(|c| c.to_string()).collect(),
            season: None,
        }
    }
}

impl ComposerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cuisine universe. Names are lower-cased.
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cuisines = cuisines
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Season to filter by: the pinned one, else today's.
    pub fn resolve_season(&self) -> Season {
        self.season.unwrap_or_else(Season::current)
    }

    /// Load configuration from a JSON file. Missing keys take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MenuError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: ComposerConfig = serde_json::from_str(&content)?;
        let cuisines = config.cuisines.clone();
        let config = config.with_cuisines(cuisines);
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never produce a non-universal dish.
    pub fn validate(&self) -> Result<()> {
        if self.cuisines.is_empty() {
            return Err(MenuError::Validation(
                "at least one cuisine must be configured".to_string(),
            ));
        }
        Ok(())
    }
}
