use crate::search::{
    SearchError, DEFAULT_CYCLE_LOOKBACK, DEFAULT_DEPTH_LIMIT, DEFAULT_HEURISTIC_WEIGHT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters of the search engines. Every field has a default, so a
/// config file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchConfig {
    /// Heuristic weight of weighted A*.
    pub weight: f64,
    /// Depth bound of depth limited search.
    pub depth_limit: usize,
    /// How many ancestors the cycle check of the best-first tree search looks
    /// at. The depth-first engines always check the whole path.
    pub cycle_lookback: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weight: DEFAULT_HEURISTIC_WEIGHT,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            cycle_lookback: DEFAULT_CYCLE_LOOKBACK,
        }
    }
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        Ok(toml::from_str(text)?)
    }
}
