//! Optional `arena.toml` configuration.

use serde::Deserialize;
use std::path::Path;

/// Settings read from `arena.toml`. Every field has a default, so a partial
/// file is fine; CLI flags override whatever the file says.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Games per match
    pub games: u32,
    /// Search depth for matches
    pub depth: u8,
    /// Move cap per game
    pub max_moves: u32,
    /// Relay endpoint for the remote source
    pub endpoint: String,
    /// Depths visited by `arena sweep`
    pub depths: Vec<u8>,
    /// Games per depth in a sweep
    pub games_per_depth: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            depth: 3,
            max_moves: 200,
            endpoint: remote_engine::DEFAULT_ENDPOINT.to_string(),
            depths: vec![1, 2, 3],
            games_per_depth: 3,
        }
    }
}

impl ArenaConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Config from `path` if it exists, defaults otherwise. A file that
    /// exists but does not parse is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
