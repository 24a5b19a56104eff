//! Engine configuration.
//!
//! - `StartingSeeds`: seeds placed in every play pit on initialize (0, 3 or 4)
//! - `EngineConfig`: starting seeds plus the per-player undo budget
//!
//! `EngineConfig` is loadable from TOML. Missing keys fall back to defaults:
//!
//! ```toml
//! starting_seeds = 4
//! undo_budget = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of undos each player may spend per game.
pub const DEFAULT_UNDO_BUDGET: u8 = 3;

/// Seeds placed in each play pit when a game is initialized.
///
/// `Empty` produces an all-zero board. The presentation layer uses it as a
/// placeholder before the player picks three or four.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum StartingSeeds {
    Empty,
    #[default]
    Three,
    Four,
}

impl StartingSeeds {
    /// Seeds per play pit.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            StartingSeeds::Empty => 0,
            StartingSeeds::Three => 3,
            StartingSeeds::Four => 4,
        }
    }
}

impl TryFrom<u32> for StartingSeeds {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StartingSeeds::Empty),
            3 => Ok(StartingSeeds::Three),
            4 => Ok(StartingSeeds::Four),
            other => Err(ConfigError::InvalidStartingSeeds(other)),
        }
    }
}

impl From<StartingSeeds> for u32 {
    fn from(seeds: StartingSeeds) -> Self {
        seeds.count()
    }
}

impl std::fmt::Display for StartingSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Seeds per play pit when a game starts from this config.
    pub starting_seeds: StartingSeeds,

    /// Undos each player may spend per game. Zero disables undo.
    pub undo_budget: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_seeds: StartingSeeds::default(),
            undo_budget: DEFAULT_UNDO_BUDGET,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting seeds.
    #[must_use]
    pub fn with_starting_seeds(mut self, seeds: StartingSeeds) -> Self {
        self.starting_seeds = seeds;
        self
    }

    /// Set the per-player undo budget.
    #[must_use]
    pub fn with_undo_budget(mut self, budget: u8) -> Self {
        self.undo_budget = budget;
        self
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Render the default configuration as TOML.
    #[must_use]
    pub fn default_toml() -> String {
        toml::to_string(&Self::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.starting_seeds, StartingSeeds::Three);
        assert_eq!(config.undo_budget, 3);
    }

    #[test]
    fn test_starting_seeds_try_from() {
        assert_eq!(StartingSeeds::try_from(0).unwrap(), StartingSeeds::Empty);
        assert_eq!(StartingSeeds::try_from(3).unwrap(), StartingSeeds::Three);
        assert_eq!(StartingSeeds::try_from(4).unwrap(), StartingSeeds::Four);
        assert!(matches!(
            StartingSeeds::try_from(5),
            Err(ConfigError::InvalidStartingSeeds(5))
        ));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_starting_seeds(StartingSeeds::Four)
            .with_undo_budget(1);
        assert_eq!(config.starting_seeds.count(), 4);
        assert_eq!(config.undo_budget, 1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("starting_seeds = 4\n").unwrap();
        assert_eq!(config.starting_seeds, StartingSeeds::Four);
        assert_eq!(config.undo_budget, DEFAULT_UNDO_BUDGET);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_toml_rejects_bad_seed_count() {
        let err = EngineConfig::from_toml_str("starting_seeds = 6\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
        assert!(err.to_string().contains("starting seeds must be 0, 3 or 4"));
    }

    #[test]
    fn test_toml_rejects_unknown_key() {
        assert!(EngineConfig::from_toml_str("seeds = 3\n").is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_kalah.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = EngineConfig::load(Path::new("nonexistent_kalah.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kalah.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "undo_budget = 1").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.undo_budget, 1);
        assert_eq!(config.starting_seeds, StartingSeeds::Three);
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default_toml();
        let config = EngineConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
