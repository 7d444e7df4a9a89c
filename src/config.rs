//! Trainer configuration file handling
//!
//! Settings are stored as pretty-printed JSON. Every field has a default, so a
//! partial file only overrides what it names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::scramble::DEFAULT_SCRAMBLE_LENGTH;

/// Longest scramble the config accepts
pub const MAX_CONFIG_SCRAMBLE_LENGTH: usize = 200;

/// Trainer settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Moves per generated scramble
    pub scramble_length: usize,
    /// Fixed seed for reproducible scrambles
    pub seed: Option<u64>,
    /// Delay between polled frames
    pub frame_interval_ms: u64,
    /// Show per-move explanations under the scramble
    pub show_explanations: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            frame_interval_ms: 30, // ~33 fps
            show_explanations: true,
        }
    }
}

impl TrainerConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.scramble_length == 0 {
            anyhow::bail!("Scramble length must be at least 1");
        }
        if self.scramble_length > MAX_CONFIG_SCRAMBLE_LENGTH {
            anyhow::bail!(
                "Scramble length must be at most {}",
                MAX_CONFIG_SCRAMBLE_LENGTH
            );
        }
        if !(1..=1000).contains(&self.frame_interval_ms) {
            anyhow::bail!("Frame interval must be between 1 and 1000 ms");
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrainerConfig::default();
        assert_eq!(config.scramble_length, 20);
        assert!(config.seed.is_none());
        assert!(config.show_explanations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let config = TrainerConfig {
            scramble_length: 25,
            seed: Some(42),
            ..Default::default()
        };
        let file = NamedTempFile::new().unwrap();
        config.save_to_file(file.path()).unwrap();

        let loaded = TrainerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 7}}"#).unwrap();

        let loaded = TrainerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.scramble_length, DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(loaded.frame_interval(), Duration::from_millis(30));
    }

    #[test]
    fn test_invalid_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(TrainerConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(TrainerConfig::load_from_file("/nonexistent/cubetrainer.json").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = TrainerConfig {
            scramble_length: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let huge = TrainerConfig {
            scramble_length: MAX_CONFIG_SCRAMBLE_LENGTH + 1,
            ..Default::default()
        };
        assert!(huge.validate().is_err());

        let no_interval = TrainerConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        let err = no_interval.validate().unwrap_err();
        assert!(err.to_string().contains("Frame interval"));
    }
}
