//! User settings schema (YAML).
//!
//! Small on purpose: dice rendering style, an optional fixed dice seed, and
//! the NDJSON game-log location.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Settings loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// How dice are drawn in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceStyle {
    /// Pip patterns, like a physical die.
    Dots,
    /// Plain digits.
    Numerals,
}

impl Default for DiceStyle {
    fn default() -> Self {
        DiceStyle::Dots
    }
}

/// Game-log settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// If true, append mark/game_over events to `path`.
    #[serde(default)]
    pub enabled: bool,
    /// NDJSON file path.
    #[serde(default = "default_log_path")]
    pub path: String,
}

fn default_log_path() -> String {
    "games.ndjson".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
        }
    }
}

/// Root settings structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Dice rendering style.
    #[serde(default)]
    pub dice_style: DiceStyle,
    /// Fixed dice seed. If unset, dice come from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Game logging.
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.enabled && self.log.path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "log.path must be non-empty when log.enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.dice_style, DiceStyle::Dots);
        assert_eq!(s.seed, None);
        assert!(!s.log.enabled);
        assert_eq!(s.log.path, "games.ndjson");
    }

    #[test]
    fn parse_yaml_string() {
        let yaml = r#"
dice_style: numerals
seed: 42
log:
  enabled: true
  path: "out/games.ndjson"
"#;
        let s = Settings::from_yaml(yaml).expect("parse");
        assert_eq!(s.dice_style, DiceStyle::Numerals);
        assert_eq!(s.seed, Some(42));
        assert!(s.log.enabled);
        assert_eq!(s.log.path, "out/games.ndjson");
    }

    #[test]
    fn partial_yaml_applies_defaults() {
        let s = Settings::from_yaml("seed: 7\n").expect("parse");
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.dice_style, DiceStyle::Dots);
        assert!(!s.log.enabled);
    }

    #[test]
    fn invalid_yaml_fails() {
        let invalid = "this is not: valid: yaml: {{{}}}";
        assert!(Settings::from_yaml(invalid).is_err());
    }

    #[test]
    fn enabled_log_requires_path() {
        let yaml = "log:\n  enabled: true\n  path: \"  \"\n";
        let err = Settings::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
