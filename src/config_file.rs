//! Configuration file handling for the calculator front end.
//!
//! The file is JSON. Every field has a default, so a partial file (or `{}`)
//! is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::KeypadMode;

/// Longest allowed press highlight, in milliseconds
pub const MAX_PRESS_HIGHLIGHT_MS: u64 = 2000;

/// Front end configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Keypad mode at startup
    pub start_mode: KeypadMode,
    /// Whether the history panel is open at startup
    pub show_history: bool,
    /// How long a pressed keypad button stays highlighted
    pub press_highlight_ms: u64,
    /// Minimum horizontal drag, in columns, recognised as a swipe
    pub swipe_threshold: u16,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            start_mode: KeypadMode::Normal,
            show_history: false,
            press_highlight_ms: 200,
            swipe_threshold: 8,
        }
    }
}

impl CalculatorConfig {
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
        if self.press_highlight_ms > MAX_PRESS_HIGHLIGHT_MS {
            anyhow::bail!(
                "press_highlight_ms must be at most {} (got {})",
                MAX_PRESS_HIGHLIGHT_MS,
                self.press_highlight_ms
            );
        }

        if self.swipe_threshold == 0 {
            anyhow::bail!("swipe_threshold must be at least 1");
        }

        Ok(())
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(mut self, scientific: bool, show_history: bool) -> Self {
        if scientific {
            self.start_mode = KeypadMode::Scientific;
        }
        if show_history {
            self.show_history = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.start_mode, KeypadMode::Normal);
        assert!(!config.show_history);
        assert_eq!(config.press_highlight_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_json_config() {
        let config = CalculatorConfig {
            start_mode: KeypadMode::Scientific,
            show_history: true,
            press_highlight_ms: 150,
            swipe_threshold: 4,
        };
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();
        let loaded = CalculatorConfig::load_from_file(temp_file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "start_mode": "scientific" }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let loaded = CalculatorConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.start_mode, KeypadMode::Scientific);
        assert_eq!(loaded.swipe_threshold, CalculatorConfig::default().swipe_threshold);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = CalculatorConfig::load_from_file(Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ invalid json }").unwrap();
        temp_file.flush().unwrap();

        let result = CalculatorConfig::load_from_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_limits() {
        let config = CalculatorConfig {
            press_highlight_ms: MAX_PRESS_HIGHLIGHT_MS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CalculatorConfig {
            swipe_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = CalculatorConfig::default().with_overrides(true, false);
        assert_eq!(config.start_mode, KeypadMode::Scientific);
        assert!(!config.show_history);

        let config = CalculatorConfig::default().with_overrides(false, true);
        assert_eq!(config.start_mode, KeypadMode::Normal);
        assert!(config.show_history);
    }
}
