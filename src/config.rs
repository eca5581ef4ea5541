//! Session configuration
//!
//! Stored as JSON in `~/.config/trie_viz/config.json` (or the platform
//! equivalent). Every field is optional in the file; missing fields fall
//! back to their defaults, and command-line flags override the file.

use crate::logging::LogLevel;
use crate::model::TrieVariant;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for rendered views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Startup settings for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variant selected when the session starts
    pub default_variant: TrieVariant,
    /// Start in graph mode instead of text mode
    pub start_in_graph_mode: bool,
    /// Minimum level for log events on stderr
    pub log_level: LogLevel,
    /// How rendered views are written to stdout
    pub output: OutputFormat,
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("trie_viz").join("config.json"))
    }

    /// Load a config file, failing if it is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load from an explicit path, or from the default location if present
    ///
    /// An explicit path must exist. The default location is optional, and
    /// defaults are returned when it is absent or cannot be resolved.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Write this config as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_variant, TrieVariant::Generic);
        assert!(!config.start_in_graph_mode);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_variant":"receipt"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_variant, TrieVariant::Receipt);
        assert!(!config.start_in_graph_mode);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            default_variant: TrieVariant::Transaction,
            start_in_graph_mode: true,
            log_level: LogLevel::Debug,
            output: OutputFormat::Text,
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = Config::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_variant":"account"}"#).unwrap();
        assert!(Config::load(&path).is_err());
    }
}
