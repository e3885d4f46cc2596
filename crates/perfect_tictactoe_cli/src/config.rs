//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::{Mark, Pruning};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the command-line front end.
///
/// Every field has a default, so a partial file (or no file) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mark the human plays in `play`.
    human: Mark,

    /// Search mode used by the solver.
    pruning: Pruning,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            human: Mark::X,
            pruning: Pruning::AlphaBeta,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(human = %settings.human, pruning = %settings.pruning, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, human: Option<Mark>, pruning: Option<Pruning>) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        if let Some(pruning) = pruning {
            self.pruning = pruning;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"O\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(*settings.human(), Mark::O);
        assert_eq!(*settings.pruning(), Pruning::AlphaBeta);
        assert_eq!(settings.log_filter(), "warn");
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"X\"").unwrap();
        writeln!(file, "pruning = \"disabled\"").unwrap();
        writeln!(file, "log_filter = \"perfect_tictactoe=debug\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(*settings.pruning(), Pruning::Disabled);
        assert_eq!(settings.log_filter(), "perfect_tictactoe=debug");
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"Z\"").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().with_overrides(Some(Mark::O), Some(Pruning::Disabled));
        assert_eq!(*settings.human(), Mark::O);
        assert_eq!(*settings.pruning(), Pruning::Disabled);

        let untouched = Settings::default().with_overrides(None, None);
        assert_eq!(untouched, Settings::default());
    }
}
