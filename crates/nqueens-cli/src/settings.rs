use anyhow::{Context, Result};
use log::debug;
use nqueens_core::solver::DEFAULT_DELAY_MS;
use nqueens_core::SolutionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Board size used when neither the command line nor the settings file
/// names one
pub const DEFAULT_BOARD_SIZE: i64 = 8;

/// Most solutions listed in a report
pub const DEFAULT_MAX_OUTPUT: usize = 50;

/// Persistent defaults, read from `settings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_size: i64,
    pub mode: SolutionMode,
    pub visualize: bool,
    /// Pause after each placement while visualizing
    pub delay_ms: u64,
    /// Most solutions listed in a report
    pub max_output: usize,
    /// Where `--export` writes when given without a directory
    pub export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            mode: SolutionMode::default(),
            visualize: false,
            delay_ms: DEFAULT_DELAY_MS,
            max_output: DEFAULT_MAX_OUTPUT,
            export_dir: None,
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/nqueens/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nqueens").join("settings.json"))
    }

    /// Load settings.
    ///
    /// An explicit path must exist and parse. The default path is optional:
    /// a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Export directory: the configured one, else
    /// `<local data dir>/nqueens/results`.
    pub fn results_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("nqueens")
                .join("results")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "board_size": 10, "mode": "All" }"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.board_size, 10);
        assert_eq!(settings.mode, SolutionMode::All);
        assert_eq!(settings.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(settings.max_output, DEFAULT_MAX_OUTPUT);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read settings"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ board_size: ").unwrap();
        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_configured_results_dir_wins() {
        let settings = Settings {
            export_dir: Some(PathBuf::from("/tmp/out")),
            ..Settings::default()
        };
        assert_eq!(settings.results_dir(), PathBuf::from("/tmp/out"));
    }
}
