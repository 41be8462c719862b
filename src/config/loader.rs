//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Batch options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory holding the images to rename.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// First date of the name sequence. Defaults to today.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Whether to show hashing progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Only print the planned renames.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            start_date: None,
            show_progress: true,
            dry_run: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective working directory.
    pub fn directory(&self) -> PathBuf {
        self.options
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the sequence start date, reading the local clock once if unset.
    pub fn start_date(&self) -> NaiveDate {
        self.options
            .start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sequencer.toml");
        fs::write(
            &path,
            r#"
[options]
directory = "/photos"
start_date = "2020-06-14"
show_progress = false
dry_run = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.directory(), PathBuf::from("/photos"));
        assert_eq!(
            config.start_date(),
            NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()
        );
        assert!(!config.options.show_progress);
        assert!(config.options.dry_run);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sequencer.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.options.directory.is_none());
        assert!(config.options.show_progress);
        assert!(!config.options.dry_run);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sequencer.toml");
        fs::write(&path, "[options]\nstart_date = \"2020-02-30\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }
}
