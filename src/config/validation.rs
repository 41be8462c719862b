//! Configuration validation logic.

use std::path::Path;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_directory(&config.directory())?;

    Ok(())
}

/// Validate the working directory.
pub fn validate_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(Error::ConfigValidation {
            field: "directory".to_string(),
            message: format!("Directory does not exist: {}", dir.display()),
        });
    }

    if !dir.is_dir() {
        return Err(Error::ConfigValidation {
            field: "directory".to_string(),
            message: format!("Not a directory: {}", dir.display()),
        });
    }

    Ok(())
}
