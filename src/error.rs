//! Error types for the photo-sequencer application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // Integrity errors
    #[error("Duplicate content detected in {} file pair(s)", .pairs.len())]
    DuplicateContent { pairs: Vec<(PathBuf, PathBuf)> },

    #[error("Target name count ({names}) does not match file count ({files})")]
    LengthMismatch { files: usize, names: usize },

    #[error(
        "Content integrity violation: {} offending file(s), {expected} file(s) expected, {found} found",
        .files.len()
    )]
    ContentIntegrityViolation {
        files: Vec<PathBuf>,
        expected: usize,
        found: usize,
    },

    // File system errors
    #[error("Failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target already taken by an entry outside the batch: {}", .path.display())]
    TargetOccupied { path: PathBuf },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::InvalidDate(_)
            | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
            Error::DuplicateContent { .. } => exit_codes::ABORT,
            Error::LengthMismatch { .. } | Error::ContentIntegrityViolation { .. } => {
                exit_codes::INTEGRITY_ERROR
            }
            Error::Rename { .. } | Error::TargetOccupied { .. } | Error::Io(_) => {
                exit_codes::IO_ERROR
            }
            Error::InvalidFilename(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const INTEGRITY_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
