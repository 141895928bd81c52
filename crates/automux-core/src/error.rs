//! Error types for automux with categorization:
//!
//! - **Validation errors**: malformed or unsupported configuration (exit code 1)
//! - **System errors**: IO and tmux process failures (exit code 2)
//! - **Not found**: no config document at the requested location (exit code 3)
//!
//! Merge and layout compilation never fail; every variant here originates at an
//! I/O boundary (reading a document, spawning tmux).

pub mod system;
pub mod validation;

use std::path::{Path, PathBuf};

pub use system::SystemError;
use thiserror::Error;
pub use validation::ValidationError;

/// Top-level error type that can represent any error in the system.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Validation error from a config document
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// System error from IO or the tmux binary
    #[error(transparent)]
    System(#[from] SystemError),
    /// No recognized config document at the given location
    #[error("Config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}

/// Result type alias for automux operations
pub type Result<T> = std::result::Result<T, Error>;

// Convenience constructors
impl Error {
    /// Create a validation error from an invalid config.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidConfig(msg.into()))
    }

    /// Create a validation error from a decoder failure.
    pub fn malformed(path: &Path, msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::Malformed {
            path: path.to_path_buf(),
            message: msg.into(),
        })
    }

    /// Create a validation error for a version the compiler does not understand.
    pub const fn unsupported_version(version: i64) -> Self {
        if version == 0 {
            Self::Validation(ValidationError::LegacyFormat)
        } else {
            Self::Validation(ValidationError::UnsupportedVersion(version))
        }
    }

    /// Create a system error from an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::IoError(msg.into()))
    }

    /// Create a system error from a tmux invocation failure.
    pub fn command_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::Command(msg.into()))
    }

    /// Create a not found error for a config location.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound(path.into())
    }

    /// Whether this error only signals the absence of a config document.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound(_))
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: User error (malformed or unsupported configuration)
    /// - 2: System error (IO, tmux)
    /// - 3: Not found (no config document)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(err) => err.exit_code(),
            Self::System(err) => err.exit_code(),
            Self::ConfigNotFound(_) => 3,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}
