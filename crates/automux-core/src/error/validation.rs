//! Validation error types for config documents.
//!
//! These errors represent configuration problems that can be corrected by the
//! user.

use std::path::PathBuf;

use thiserror::Error;

/// Highest config schema version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

/// Validation errors represent an unusable config document.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The decoder rejected the document
    #[error("Failed to parse config file {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },
    /// Version field missing or zero
    #[error(
        "you are using an old config format, see upgrade instructions\n\
         https://github.com/indeedhat/automux?tab=readme-ov-file#upgrade"
    )]
    LegacyFormat,
    /// Version newer than this build supports
    #[error(
        "automux config version {0} is not supported.\n \
         please update automux or downgrade your config version to {}",
        SUPPORTED_VERSION
    )]
    UnsupportedVersion(i64),
}

impl ValidationError {
    /// Get exit code for validation errors (always 1).
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the document was rejected by the version gate.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::LegacyFormat | Self::UnsupportedVersion(_))
    }
}
