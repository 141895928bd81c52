//! System error types for IO and tmux process execution.
//!
//! These errors represent failures in system operations that are typically
//! out of the user's direct control.

use thiserror::Error;

/// System errors represent failures in IO or the tmux binary.
#[derive(Debug, Clone, Error)]
pub enum SystemError {
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// tmux could not be spawned or exited unsuccessfully
    #[error("Command error: {0}")]
    Command(String),
}

impl SystemError {
    /// Get exit code for system errors (always 2).
    pub const fn exit_code(&self) -> i32 {
        2
    }
}
