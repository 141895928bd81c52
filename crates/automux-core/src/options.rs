//! Runtime options
//!
//! Built once from CLI flags and the environment, then passed by reference
//! to the orchestrator. Nothing reads global state after startup.
//!
//! # Environment
//!
//! - `TMUX`: set by tmux inside a session; enables the re-entrancy guard
//! - `AUTOMUX_TMUX`: tmux binary to run instead of `tmux`
//! - `AUTOMUX_AWAIT_MS`: how long to wait for a new session to appear

use std::time::Duration;

use crate::{Error, Result};

/// Default tmux binary name.
pub const DEFAULT_TMUX_BIN: &str = "tmux";

/// Poll interval while waiting for a new session.
pub const DEFAULT_AWAIT_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound on the readiness wait.
pub const DEFAULT_AWAIT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Flags and environment that shape one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Print commands instead of running them
    pub debug: bool,
    /// Create sessions without attaching
    pub detached: bool,
    /// Already running inside a tmux client
    pub inside_multiplexer: bool,
    pub tmux_bin: String,
    pub await_interval: Duration,
    pub await_timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            debug: false,
            detached: false,
            inside_multiplexer: false,
            tmux_bin: DEFAULT_TMUX_BIN.to_string(),
            await_interval: DEFAULT_AWAIT_INTERVAL,
            await_timeout: DEFAULT_AWAIT_TIMEOUT,
        }
    }
}

impl RunOptions {
    /// Options for the given flags, with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns error if an environment variable holds an invalid value
    pub fn from_env(debug: bool, detached: bool) -> Result<Self> {
        Self {
            debug,
            detached,
            ..Self::default()
        }
        .apply_env_vars()
    }

    /// Apply environment variable overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if environment variable values are invalid
    pub fn apply_env_vars(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if `AUTOMUX_AWAIT_MS` is not an integer or
    /// `AUTOMUX_TMUX` is empty
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // TMUX
        self.inside_multiplexer = lookup("TMUX").is_some_and(|value| !value.is_empty());

        // AUTOMUX_TMUX
        if let Some(value) = lookup("AUTOMUX_TMUX") {
            if value.is_empty() {
                return Err(Error::invalid_config(
                    "AUTOMUX_TMUX cannot be empty - unset the variable or provide a binary",
                ));
            }
            self.tmux_bin = value;
        }

        // AUTOMUX_AWAIT_MS
        if let Some(value) = lookup("AUTOMUX_AWAIT_MS") {
            let millis: u64 = value.trim().parse().map_err(|e| {
                Error::invalid_config(format!("Invalid AUTOMUX_AWAIT_MS value: {e}"))
            })?;
            self.await_timeout = Duration::from_millis(millis);
        }

        Ok(self)
    }

    /// Running inside tmux without `--detached` must not touch tmux at all,
    /// or the new session would nest inside the current client.
    pub const fn should_skip(&self) -> bool {
        self.inside_multiplexer && !self.detached
    }

    /// Whether to hand the terminal to tmux once sessions exist.
    pub const fn should_attach(&self) -> bool {
        !self.debug && !self.detached
    }
}
