//! tmux backends - Imperative Shell
//!
//! The orchestrator only talks to tmux through the [`Multiplexer`] trait:
//!
//! - `cli`: runs the real `tmux` binary
//! - `dry_run`: records (and optionally prints) commands instead of running
//!   them, used by `--debug`

pub mod cli;
pub mod dry_run;

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use itertools::Itertools;

pub use cli::{parse_list_sessions, TmuxCli};
pub use dry_run::DryRun;

use crate::layout::TmuxOp;
use crate::Result;

/// Side-effect sink for tmux commands plus the existence check.
#[async_trait]
pub trait Multiplexer: Send + Sync {
    /// Whether a session named `id` exists. Lookup failures count as "no".
    async fn has_session(&self, id: &str) -> bool;

    /// Create a detached session.
    async fn new_session(&self, request: &NewSession) -> Result<()>;

    /// Run one layout operation. Failures are logged, never returned.
    async fn run(&self, op: &TmuxOp);

    /// Hand the terminal over to a tmux client until the user detaches.
    async fn attach(&self, id: &str) -> Result<()>;
}

/// Arguments for `new-session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub id: String,
    pub directory: Option<PathBuf>,
    /// tmux.conf passed with the global `-f` flag
    pub config_path: Option<String>,
}

impl NewSession {
    /// Arguments as handed to the tmux binary.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::new();
        if let Some(config) = &self.config_path {
            argv.extend(["-f".to_string(), config.clone()]);
        }
        argv.extend([
            "new-session".to_string(),
            "-d".to_string(),
            "-s".to_string(),
            self.id.clone(),
        ]);
        if let Some(dir) = &self.directory {
            argv.extend(["-c".to_string(), dir.to_string_lossy().into_owned()]);
        }
        argv
    }
}

impl fmt::Display for NewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmux {}", self.argv().iter().join(" "))
    }
}
