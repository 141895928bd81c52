//! Real tmux backend
//!
//! Every call spawns the tmux binary. Layout operations are fire-and-forget:
//! a failing `send-keys` should not abort the rest of the layout.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use super::{Multiplexer, NewSession};
use crate::layout::TmuxOp;
use crate::{Error, Result};

/// Backend that shells out to `tmux`.
#[derive(Debug, Clone)]
pub struct TmuxCli {
    bin: PathBuf,
}

impl TmuxCli {
    /// Resolve `bin` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns error if the binary cannot be found.
    pub fn locate(bin: &str) -> Result<Self> {
        which::which(bin)
            .map(|bin| Self { bin })
            .map_err(|e| {
                Error::command_error(format!(
                    "tmux is not installed or not in PATH ('{bin}'): {e}"
                ))
            })
    }

    /// Path of the tmux binary in use.
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Names of all running sessions.
    ///
    /// # Errors
    ///
    /// Returns error if tmux cannot be spawned or no server is running.
    pub async fn list_sessions(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.bin)
            .args(["list-sessions", "-F", "#{session_name}"])
            .output()
            .await
            .map_err(|e| Error::command_error(format!("Failed to execute tmux: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::command_error(format!(
                "tmux list-sessions failed: {}",
                stderr.trim()
            )));
        }

        Ok(parse_list_sessions(&String::from_utf8_lossy(&output.stdout)))
    }
}

#[async_trait]
impl Multiplexer for TmuxCli {
    async fn has_session(&self, id: &str) -> bool {
        match self.list_sessions().await {
            Ok(names) => names.iter().any(|name| name == id),
            Err(e) => {
                tracing::debug!(error = %e, "session lookup failed, assuming absent");
                false
            }
        }
    }

    async fn new_session(&self, request: &NewSession) -> Result<()> {
        let mut cmd = Command::new(&self.bin);
        cmd.args(request.argv());
        if let Some(dir) = request.directory.as_deref().filter(|dir| dir.is_dir()) {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::command_error(format!("Failed to execute tmux: {e}")))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::command_error(format!(
                "tmux new-session -s {} failed: {}",
                request.id,
                stderr.trim()
            )))
        }
    }

    async fn run(&self, op: &TmuxOp) {
        match Command::new(&self.bin).args(op.argv()).output().await {
            Ok(output) if output.status.success() => {}
            Ok(output) => tracing::debug!(
                op = %op,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "tmux operation failed"
            ),
            Err(e) => tracing::debug!(op = %op, error = %e, "failed to execute tmux"),
        }
    }

    async fn attach(&self, id: &str) -> Result<()> {
        let status = Command::new(&self.bin)
            .args(["attach", "-t", id])
            .status()
            .await
            .map_err(|e| Error::command_error(format!("Failed to execute tmux attach: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::command_error(format!(
                "Failed to attach to session '{id}'"
            )))
        }
    }
}

/// Parse `list-sessions -F '#{session_name}'` output.
pub fn parse_list_sessions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
