//! Recording backend for `--debug`
//!
//! Nothing is executed: every command is rendered as the `tmux ...` line it
//! would have run, kept in order, and optionally echoed to stdout.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Multiplexer, NewSession};
use crate::layout::TmuxOp;
use crate::Result;

/// Backend that records commands instead of running them.
#[derive(Debug, Default)]
pub struct DryRun {
    existing: HashSet<String>,
    echo: bool,
    lines: Mutex<Vec<String>>,
}

impl DryRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions `has_session` should report as already running.
    pub fn with_existing<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Print each command to stdout as it is recorded.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Everything recorded so far, in order.
    pub async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }

    async fn record(&self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.lines.lock().await.push(line);
    }
}

#[async_trait]
impl Multiplexer for DryRun {
    async fn has_session(&self, id: &str) -> bool {
        self.existing.contains(id)
    }

    async fn new_session(&self, request: &NewSession) -> Result<()> {
        self.record(request.to_string()).await;
        Ok(())
    }

    async fn run(&self, op: &TmuxOp) {
        self.record(op.to_string()).await;
    }

    async fn attach(&self, id: &str) -> Result<()> {
        self.record(format!("tmux attach -t {id}")).await;
        Ok(())
    }
}
