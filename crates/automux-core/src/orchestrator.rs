//! Session orchestration - Imperative Shell
//!
//! Drives a resolved session tree through a [`Multiplexer`]:
//!
//! 1. Check whether the master session exists
//! 2. Create it if absent, wait until tmux reports it, then send its layout
//! 3. Do the same for every sub-session, depth-first in declared order
//! 4. Attach to the master unless running in debug or detached mode
//!
//! All decisions about *what* to send live in [`crate::layout`]; this module
//! only sequences the calls.

use std::time::Duration;

use crate::config::Session;
use crate::layout::compile;
use crate::options::RunOptions;
use crate::tmux::{Multiplexer, NewSession};
use crate::Result;

/// What happened to one session during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Created and laid out
    Created,
    /// Already running; left untouched
    AlreadyRunning,
    /// Sub-session without a `session_id`
    MissingId,
}

/// Per-session entry of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub id: Option<String>,
    pub action: SessionAction,
}

/// Result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Nothing was done because we are already inside tmux
    pub nested: bool,
    pub sessions: Vec<SessionReport>,
    /// Session the terminal was handed to, if any
    pub attached: Option<String>,
}

impl Outcome {
    fn nested() -> Self {
        Self {
            nested: true,
            ..Self::default()
        }
    }

    /// Number of sessions created by this run.
    pub fn created(&self) -> usize {
        self.sessions
            .iter()
            .filter(|report| report.action == SessionAction::Created)
            .count()
    }
}

/// Sequences session creation against a backend.
pub struct Orchestrator<'a, M: Multiplexer + ?Sized> {
    mux: &'a M,
    options: &'a RunOptions,
}

impl<'a, M: Multiplexer + ?Sized> Orchestrator<'a, M> {
    pub const fn new(mux: &'a M, options: &'a RunOptions) -> Self {
        Self { mux, options }
    }

    /// Materialize `session` and its sub-sessions.
    ///
    /// # Errors
    ///
    /// Returns error if the master has no id, or if creating a session or
    /// attaching fails
    pub async fn run(&self, session: &Session) -> Result<Outcome> {
        if self.options.should_skip() {
            tracing::info!("already inside a tmux session, nothing to do");
            return Ok(Outcome::nested());
        }

        let id = session.require_id()?;
        let mut outcome = Outcome::default();

        if self.mux.has_session(id).await {
            tracing::info!(session = id, "session already running");
            outcome.sessions.push(report(Some(id), SessionAction::AlreadyRunning));
            if !session.attach_existing() {
                return Ok(outcome);
            }
        } else {
            self.materialize(id, session).await?;
            outcome.sessions.push(report(Some(id), SessionAction::Created));

            for (index, sub) in flatten(&session.sub_sessions).into_iter().enumerate() {
                outcome.sessions.push(self.run_sub_session(index, sub).await?);
            }
        }

        if self.options.should_attach() {
            self.mux.attach(id).await?;
            outcome.attached = Some(id.to_string());
        }

        Ok(outcome)
    }

    async fn run_sub_session(&self, index: usize, session: &Session) -> Result<SessionReport> {
        let Some(id) = session.id() else {
            tracing::warn!(
                index,
                directory = ?session.directory,
                "sub-session has no session_id, skipping"
            );
            return Ok(report(None, SessionAction::MissingId));
        };

        if self.mux.has_session(id).await {
            tracing::info!(session = id, "sub-session already running");
            return Ok(report(Some(id), SessionAction::AlreadyRunning));
        }

        self.materialize(id, session).await?;
        Ok(report(Some(id), SessionAction::Created))
    }

    async fn materialize(&self, id: &str, session: &Session) -> Result<()> {
        let request = NewSession {
            id: id.to_string(),
            directory: session.directory.clone(),
            config_path: session.config_path().map(ToString::to_string),
        };

        tracing::info!(session = id, directory = ?request.directory, "creating session");
        self.mux.new_session(&request).await?;

        if !self.options.debug {
            self.await_session(id).await;
        }

        let layout = compile(id, session.directory.as_deref(), &session.windows);
        for op in &layout.ops {
            tracing::debug!(op = %op, "sending");
            self.mux.run(op).await;
        }

        Ok(())
    }

    /// Poll until tmux reports `id`, giving up silently at the timeout.
    async fn await_session(&self, id: &str) {
        let period = self.options.await_interval.max(Duration::from_millis(1));
        let poll = async {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                if self.mux.has_session(id).await {
                    return;
                }
            }
        };

        if tokio::time::timeout(self.options.await_timeout, poll)
            .await
            .is_err()
        {
            tracing::debug!(session = id, "session not observable yet, continuing");
        }
    }
}

fn report(id: Option<&str>, action: SessionAction) -> SessionReport {
    SessionReport {
        id: id.map(ToString::to_string),
        action,
    }
}

/// Sub-sessions in creation order: each one followed by its own descendants.
pub fn flatten(sessions: &[Session]) -> Vec<&Session> {
    sessions
        .iter()
        .flat_map(|session| {
            std::iter::once(session).chain(flatten(&session.sub_sessions))
        })
        .collect()
}
