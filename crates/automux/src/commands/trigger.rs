//! Default command: build the sessions described by a config

use std::path::PathBuf;

use anyhow::Result;
use automux_core::{
    config::{load_config, Session},
    tmux::{DryRun, Multiplexer, TmuxCli},
    Orchestrator, Outcome, RunOptions,
};

use crate::cli::target_dir;

/// Options for the trigger command
#[derive(Debug, Clone, Default)]
pub struct TriggerOptions {
    /// Explicit directory or file; `None` means the working directory
    pub path: Option<PathBuf>,
    pub debug: bool,
    pub detached: bool,
}

/// Run the trigger command
pub async fn run_with_options(options: &TriggerOptions) -> Result<()> {
    let run = RunOptions::from_env(options.debug, options.detached)?;

    // checked before loading so shell hooks inside tmux stay silent
    if run.should_skip() {
        tracing::debug!("TMUX is set and not detached, nothing to do");
        return Ok(());
    }

    let target = target_dir(options.path.clone())?;
    let session = match load_config(&target) {
        Ok(session) => session,
        Err(e) if e.is_not_found() && options.path.is_none() => {
            tracing::debug!(dir = %target.display(), "no automux config");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let outcome = if run.debug {
        let mux = DryRun::new()
            .with_existing(running_sessions(&run).await)
            .with_echo(true);
        execute(&mux, &run, &session).await?
    } else {
        let mux = TmuxCli::locate(&run.tmux_bin)?;
        execute(&mux, &run, &session).await?
    };

    tracing::info!(
        created = outcome.created(),
        attached = ?outcome.attached,
        "automux finished"
    );
    Ok(())
}

async fn execute<M: Multiplexer>(mux: &M, run: &RunOptions, session: &Session) -> Result<Outcome> {
    Ok(Orchestrator::new(mux, run).run(session).await?)
}

/// Best effort list of running sessions so `--debug` output reflects what a
/// real run would skip. No tmux (or no server) means none.
async fn running_sessions(run: &RunOptions) -> Vec<String> {
    match TmuxCli::locate(&run.tmux_bin) {
        Ok(cli) => cli.list_sessions().await.unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "debug run without tmux");
            Vec::new()
        }
    }
}
