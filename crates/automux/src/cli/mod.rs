//! CLI utilities and helpers

pub mod args;
pub mod handlers;
pub mod setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
pub use args::build_cli;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Directory the command runs against: the given path or the working directory.
pub fn target_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to read current directory"),
    }
}

/// Print `prompt` and read one line from stdin.
pub async fn prompt_line(prompt: &str) -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(prompt.as_bytes())
        .await
        .context("Failed to write prompt")?;
    stdout.flush().await.context("Failed to write prompt")?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read from stdin")?;
    Ok(line)
}
