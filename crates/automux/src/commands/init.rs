//! Write a starter config

use anyhow::{Context, Result};
use automux_core::{
    config::{find_config, Format},
    templates::{init_config, InitOutcome},
};

use crate::cli::{prompt_line, target_dir};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub format: Format,
    /// Session name; prompted for when absent
    pub name: Option<String>,
}

/// Run the init command in the working directory
pub async fn run_with_options(options: &InitOptions) -> Result<()> {
    let dir = target_dir(None)?;

    // don't prompt for a name that would be thrown away
    if let Some(existing) = find_config(&dir) {
        println!("automux config already exists: {}", existing.display());
        return Ok(());
    }

    let name = match &options.name {
        Some(name) => name.clone(),
        None => prompt_line("Enter the session name: ").await?,
    };

    match init_config(&dir, options.format, &name).context("Failed to create config")? {
        InitOutcome::Created(path) => println!("AutoMux config created: {}", path.display()),
        InitOutcome::AlreadyExists(path) => {
            println!("automux config already exists: {}", path.display());
        }
    }

    Ok(())
}
