//! Print the master session id of a config

use std::path::PathBuf;

use anyhow::Result;
use automux_core::config::load_config;

use crate::cli::target_dir;

/// Options for the print-name command
#[derive(Debug, Clone, Default)]
pub struct PrintNameOptions {
    pub path: Option<PathBuf>,
}

/// Run the print-name command
pub fn run_with_options(options: &PrintNameOptions) -> Result<()> {
    let target = target_dir(options.path.clone())?;
    let session = load_config(&target)?;
    println!("{}", session.require_id()?);
    Ok(())
}
