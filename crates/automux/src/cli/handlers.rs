//! CLI command handlers that bridge between `clap` and internal logic

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use automux_core::config::Format;
use clap::ArgMatches;

use crate::{
    cli::build_cli,
    commands::{init, print_name, trigger},
};

/// Format an error for user display (no stack traces)
pub fn format_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if let Some(source) = err.source() {
        let source_msg = source.to_string();
        if !msg.contains(&source_msg) && !source_msg.is_empty() {
            return format!("{msg}\nCause: {source_msg}");
        }
    }
    msg
}

pub async fn handle_trigger(matches: &ArgMatches) -> Result<()> {
    let options = trigger::TriggerOptions {
        path: matches.get_one::<PathBuf>("path").cloned(),
        debug: matches.get_flag("debug"),
        detached: matches.get_flag("detached"),
    };
    trigger::run_with_options(&options).await
}

pub async fn handle_init(sub_m: &ArgMatches) -> Result<()> {
    let format = if sub_m.get_flag("json") {
        Format::Json
    } else if sub_m.get_flag("yaml") {
        Format::Yaml
    } else {
        Format::Kdl
    };

    let options = init::InitOptions {
        format,
        name: sub_m.get_one::<String>("name").cloned(),
    };
    init::run_with_options(&options).await
}

pub fn handle_print_name(sub_m: &ArgMatches) -> Result<()> {
    let options = print_name::PrintNameOptions {
        path: sub_m.get_one::<PathBuf>("path").cloned(),
    };
    print_name::run_with_options(&options)
}

pub async fn run_cli() -> Result<()> {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) => {
            use clap::error::ErrorKind;
            let should_exit_zero =
                matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = e.print();
            #[allow(clippy::exit)]
            process::exit(if should_exit_zero { 0 } else { 2 });
        }
    };

    match matches.subcommand() {
        Some(("init", sub_m)) => handle_init(sub_m).await,
        Some(("print-name", sub_m)) => handle_print_name(sub_m),
        Some((other, _)) => Err(anyhow::anyhow!("Unknown command: {other}")),
        None => handle_trigger(&matches).await,
    }
}
