//! CLI argument definitions and command builders
//!
//! Running `automux` without a subcommand triggers the config in the
//! current (or given) directory.

use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("automux")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Automux Contributors")
        .about("Automux - declarative tmux sessions per directory")
        .long_about(
            "Automux reads a .automux config from a directory and builds the tmux\n\
             session it describes: windows, splits, commands and related sessions.\n\n\
             Config files, highest priority first:\n  \
               .automux          KDL\n  \
               .automux.json     JSON\n  \
               .automux.yml      YAML\n  \
               .automux.yaml     YAML",
        )
        .disable_help_subcommand(true)
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .help("Directory or config file to load (default: current directory)"),
        )
        .arg(arg_debug())
        .arg(arg_detached())
        .subcommand(cmd_init())
        .subcommand(cmd_print_name())
}

pub fn cmd_init() -> Command {
    Command::new("init")
        .about("Write a starter config into the current directory")
        .long_about(
            "Writes a starter config unless one already exists.\n\
             Prompts for the session name when --name is not given.",
        )
        .arg(
            Arg::new("kdl")
                .long("kdl")
                .action(ArgAction::SetTrue)
                .help("Write .automux (default)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Write .automux.json"),
        )
        .arg(
            Arg::new("yaml")
                .long("yaml")
                .action(ArgAction::SetTrue)
                .help("Write .automux.yml"),
        )
        .group(ArgGroup::new("format").args(["kdl", "json", "yaml"]))
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .value_name("NAME")
                .help("Session name to write into the config"),
        )
}

pub fn cmd_print_name() -> Command {
    Command::new("print-name")
        .about("Print the session name if the target directory has an automux config")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .help("Directory or config file to load (default: current directory)"),
        )
        .arg(arg_detached())
}

fn arg_debug() -> Arg {
    Arg::new("debug")
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Print tmux commands rather than running them")
}

fn arg_detached() -> Arg {
    Arg::new("detached")
        .long("detached")
        .short('d')
        .action(ArgAction::SetTrue)
        .help(
            "Create sessions without attaching\n\
             This allows starting an automux session from inside another session",
        )
}
