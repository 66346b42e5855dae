// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::RunOptions;
use crate::script::CommandSpec;

/// Command-line arguments for `shellrunner`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shellrunner",
    version,
    about = "Run shell commands and report the exit status of every pipeline stage.",
    long_about = None
)]
pub struct CliArgs {
    /// Command line(s) to run. Several are run in order in one shell, so
    /// `cd` and variable assignments carry over.
    #[arg(value_name = "COMMAND", required = true, num_args = 1..)]
    pub commands: Vec<String>,

    /// Shell name or path (e.g. `bash`, `/bin/zsh`).
    ///
    /// If omitted, `SHELLRUNNER_SHELL`, then the invoking shell is used.
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Don't fail when the command exits with a nonzero status.
    #[arg(long)]
    pub no_check: bool,

    /// Don't echo the command output.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Don't echo the command line before running it.
    #[arg(long)]
    pub no_echo: bool,

    /// Print the result as JSON (`out`, `status`, `pipestatus`) instead of
    /// echoing the output.
    #[arg(long)]
    pub json: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHELLRUNNER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    pub fn command_spec(&self) -> CommandSpec {
        match self.commands.as_slice() {
            [single] => CommandSpec::Single(single.clone()),
            many => CommandSpec::Sequence(many.to_vec()),
        }
    }

    /// Flags only override when given; otherwise env / defaults apply.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            shell: self.shell.clone(),
            check: self.no_check.then_some(false),
            show_output: (self.quiet || self.json).then_some(false),
            show_commands: (self.no_echo || self.json).then_some(false),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
