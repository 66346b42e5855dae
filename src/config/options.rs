// src/config/options.rs

use tracing::debug;

use crate::config::env::Env;
use crate::errors::Result;

pub const ENV_SHELL: &str = "SHELLRUNNER_SHELL";
pub const ENV_CHECK: &str = "SHELLRUNNER_CHECK";
pub const ENV_SHOW_OUTPUT: &str = "SHELLRUNNER_SHOW_OUTPUT";
pub const ENV_SHOW_COMMANDS: &str = "SHELLRUNNER_SHOW_COMMANDS";

/// Options as given by the caller.
///
/// `None` means "not specified": the environment variable or the default
/// decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Shell name or path, e.g. `"bash"` or `"/bin/zsh"`.
    pub shell: Option<String>,
    /// Fail with an error when the command exits with a nonzero status.
    pub check: Option<bool>,
    /// Echo the captured output once the command has finished.
    pub show_output: Option<bool>,
    /// Echo the command line before running it.
    pub show_commands: Option<bool>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn check(mut self, check: bool) -> Self {
        self.check = Some(check);
        self
    }

    pub fn show_output(mut self, show: bool) -> Self {
        self.show_output = Some(show);
        self
    }

    pub fn show_commands(mut self, show: bool) -> Self {
        self.show_commands = Some(show);
        self
    }

    /// Turn off both console echoes.
    pub fn quiet(self) -> Self {
        self.show_output(false).show_commands(false)
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Explicit shell override; `None` lets the resolver pick one.
    pub shell: Option<String>,
    pub check: bool,
    pub show_output: bool,
    pub show_commands: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            shell: None,
            check: true,
            show_output: true,
            show_commands: true,
        }
    }
}

/// Resolve caller options against an environment snapshot.
pub fn resolve(args: &RunOptions, env: &Env) -> Result<ExecutionOptions> {
    let defaults = ExecutionOptions::default();

    let shell = args
        .shell
        .clone()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| env.get_non_empty(ENV_SHELL).map(str::to_string));

    let resolved = ExecutionOptions {
        shell,
        check: pick(args.check, env.get_bool(ENV_CHECK)?, defaults.check),
        show_output: pick(
            args.show_output,
            env.get_bool(ENV_SHOW_OUTPUT)?,
            defaults.show_output,
        ),
        show_commands: pick(
            args.show_commands,
            env.get_bool(ENV_SHOW_COMMANDS)?,
            defaults.show_commands,
        ),
    };

    debug!(?resolved, "resolved execution options");
    Ok(resolved)
}

fn pick<T>(arg: Option<T>, env: Option<T>, default: T) -> T {
    arg.or(env).unwrap_or(default)
}
