// src/lib.rs

//! Run command lines through a real shell and get back their combined
//! output together with per-stage pipeline statuses.
//!
//! ```no_run
//! use shellrunner::{RunOptions, run};
//!
//! let result = run("echo hello | tr a-z A-Z", RunOptions::new().shell("bash"))?;
//! assert_eq!(result.out(), "HELLO");
//! assert_eq!(result.pipestatus(), &[0, 0]);
//! # Ok::<(), shellrunner::ShellRunnerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod result;
pub mod script;
pub mod shell;
pub mod status;

use anyhow::Context;
use tracing::debug;

pub use crate::config::{Env, ExecutionOptions, RunOptions};
pub use crate::console::{Console, NullConsole, StdoutConsole};
pub use crate::errors::{Result, ShellRunnerError};
pub use crate::exec::{Engine, ProcessInvoker, RawOutput, SystemInvoker};
pub use crate::result::{ExecutionFailure, ExecutionResult};
pub use crate::script::CommandSpec;
pub use crate::shell::{Dialect, Shell, ShellKind};

/// Run one command, or a sequence of commands in one shell instance.
///
/// Options not given in `options` are read from the `SHELLRUNNER_*`
/// environment variables at call time, then fall back to defaults (`check`,
/// `show_output` and `show_commands` all on).
///
/// With `check` on, a nonzero status is returned as
/// [`ShellRunnerError::Command`], carrying the same output and statuses a
/// successful run would have returned.
pub fn run(command: impl Into<CommandSpec>, options: RunOptions) -> Result<ExecutionResult> {
    let env = Env::capture();
    let resolved = config::resolve(&options, &env)?;
    run_with(
        &command.into(),
        &resolved,
        &env,
        &SystemInvoker,
        &mut StdoutConsole,
    )
}

/// Lower-level entry point with every collaborator supplied by the caller.
pub fn run_with(
    command: &CommandSpec,
    options: &ExecutionOptions,
    env: &Env,
    invoker: &dyn ProcessInvoker,
    console: &mut dyn Console,
) -> Result<ExecutionResult> {
    Engine::new(invoker, console).execute(command, options, env)
}

/// [`run`] for async callers: the blocking wait happens on Tokio's blocking
/// thread pool.
pub async fn run_async(
    command: impl Into<CommandSpec>,
    options: RunOptions,
) -> Result<ExecutionResult> {
    let command = command.into();
    debug!(command = %command.display(), "dispatching run to blocking pool");
    tokio::task::spawn_blocking(move || run(command, options))
        .await
        .context("shell run task panicked or was cancelled")?
}
