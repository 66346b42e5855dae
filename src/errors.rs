// src/errors.rs

//! Crate-wide error type and `Result` alias.

use std::path::PathBuf;

use thiserror::Error;

use crate::result::ExecutionFailure;

#[derive(Error, Debug)]
pub enum ShellRunnerError {
    /// The shell binary could not be found or started.
    #[error("failed to spawn shell {}: {source}", .shell.display())]
    Spawn {
        shell: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script ran, but its status was nonzero while `check` was on.
    #[error("{0}")]
    Command(Box<ExecutionFailure>),

    #[error(
        "Received invalid value for environment variable {name}: \"{value}\"\nExpected \"True\" or \"False\" (case-insensitive)."
    )]
    EnvironmentVariable { name: String, value: String },

    #[error("no commands given: a command sequence must not be empty")]
    EmptyCommand,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShellRunnerError {
    /// The command failure carried by this error, if it is one.
    pub fn as_failure(&self) -> Option<&ExecutionFailure> {
        match self {
            ShellRunnerError::Command(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<ExecutionFailure> for ShellRunnerError {
    fn from(failure: ExecutionFailure) -> Self {
        ShellRunnerError::Command(Box::new(failure))
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ShellRunnerError>;
