// src/script/mod.rs

//! Turning what the caller asked for into one shell script.
//!
//! - [`marker`] generates the per-run sentinel that separates command output
//!   from the status line appended to the script.
//! - [`builder`] assembles the script body for a [`CommandSpec`].

pub mod builder;
pub mod marker;

pub use builder::build_script;
pub use marker::Marker;

use crate::errors::{Result, ShellRunnerError};

/// One command line, or several run in order in the same shell instance.
///
/// With a sequence, shell state (working directory, variables) carries over
/// from one entry to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    Single(String),
    Sequence(Vec<String>),
}

impl CommandSpec {
    /// The individual command lines, in order.
    pub fn commands(&self) -> &[String] {
        match self {
            CommandSpec::Single(cmd) => std::slice::from_ref(cmd),
            CommandSpec::Sequence(cmds) => cmds,
        }
    }

    /// Human-readable form used for the "Executing:" echo and in errors.
    pub fn display(&self) -> String {
        self.commands().join("; ")
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            CommandSpec::Sequence(cmds) if cmds.is_empty() => Err(ShellRunnerError::EmptyCommand),
            _ => Ok(()),
        }
    }
}

impl From<&str> for CommandSpec {
    fn from(cmd: &str) -> Self {
        CommandSpec::Single(cmd.to_string())
    }
}

impl From<String> for CommandSpec {
    fn from(cmd: String) -> Self {
        CommandSpec::Single(cmd)
    }
}

impl From<&String> for CommandSpec {
    fn from(cmd: &String) -> Self {
        CommandSpec::Single(cmd.clone())
    }
}

impl From<Vec<String>> for CommandSpec {
    fn from(cmds: Vec<String>) -> Self {
        CommandSpec::Sequence(cmds)
    }
}

impl From<Vec<&str>> for CommandSpec {
    fn from(cmds: Vec<&str>) -> Self {
        CommandSpec::Sequence(cmds.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for CommandSpec {
    fn from(cmds: &[&str]) -> Self {
        CommandSpec::Sequence(cmds.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandSpec {
    fn from(cmds: [&str; N]) -> Self {
        CommandSpec::Sequence(cmds.iter().map(|s| s.to_string()).collect())
    }
}
