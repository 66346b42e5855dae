// src/result.rs

//! The record a run produces, and the pass/fail decision.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::errors::Result;
use crate::status::ParsedStatus;

/// Outcome of a run: combined output plus exit statuses.
///
/// Fields are read through accessors or taken apart positionally:
///
/// ```
/// # use shellrunner::ExecutionResult;
/// let result = ExecutionResult::new("hello".into(), 0, vec![0]);
/// let (out, status, pipestatus) = result.into_parts();
/// assert_eq!((out.as_str(), status, pipestatus), ("hello", 0, vec![0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    out: String,
    status: i32,
    pipestatus: Vec<i32>,
}

impl ExecutionResult {
    /// `pipestatus` is never empty: an empty list is replaced by `[status]`.
    pub fn new(out: String, status: i32, pipestatus: Vec<i32>) -> Self {
        let pipestatus = if pipestatus.is_empty() {
            vec![status]
        } else {
            pipestatus
        };
        Self {
            out,
            status,
            pipestatus,
        }
    }

    /// Combined stdout and stderr, trailing whitespace removed.
    pub fn out(&self) -> &str {
        &self.out
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    /// One status per stage of the last command's pipeline.
    pub fn pipestatus(&self) -> &[i32] {
        &self.pipestatus
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    pub fn into_parts(self) -> (String, i32, Vec<i32>) {
        (self.out, self.status, self.pipestatus)
    }
}

impl From<ExecutionResult> for (String, i32, Vec<i32>) {
    fn from(result: ExecutionResult) -> Self {
        result.into_parts()
    }
}

impl From<ParsedStatus> for ExecutionResult {
    fn from(parsed: ParsedStatus) -> Self {
        ExecutionResult::new(parsed.out, parsed.status, parsed.pipestatus)
    }
}

/// A run whose status was nonzero while `check` was on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Command exited with non-zero status: {:?}", .result.pipestatus)]
pub struct ExecutionFailure {
    command: String,
    result: ExecutionResult,
}

impl ExecutionFailure {
    pub fn new(command: impl Into<String>, result: ExecutionResult) -> Self {
        Self {
            command: command.into(),
            result,
        }
    }

    /// The command text that was run, entries joined with `"; "`.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn out(&self) -> &str {
        self.result.out()
    }

    pub fn status(&self) -> i32 {
        self.result.status()
    }

    pub fn pipestatus(&self) -> &[i32] {
        self.result.pipestatus()
    }

    pub fn result(&self) -> &ExecutionResult {
        &self.result
    }

    pub fn into_result(self) -> ExecutionResult {
        self.result
    }
}

/// Turn parsed statuses into the final result, failing when `check` is on
/// and the status is nonzero.
pub fn finish(parsed: ParsedStatus, check: bool, command: &str) -> Result<ExecutionResult> {
    let result = ExecutionResult::from(parsed);

    if check && !result.success() {
        info!(
            command,
            status = result.status,
            pipestatus = ?result.pipestatus,
            "command failed"
        );
        return Err(ExecutionFailure::new(command, result).into());
    }

    debug!(
        command,
        status = result.status,
        pipestatus = ?result.pipestatus,
        "command finished"
    );
    Ok(result)
}
