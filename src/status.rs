// src/status.rs

//! Splitting captured output into what the user sees and the status line
//! the script appended.

use tracing::{trace, warn};

use crate::exec::RawOutput;
use crate::script::Marker;
use crate::shell::Dialect;

/// Display output and statuses recovered from one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatus {
    pub out: String,
    /// Pipefail-style overall status: the right-most nonzero stage, else 0.
    pub status: i32,
    pub pipestatus: Vec<i32>,
    /// False when the status line was missing or unreadable and the process
    /// exit code was used instead.
    pub marker_found: bool,
}

pub fn parse_status(raw: &RawOutput, marker: &Marker, dialect: Dialect) -> ParsedStatus {
    let needle = format!("{}:", marker.token());

    let Some(idx) = raw.text.rfind(&needle) else {
        warn!(
            exit_code = raw.exit_code,
            "status marker not found in output; falling back to process exit code"
        );
        return fallback(raw.text.trim_end().to_string(), raw.exit_code);
    };

    let before = &raw.text[..idx];
    let after = &raw.text[idx + needle.len()..];
    let (payload, rest) = after.split_once('\n').unwrap_or((after, ""));

    // The status line starts with its own newline; drop it. The marker line
    // is stripped whether or not its payload parses.
    let before = before.strip_suffix('\n').unwrap_or(before);
    let mut out = String::with_capacity(before.len() + rest.len());
    out.push_str(before);
    out.push_str(rest);
    out.truncate(out.trim_end().len());

    match parse_payload(payload, dialect) {
        Some(pipestatus) => {
            trace!(payload, ?pipestatus, "parsed status line");
            ParsedStatus {
                out,
                status: pipefail_status(&pipestatus),
                pipestatus,
                marker_found: true,
            }
        }
        None => {
            warn!(payload, "unreadable status line; falling back to process exit code");
            fallback(out, raw.exit_code)
        }
    }
}

fn fallback(out: String, exit_code: i32) -> ParsedStatus {
    ParsedStatus {
        out,
        status: exit_code,
        pipestatus: vec![exit_code],
        marker_found: false,
    }
}

/// Parse the text after the marker into one status per stage.
///
/// Returns `None` for an empty or non-numeric payload.
pub fn parse_payload(payload: &str, dialect: Dialect) -> Option<Vec<i32>> {
    let mut tokens = payload.split_whitespace();

    let statuses = match dialect {
        Dialect::Pipestatus => tokens
            .map(|t| t.parse::<i32>().ok())
            .collect::<Option<Vec<_>>>()?,
        Dialect::PosixMinimal => vec![tokens.next()?.parse::<i32>().ok()?],
    };

    if statuses.is_empty() {
        None
    } else {
        Some(statuses)
    }
}

/// Overall status of a pipeline under `pipefail` rules.
pub fn pipefail_status(pipestatus: &[i32]) -> i32 {
    pipestatus
        .iter()
        .rev()
        .copied()
        .find(|s| *s != 0)
        .unwrap_or(0)
}
