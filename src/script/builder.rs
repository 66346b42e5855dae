// src/script/builder.rs

use tracing::trace;

use crate::script::{CommandSpec, Marker};
use crate::shell::{Shell, ShellKind};

const STATUS_VAR: &str = "__shellrunner_ps";

/// Assemble the script that the shell will run.
///
/// Layout:
///
/// ```text
/// <command 1>
///
/// <guard>            # only with check = true, after every command but the last
/// <command 2>
/// ...
/// <command N>
///
/// <status line>      # marker + statuses of command N
/// ```
///
/// The blank line in front of each generated line ends a trailing `\`
/// continuation in the user's command, so the two never merge.
///
/// A guard prints the status line and exits the shell as soon as any stage of
/// the preceding command fails, so later commands never run.
pub fn build_script(spec: &CommandSpec, shell: &Shell, marker: &Marker, check: bool) -> String {
    let commands = spec.commands();
    let mut lines = Vec::with_capacity(commands.len() * 3 + 2);

    for (i, cmd) in commands.iter().enumerate() {
        lines.push(cmd.clone());
        let is_last = i + 1 == commands.len();
        if check && !is_last {
            lines.push(String::new());
            lines.push(guard_line(shell.kind, marker));
        }
    }

    lines.push(String::new());
    lines.push(status_line(shell.kind, marker));

    let script = lines.join("\n");
    trace!(%script, "built script");
    script
}

fn status_line(kind: ShellKind, marker: &Marker) -> String {
    format!(
        "{}; {}",
        kind.capture_statuses(STATUS_VAR),
        marker.print_command(&kind.status_args(STATUS_VAR))
    )
}

/// Stop the shell if any stage of the previous command failed.
///
/// A list of statuses contains a nonzero one exactly when its text contains a
/// digit from 1 to 9, whatever separator joins them.
fn guard_line(kind: ShellKind, marker: &Marker) -> String {
    let capture = kind.capture_statuses(STATUS_VAR);
    let joined = kind.joined_statuses(STATUS_VAR);
    let print = marker.print_command(&kind.status_args(STATUS_VAR));

    if kind.is_fish() {
        format!("{capture}; if string match -qr '[1-9]' -- {joined}; {print}; exit 1; end")
    } else {
        format!("{capture}; case {joined} in *[1-9]*) {print}; exit 1;; esac")
    }
}
