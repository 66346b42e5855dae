// src/shell/resolver.rs

//! Decide which shell binary runs the script.
//!
//! Order of preference:
//! 1. an explicit shell (argument or `SHELLRUNNER_SHELL`),
//! 2. the shell that launched this process (parent process executable),
//! 3. the `SHELL` environment variable,
//! 4. [`DEFAULT_SHELL`].
//!
//! Resolution never fails: a shell that doesn't exist is reported by the
//! invoker when it tries to spawn it.

use std::path::{Path, PathBuf};

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::{debug, trace};

use crate::config::Env;
use crate::shell::Shell;
use crate::shell::dialect::is_known_shell;

pub const DEFAULT_SHELL: &str = "/bin/sh";

pub fn resolve_shell(explicit: Option<&str>, env: &Env) -> Shell {
    if let Some(name) = explicit {
        let shell = Shell::new(lookup(name));
        debug!(shell = %shell.program.display(), kind = ?shell.kind, "using explicit shell");
        return shell;
    }

    if let Some(path) = parent_shell() {
        let shell = Shell::new(path);
        debug!(shell = %shell.program.display(), kind = ?shell.kind, "using parent process shell");
        return shell;
    }

    if let Some(path) = env.get_non_empty("SHELL") {
        let shell = Shell::new(path);
        debug!(shell = %shell.program.display(), kind = ?shell.kind, "using $SHELL");
        return shell;
    }

    debug!(shell = DEFAULT_SHELL, "falling back to default shell");
    Shell::new(DEFAULT_SHELL)
}

/// Turn a bare shell name into an absolute path via `PATH`.
///
/// Paths are kept as given. A name that can't be found is also kept as
/// given, so the spawn error names what the caller asked for.
fn lookup(name: &str) -> PathBuf {
    if name.contains(std::path::MAIN_SEPARATOR) {
        return PathBuf::from(name);
    }
    match which::which(name) {
        Ok(path) => path,
        Err(e) => {
            trace!(shell = name, error = %e, "shell not found on PATH; using name verbatim");
            PathBuf::from(name)
        }
    }
}

/// Executable of the parent process, if it is a recognised shell.
pub fn parent_shell() -> Option<PathBuf> {
    let mut system = System::new();
    let pid = Pid::from_u32(std::process::id());
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        false,
        ProcessRefreshKind::everything(),
    );
    let parent = system.process(pid)?.parent()?;

    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[parent]),
        false,
        ProcessRefreshKind::everything(),
    );
    let exe: &Path = system.process(parent)?.exe()?;

    if is_known_shell(exe) {
        Some(exe.to_path_buf())
    } else {
        trace!(parent = %exe.display(), "parent process is not a known shell");
        None
    }
}
