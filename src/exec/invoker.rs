// src/exec/invoker.rs

//! Pluggable process invocation.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info, warn};

use crate::errors::{Result, ShellRunnerError};
use crate::shell::Shell;

/// Everything the shell wrote, plus how it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    /// Combined stdout and stderr, decoded as UTF-8 (lossily).
    pub text: String,
    /// Exit code of the shell process; `128 + signal` if it was killed.
    pub exit_code: i32,
}

/// Trait abstracting how a script is run.
///
/// Production code uses [`SystemInvoker`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ProcessInvoker: Send + Sync {
    /// Run `script` with `shell` and block until it exits.
    fn invoke(&self, shell: &Shell, script: &str) -> Result<RawOutput>;
}

/// Spawns the shell as `<shell> -c <script>`.
///
/// stdin is inherited so commands can still prompt. stdout and stderr share
/// one pipe, so their interleaving is whatever order the child wrote in.
/// There is no timeout: a command that never exits blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl ProcessInvoker for SystemInvoker {
    fn invoke(&self, shell: &Shell, script: &str) -> Result<RawOutput> {
        let (mut reader, writer) = std::io::pipe()?;
        let writer_err = writer.try_clone()?;

        // The Command keeps its copies of the write end alive; it has to be
        // dropped before reading or we'd never see EOF.
        let mut child = {
            let mut cmd = Command::new(&shell.program);
            cmd.arg("-c")
                .arg(script)
                .stdin(Stdio::inherit())
                .stdout(writer)
                .stderr(writer_err);

            cmd.spawn().map_err(|source| ShellRunnerError::Spawn {
                shell: shell.program.clone(),
                source,
            })?
        };

        debug!(
            shell = %shell.program.display(),
            pid = child.id(),
            "spawned shell process"
        );

        let mut bytes = Vec::new();
        if let Err(e) = reader.read_to_end(&mut bytes) {
            warn!(error = %e, "failed reading shell output; killing process");
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }
        drop(reader);

        let status = child.wait()?;
        let exit_code = exit_code(status);

        info!(
            shell = %shell.program.display(),
            exit_code,
            bytes = bytes.len(),
            "shell process exited"
        );

        Ok(RawOutput {
            text: String::from_utf8_lossy(&bytes).into_owned(),
            exit_code,
        })
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
