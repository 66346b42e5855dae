// src/console.rs

//! Console echoes around a run.
//!
//! The engine reports through a [`Console`] so library users and tests can
//! capture or silence what would otherwise go to stdout.

use std::io::Write;

/// Receives the pre-run command echo and the post-run output echo.
pub trait Console {
    /// Called before the shell is started (only when `show_commands` is on).
    fn command(&mut self, text: &str);

    /// Called once the run finished (only when `show_output` is on), before
    /// the result is returned or the failure raised.
    fn output(&mut self, out: &str);
}

/// Prints to the process's stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn command(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "Executing: {text}");
        let _ = stdout.flush();
    }

    fn output(&mut self, out: &str) {
        if out.is_empty() {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{out}");
        let _ = stdout.flush();
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConsole;

impl Console for NullConsole {
    fn command(&mut self, _text: &str) {}

    fn output(&mut self, _out: &str) {}
}
