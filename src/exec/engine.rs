// src/exec/engine.rs

//! One run, end to end.
//!
//! resolve shell -> build script -> echo command -> invoke -> parse status ->
//! echo output -> pass/fail.
//!
//! The engine holds no state between runs; every call resolves its shell and
//! picks a fresh marker.

use tracing::{debug, info};

use crate::config::{Env, ExecutionOptions};
use crate::console::Console;
use crate::errors::Result;
use crate::exec::invoker::ProcessInvoker;
use crate::result::{ExecutionResult, finish};
use crate::script::{CommandSpec, Marker, build_script};
use crate::shell::resolve_shell;
use crate::status::parse_status;

pub struct Engine<'a> {
    invoker: &'a dyn ProcessInvoker,
    console: &'a mut dyn Console,
    marker: Option<Marker>,
}

impl<'a> Engine<'a> {
    pub fn new(invoker: &'a dyn ProcessInvoker, console: &'a mut dyn Console) -> Self {
        Self {
            invoker,
            console,
            marker: None,
        }
    }

    /// Use a fixed marker instead of a random one per run.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn execute(
        &mut self,
        spec: &CommandSpec,
        options: &ExecutionOptions,
        env: &Env,
    ) -> Result<ExecutionResult> {
        spec.validate()?;

        let shell = resolve_shell(options.shell.as_deref(), env);
        let marker = self.marker.clone().unwrap_or_else(Marker::random);
        let script = build_script(spec, &shell, &marker, options.check);
        let command_text = spec.display();

        if options.show_commands {
            self.console.command(&command_text);
        }

        info!(
            command = %command_text,
            shell = %shell.program.display(),
            dialect = ?shell.dialect(),
            check = options.check,
            "executing"
        );

        let raw = self.invoker.invoke(&shell, &script)?;
        let parsed = parse_status(&raw, &marker, shell.dialect());
        debug!(
            marker_found = parsed.marker_found,
            status = parsed.status,
            "parsed shell output"
        );

        if options.show_output {
            self.console.output(&parsed.out);
        }

        finish(parsed, options.check, &command_text)
    }
}
