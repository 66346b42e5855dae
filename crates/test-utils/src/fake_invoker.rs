use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use shellrunner::errors::Result;
use shellrunner::{Console, ProcessInvoker, RawOutput, Shell};

/// What the fake shell "prints" for one invocation.
#[derive(Debug, Clone)]
pub struct FakeResponse {
    /// Text written by the commands.
    pub output: String,
    /// Status payload after the marker, e.g. `"1 0"`. `None` simulates a
    /// shell that died before reaching the status line.
    pub statuses: Option<String>,
    pub exit_code: i32,
}

impl FakeResponse {
    pub fn ok(output: &str, statuses: &str) -> Self {
        Self {
            output: output.to_string(),
            statuses: Some(statuses.to_string()),
            exit_code: 0,
        }
    }

    pub fn without_marker(output: &str, exit_code: i32) -> Self {
        Self {
            output: output.to_string(),
            statuses: None,
            exit_code,
        }
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }
}

/// A fake invoker that:
/// - records every (shell, script) pair it was asked to run
/// - replies with queued responses, rebuilding the status line from the
///   marker found in the script.
#[derive(Clone, Default)]
pub struct FakeInvoker {
    responses: Arc<Mutex<VecDeque<FakeResponse>>>,
    calls: Arc<Mutex<Vec<(Shell, String)>>>,
}

impl FakeInvoker {
    pub fn new(responses: impl IntoIterator<Item = FakeResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(Shell, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_script(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, s)| s.clone())
    }
}

impl ProcessInvoker for FakeInvoker {
    fn invoke(&self, shell: &Shell, script: &str) -> Result<RawOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((shell.clone(), script.to_string()));

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("FakeInvoker: no response queued"))?;

        let mut text = response.output.clone();
        if let Some(statuses) = &response.statuses {
            let token = marker_from_script(script)
                .ok_or_else(|| anyhow!("FakeInvoker: no status line in script"))?;
            text.push_str(&format!("\n{token}:{statuses}\n"));
        }

        Ok(RawOutput {
            text,
            exit_code: response.exit_code,
        })
    }
}

/// Recover the sentinel from the final status line, which contains
/// `printf '\n%s%s:' 'HEAD' 'TAIL'`.
pub fn marker_from_script(script: &str) -> Option<String> {
    const PRINT: &str = r"printf '\n%s%s:' '";
    let last = script.lines().last()?;
    let start = last.find(PRINT)? + PRINT.len();
    let (head, rest) = last[start..].split_once("' '")?;
    let (tail, _) = rest.split_once('\'')?;
    Some(format!("{head}{tail}"))
}

/// Console that records what it was asked to print.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    pub commands: Vec<String>,
    pub outputs: Vec<String>,
}

impl Console for MemoryConsole {
    fn command(&mut self, text: &str) {
        self.commands.push(text.to_string());
    }

    fn output(&mut self, out: &str) {
        self.outputs.push(out.to_string());
    }
}
