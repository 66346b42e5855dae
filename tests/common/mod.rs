#![allow(dead_code, unused_imports)]

pub use shellrunner_test_utils::builders;
pub use shellrunner_test_utils::fake_invoker;
pub use shellrunner_test_utils::{init_tracing, shell_available};

use shellrunner::errors::Result;
use shellrunner::{CommandSpec, Env, ExecutionResult, NullConsole, SystemInvoker, run_with};

use builders::OptionsBuilder;

/// Shells exercised by the real-process tests, limited to those installed.
pub fn shells_under_test() -> Vec<&'static str> {
    ["bash", "zsh", "fish", "sh"]
        .into_iter()
        .filter(|s| shell_available(s))
        .collect()
}

/// True for shells that can report every pipeline stage.
pub fn has_pipestatus(shell: &str) -> bool {
    matches!(shell, "bash" | "zsh" | "fish")
}

/// Run `command` with a real `shell`, quietly, ignoring the caller's
/// `SHELLRUNNER_*` environment.
pub fn x(command: impl Into<CommandSpec>, shell: &str, check: bool) -> Result<ExecutionResult> {
    let options = OptionsBuilder::new().shell(shell).check(check).build();
    run_with(
        &command.into(),
        &options,
        &Env::default(),
        &SystemInvoker,
        &mut NullConsole,
    )
}
