#![allow(dead_code)]

use shellrunner::ExecutionOptions;

/// Builder for resolved `ExecutionOptions`, quiet by default so tests don't
/// spam stdout.
pub struct OptionsBuilder {
    options: ExecutionOptions,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: ExecutionOptions {
                shell: None,
                check: true,
                show_output: false,
                show_commands: false,
            },
        }
    }

    pub fn shell(mut self, shell: &str) -> Self {
        self.options.shell = Some(shell.to_string());
        self
    }

    pub fn check(mut self, val: bool) -> Self {
        self.options.check = val;
        self
    }

    pub fn show_output(mut self, val: bool) -> Self {
        self.options.show_output = val;
        self
    }

    pub fn show_commands(mut self, val: bool) -> Self {
        self.options.show_commands = val;
        self
    }

    pub fn build(self) -> ExecutionOptions {
        self.options
    }
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
