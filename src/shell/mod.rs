// src/shell/mod.rs

//! Shell selection and classification.
//!
//! - [`dialect`] maps shell basenames to a [`ShellKind`] and a [`Dialect`].
//! - [`resolver`] decides which shell binary a run will use.

pub mod dialect;
pub mod resolver;

use std::path::PathBuf;

pub use dialect::{Dialect, ShellKind};
pub use resolver::{DEFAULT_SHELL, parent_shell, resolve_shell};

/// A shell binary plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: PathBuf,
    pub kind: ShellKind,
}

impl Shell {
    /// Build a shell from a name or path, classifying it by basename.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let kind = ShellKind::from_path(&program);
        Self { program, kind }
    }

    pub fn dialect(&self) -> Dialect {
        self.kind.dialect()
    }
}
