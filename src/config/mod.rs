// src/config/mod.rs

//! Option resolution for a single run.
//!
//! Every option can come from three places, checked in this order:
//!
//! 1. an explicit argument (`RunOptions`),
//! 2. a `SHELLRUNNER_*` environment variable,
//! 3. a built-in default.
//!
//! Resolution is a pure function of the arguments and an [`Env`] snapshot,
//! so a caller that changes the environment between two runs sees the new
//! values on the second one.

pub mod env;
pub mod options;

pub use env::Env;
pub use options::{
    ENV_CHECK, ENV_SHELL, ENV_SHOW_COMMANDS, ENV_SHOW_OUTPUT, ExecutionOptions, RunOptions,
    resolve,
};
