// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invoker`] provides the `ProcessInvoker` trait and the
//!   `SystemInvoker` that spawns a real shell with stdout and stderr merged
//!   into one pipe. Tests swap in a fake invoker that returns canned output.
//! - [`engine`] drives one run end to end: shell resolution, script
//!   assembly, invocation, status parsing and the pass/fail decision.

pub mod engine;
pub mod invoker;

pub use engine::Engine;
pub use invoker::{ProcessInvoker, RawOutput, SystemInvoker};
