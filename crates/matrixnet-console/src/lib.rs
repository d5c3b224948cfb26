//! # MatrixNet Console
//!
//! The operator console for MatrixNet: parses one command per input line,
//! dispatches it to the engine, and renders exactly one reply per command.
//!
//! Every engine failure is recovered at this boundary and rendered as a
//! generic per-command failure line; nothing aborts the run. The engine
//! crates below this layer never see raw text — they receive typed
//! arguments and return typed results.

pub mod command;
pub mod console;

// Re-export main types
pub use command::{Command, ParseError};
pub use console::Console;
