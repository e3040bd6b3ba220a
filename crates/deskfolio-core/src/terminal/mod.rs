//! Fake shell hosted by terminal windows.
//!
//! A line typed into the prompt is split into a command name and arguments,
//! matched against a fixed table of builtins, and the result is appended to
//! the session history. Nothing runs outside the process.

mod builtins;
mod command;
mod session;

pub use command::{Builtin, CommandLine};
pub use session::{HistoryEntry, TerminalSession, HOME_DIR};
