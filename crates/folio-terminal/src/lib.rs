//! Command interpreter and line editor for the folio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `LineEditor` owns the input
//! buffer, history and completion; submitted lines go to the `Dispatcher`,
//! which resolves the command, runs it, and writes to the `OutputLog`.

mod commands;
mod completion;
mod dispatcher;
mod host;
mod interpreter;
mod line_editor;
mod output;
pub mod profile_commands;
mod registry;
mod scheduler;
mod session;

#[cfg(test)]
pub(crate) mod test_utils;

/// Register the system commands (help, ls, cat, open, clear, exit, ...) into a registry.
pub use commands::register_builtins;
/// Result of completing the current buffer.
pub use completion::{Completer, Completion};
/// Line dispatch and its outcome.
pub use dispatcher::{DESTRUCTIVE_LINE, DispatchOutcome, Dispatcher, REFUSAL};
/// Side-effect hooks implemented by the desktop collaborator.
pub use host::{Host, NullHost, TERMINAL_PANEL, VIEWER_PANEL};
/// A single executable command and the environment it runs in.
pub use interpreter::{Category, Command, Environment, tokenize};
/// Input buffer, caret and history state machine.
pub use line_editor::{History, LineEditor};
/// Append-only output log with the prompt sentinel.
pub use output::{LineKind, OutputLine, OutputLog, Row, Segment};
/// Register the portfolio content commands into a registry.
pub use profile_commands::register_profile_commands;
/// Registry of available commands.
pub use registry::CommandRegistry;
/// One-shot deferred actions.
pub use scheduler::{Deferred, Scheduler};
/// A complete terminal session.
pub use session::{InputResult, Terminal};

/// Build a registry with every stock command: portfolio content first, then
/// the system commands, so `help` lists them in that order.
pub fn register_all(reg: &mut CommandRegistry) -> folio_types::error::Result<()> {
    register_profile_commands(reg)?;
    register_builtins(reg)?;
    Ok(())
}
