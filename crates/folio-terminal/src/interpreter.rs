//! Command trait, execution environment, and tokenizer.
//!
//! Tokenization is deliberately plain: the line is split on single spaces
//! with empty tokens dropped. There is no quoting or escaping, so an
//! argument can never contain a space.

use std::time::Duration;

use folio_types::config::TerminalConfig;
use folio_types::error::Result;
use folio_vfs::FileTable;

use crate::host::Host;
use crate::output::OutputLog;
use crate::registry::CommandRegistry;
use crate::scheduler::{Deferred, Scheduler};

/// Grouping used by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Background,
    Fun,
    System,
    /// Registered and runnable, but never listed.
    Hidden,
}

impl Category {
    /// Categories shown by `help`, in display order.
    pub const LISTED: [Category; 4] = [
        Category::Core,
        Category::Background,
        Category::Fun,
        Category::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Background => "background",
            Category::Fun => "fun",
            Category::System => "system",
            Category::Hidden => "hidden",
        }
    }
}

/// Everything a command may read or act on while it runs.
///
/// The dispatcher builds one of these per submitted line. Side effects
/// outside the terminal go through `host`; delayed effects go through
/// `scheduler` and fire later, never inside the dispatch that queued them.
pub struct Environment<'a> {
    /// The registry the line was resolved against.
    pub registry: &'a CommandRegistry,
    /// Virtual files for `ls`, `cat` and `open`.
    pub files: &'a FileTable,
    /// The output log; handlers normally return lines instead of writing here.
    pub log: &'a mut OutputLog,
    /// Desktop collaborator (viewer, panels).
    pub host: &'a mut dyn Host,
    /// Deferred one-shot actions.
    pub scheduler: &'a mut Scheduler,
    /// Active terminal configuration.
    pub config: &'a TerminalConfig,
}

impl Environment<'_> {
    /// Remove every line from the output log.
    pub fn clear_output(&mut self) {
        self.log.clear();
    }

    /// Show content in the external viewer.
    pub fn open_content(&mut self, title: &str, lines: &[String]) {
        self.host.open_content(title, lines);
    }

    /// Close a desktop panel immediately.
    pub fn close_panel(&mut self, name: &str) {
        self.host.close_panel(name);
    }

    /// Queue an action to run after `delay`.
    pub fn defer(&mut self, delay: Duration, action: Deferred) {
        self.scheduler.schedule_after(delay, action);
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types), lowercase.
    fn name(&self) -> &str;

    /// One-line description for `help`. Empty means "not described".
    fn description(&self) -> &str;

    /// Usage string (e.g. "cat <filename>").
    fn usage(&self) -> &str {
        self.name()
    }

    /// Command category for grouping in `help` output.
    fn category(&self) -> Category {
        Category::Core
    }

    /// Whether the first argument is a virtual file name (drives completion).
    fn completes_files(&self) -> bool {
        false
    }

    /// For aliases, the name of the command this one delegates to.
    fn alias_of(&self) -> Option<&str> {
        None
    }

    /// Execute the command and return the lines to print.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>>;
}

/// Split a line into tokens on single spaces, dropping empty tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').filter(|t| !t.is_empty()).collect()
}
