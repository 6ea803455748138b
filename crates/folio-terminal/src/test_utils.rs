//! Shared test utilities for folio-terminal tests.
//!
//! Provides small `Command` doubles, a [`RecordingHost`] that captures
//! side-effect calls, and [`TestEnv`] for building an `Environment`.

use folio_types::config::TerminalConfig;
use folio_types::error::{FolioError, Result};
use folio_vfs::FileTable;

use crate::host::Host;
use crate::interpreter::{Category, Command, Environment};
use crate::output::OutputLog;
use crate::registry::CommandRegistry;
use crate::scheduler::Scheduler;

/// Echoes its arguments back as a single line.
pub struct EchoCmd;

impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Echo arguments"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Ok(vec![args.join(" ")])
    }
}

/// Always fails.
pub struct FailCmd;

impl Command for FailCmd {
    fn name(&self) -> &str {
        "fail"
    }
    fn description(&self) -> &str {
        "Always fails"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Err(FolioError::Command("boom".to_string()))
    }
}

/// Returns a fixed set of lines.
pub struct StaticCmd {
    name: String,
    lines: Vec<String>,
    category: Category,
    files: bool,
}

impl StaticCmd {
    pub fn new(name: &str, lines: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            category: Category::Core,
            files: false,
        }
    }

    pub fn with_files(mut self) -> Self {
        self.files = true;
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl Command for StaticCmd {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        "static test command"
    }
    fn category(&self) -> Category {
        self.category
    }
    fn completes_files(&self) -> bool {
        self.files
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// A host that records every call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub opened: Vec<(String, Vec<String>)>,
    pub closed: Vec<String>,
}

impl Host for RecordingHost {
    fn open_content(&mut self, title: &str, lines: &[String]) {
        self.opened.push((title.to_string(), lines.to_vec()));
    }
    fn close_panel(&mut self, name: &str) {
        self.closed.push(name.to_string());
    }
}

/// Owned pieces of an `Environment`, minus the registry.
pub struct TestEnv {
    pub files: FileTable,
    pub log: OutputLog,
    pub host: RecordingHost,
    pub scheduler: Scheduler,
    pub config: TerminalConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            files: FileTable::portfolio().unwrap(),
            log: OutputLog::new(1000),
            host: RecordingHost::default(),
            scheduler: Scheduler::new(),
            config: TerminalConfig::default(),
        }
    }

    pub fn env<'a>(&'a mut self, registry: &'a CommandRegistry) -> Environment<'a> {
        Environment {
            registry,
            files: &self.files,
            log: &mut self.log,
            host: &mut self.host,
            scheduler: &mut self.scheduler,
            config: &self.config,
        }
    }
}

/// Registry holding `names` as static commands, in order.
pub fn registry_with(names: &[&str]) -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    for name in names {
        if let Err(e) = reg.register(Box::new(StaticCmd::new(name, &[]))) {
            panic!("test registry: {e}");
        }
    }
    reg
}
