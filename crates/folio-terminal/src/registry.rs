//! Command registry: name lookup, aliases, and prefix matching.

use std::collections::HashMap;
use std::rc::Rc;

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Category, Command, Environment};

/// Registry of available commands.
///
/// Names are stored lowercase; lookup lowercases the query. Registration
/// order is kept for `help` and for completion listings. Registering a name
/// twice is an error rather than an overwrite.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Rc<dyn Command>>,
    /// Lowercase names, parallel to `commands`.
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Fails if the name is already taken.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        self.insert(Rc::from(cmd))
    }

    /// Register `alias` as an explicit delegate of the already-registered
    /// `target`. The alias holds the target itself, not its name.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<()> {
        let target = self
            .lookup(target)
            .ok_or_else(|| FolioError::UnknownCommand(target.to_string()))?;
        self.insert(Rc::new(Alias {
            name: alias.to_lowercase(),
            target,
        }))
    }

    fn insert(&mut self, cmd: Rc<dyn Command>) -> Result<()> {
        let key = cmd.name().to_lowercase();
        if self.index.contains_key(&key) {
            return Err(FolioError::DuplicateCommand(key));
        }
        log::debug!("registered command: {key}");
        self.index.insert(key.clone(), self.commands.len());
        self.keys.push(key);
        self.commands.push(cmd);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| Rc::clone(&self.commands[i]))
    }

    /// Resolve a command by name (case-insensitive).
    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| self.commands[i].as_ref())
    }

    /// All registered names (lowercase) in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    /// Names (lowercase) starting with `prefix` in any case, registration
    /// order.
    pub fn matches(&self, prefix: &str) -> Vec<&str> {
        let lower = prefix.to_lowercase();
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|name| name.starts_with(&lower))
            .collect()
    }

    /// Iterate commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A second name for an existing command.
struct Alias {
    name: String,
    target: Rc<dyn Command>,
}

impl Command for Alias {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        ""
    }
    fn usage(&self) -> &str {
        self.target.usage()
    }
    fn category(&self) -> Category {
        self.target.category()
    }
    fn completes_files(&self) -> bool {
        self.target.completes_files()
    }
    fn alias_of(&self) -> Option<&str> {
        Some(self.target.name())
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        self.target.execute(args, env)
    }
}
