//! Ordered file-name table.

use folio_types::error::{FolioError, Result};

/// File names and content commands of the stock portfolio.
pub const PORTFOLIO_FILES: [(&str, &str); 8] = [
    ("about.txt", "about"),
    ("skills.txt", "skills"),
    ("projects.txt", "projects"),
    ("ugracing.txt", "ugracing"),
    ("experience.txt", "experience"),
    ("education.txt", "education"),
    ("achievements.txt", "achievements"),
    ("links.pdf", "links"),
];

/// A virtual file: its visible name and the command that renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub command: String,
}

/// Ordered mapping from virtual file name to content command.
///
/// Names are stored lowercase and are unique. Insertion order is the
/// listing order used by `ls` and by completion.
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    entries: Vec<FileEntry>,
}

impl FileTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock portfolio files.
    pub fn portfolio() -> Result<Self> {
        Self::from_pairs(PORTFOLIO_FILES)
    }

    /// Build a table from `(name, command)` pairs in listing order.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut table = Self::new();
        for (name, command) in pairs {
            table.insert(name, command)?;
        }
        Ok(table)
    }

    /// Add a file. Fails if the name (case-insensitively) already exists.
    pub fn insert(&mut self, name: &str, command: &str) -> Result<()> {
        let name = name.to_lowercase();
        if self.contains(&name) {
            return Err(FolioError::DuplicateFile(name));
        }
        log::debug!("vfs: {name} -> {command}");
        self.entries.push(FileEntry {
            name,
            command: command.to_lowercase(),
        });
        Ok(())
    }

    /// Look up the content command for a file name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.command.as_str())
    }

    /// Whether a file with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// All file names in listing order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Iterate entries in listing order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
