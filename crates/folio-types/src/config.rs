//! Terminal configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock portfolio terminal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Identity/path banner echoed in front of every submitted line.
pub const DEFAULT_PROMPT: &str = "visitor@portfolio:~$";

/// Literal token appended to the buffer on interrupt.
pub const DEFAULT_CANCEL_MARKER: &str = "^C";

/// Runtime configuration for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Banner printed before the echoed command line.
    pub prompt: String,
    /// Marker that flags a line as interrupted.
    pub cancel_marker: String,
    /// Delay before `exit` closes the terminal panel.
    pub exit_close_delay_ms: u64,
    /// Maximum number of history entries retained.
    pub max_history: usize,
    /// Maximum number of output lines retained.
    pub scrollback: usize,
    /// System lines printed when the terminal starts or resets.
    pub boot_lines: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            cancel_marker: DEFAULT_CANCEL_MARKER.to_string(),
            exit_close_delay_ms: 200,
            max_history: 100,
            scrollback: 1000,
            boot_lines: vec![
                "booting virtual shell...".to_string(),
                "loading developer profile... done.".to_string(),
                "type help to see available commands.".to_string(),
            ],
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(FolioError::Config("prompt must not be empty".to_string()));
        }
        if self.cancel_marker.trim().is_empty() {
            return Err(FolioError::Config(
                "cancel_marker must not be empty".to_string(),
            ));
        }
        if self.max_history == 0 {
            return Err(FolioError::Config(
                "max_history must be at least 1".to_string(),
            ));
        }
        if self.scrollback == 0 {
            return Err(FolioError::Config(
                "scrollback must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
