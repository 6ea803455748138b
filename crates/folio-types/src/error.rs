//! Error types for the folio terminal.

use std::io;

/// Errors produced by the folio crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("command error: {0}")]
    Command(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("duplicate command: {0}")]
    DuplicateCommand(String),

    #[error("duplicate file: {0}")]
    DuplicateFile(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display() {
        let e = FolioError::Command("usage: cat <filename>".into());
        assert_eq!(format!("{e}"), "command error: usage: cat <filename>");
    }

    #[test]
    fn unknown_command_display() {
        let e = FolioError::UnknownCommand("zzz".into());
        assert_eq!(format!("{e}"), "unknown command: zzz");
    }

    #[test]
    fn duplicate_command_display() {
        let e = FolioError::DuplicateCommand("help".into());
        assert_eq!(format!("{e}"), "duplicate command: help");
    }

    #[test]
    fn duplicate_file_display() {
        let e = FolioError::DuplicateFile("about.txt".into());
        assert_eq!(format!("{e}"), "duplicate file: about.txt");
    }

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("prompt must not be empty".into());
        assert_eq!(format!("{e}"), "config error: prompt must not be empty");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("prompt = [[[").unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<()> = Err(FolioError::UnknownCommand("x".into()));
        assert!(r.is_err());
    }
}
