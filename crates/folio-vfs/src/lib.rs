//! Virtual file table for the folio terminal.
//!
//! The "filesystem" is a flat, ordered list of file names, each mapped to
//! the content command that renders it. It backs `ls`, `cat`, `open` and
//! filename completion; nothing here touches a real disk.

mod table;

pub use table::{FileEntry, FileTable, PORTFOLIO_FILES};
