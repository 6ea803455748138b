//! Foundation types for the folio terminal.
//!
//! This crate holds the platform-agnostic pieces shared by every folio
//! crate: the error type, input events, and terminal configuration.

pub mod config;
pub mod error;
pub mod input;
