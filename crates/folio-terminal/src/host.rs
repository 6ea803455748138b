//! Side-effect hooks the terminal calls on its surroundings.
//!
//! The terminal has no compile-time knowledge of windows or viewers. The
//! desktop implements `Host` and is handed to the terminal per event.

/// Panel holding the terminal itself.
pub const TERMINAL_PANEL: &str = "terminal";

/// Panel holding the file viewer.
pub const VIEWER_PANEL: &str = "viewer";

/// Desktop collaborator consumed by command handlers.
pub trait Host {
    /// Show `lines` in the viewer under `title`, opening it if needed.
    fn open_content(&mut self, title: &str, lines: &[String]);

    /// Close a panel. Closing an already-closed panel is a no-op.
    fn close_panel(&mut self, name: &str);
}

/// A host with no desktop attached. Every hook is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Host for NullHost {
    fn open_content(&mut self, title: &str, _lines: &[String]) {
        log::debug!("no viewer attached, dropping content for {title}");
    }

    fn close_panel(&mut self, name: &str) {
        log::debug!("no desktop attached, ignoring close of {name}");
    }
}
