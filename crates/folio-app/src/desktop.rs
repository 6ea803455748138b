use folio_terminal::{Host, TERMINAL_PANEL, VIEWER_PANEL};

/// Content shown in the viewer panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub title: String,
    pub lines: Vec<String>,
}

/// Panels around the terminal: the terminal itself and the file viewer.
#[derive(Debug)]
pub struct Desktop {
    terminal_open: bool,
    viewer: Option<Viewer>,
}

impl Desktop {
    pub fn new() -> Self {
        Self {
            terminal_open: true,
            viewer: None,
        }
    }

    pub fn is_terminal_open(&self) -> bool {
        self.terminal_open
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Desktop {
    fn open_content(&mut self, title: &str, lines: &[String]) {
        log::debug!("viewer: {title} ({} lines)", lines.len());
        self.viewer = Some(Viewer {
            title: title.to_string(),
            lines: lines.to_vec(),
        });
    }

    fn close_panel(&mut self, name: &str) {
        match name {
            TERMINAL_PANEL => self.terminal_open = false,
            VIEWER_PANEL => self.viewer = None,
            other => log::warn!("close of unknown panel: {other}"),
        }
    }
}
