//! folio terminal entry point.
//!
//! A portfolio shell in the terminal: type `help` for commands, Tab to
//! complete, Right to accept the dimmed suggestion. PageUp/PageDown scroll
//! the output. Ctrl+C cancels the line and Ctrl+D quits. Esc closes the
//! file viewer.

mod desktop;
mod input;
mod render;

use std::io::{self, Stdout};
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};

use desktop::Desktop;
use folio_terminal::{CommandRegistry, Host, InputResult, Terminal, VIEWER_PANEL, register_all};
use folio_types::config::TerminalConfig;
use folio_types::input::{InputEvent, Key};
use folio_vfs::FileTable;

/// Longest wait for input before the scheduler is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Raw mode and the alternate screen for as long as it lives.
struct Screen {
    stdout: Stdout,
}

impl Screen {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Config path from the first CLI arg, then `FOLIO_CONFIG`, else defaults.
fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok());
    match path {
        Some(path) => TerminalConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}")),
        None => Ok(TerminalConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;

    let mut registry = CommandRegistry::new();
    register_all(&mut registry).context("failed to build command registry")?;
    let files = FileTable::portfolio().context("failed to build file table")?;
    log::info!(
        "Starting folio ({} commands, {} files)",
        registry.len(),
        files.len()
    );

    let mut terminal = Terminal::new(Rc::new(registry), files, config);
    let mut desktop = Desktop::new();
    let (width, height) = size()?;
    terminal.handle_input(&InputEvent::Resize { width, height }, &mut desktop);

    let mut scrollback = render::Scrollback::default();
    let mut screen = Screen::enter()?;
    'running: loop {
        scrollback.follow(terminal.log_mut());
        render::draw(
            &mut screen.stdout,
            &terminal,
            &desktop,
            terminal.viewport(),
            scrollback.back(),
        )?;

        let timeout = terminal
            .next_due()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(POLL_INTERVAL, |wait| wait.min(POLL_INTERVAL));

        if event::poll(timeout)? {
            let raw = event::read()?;
            if let Some(dir) = input::scroll_key(&raw) {
                let page = usize::from(terminal.viewport().1 / 2).max(1);
                scrollback.page(dir, page, terminal.log().len());
            } else if let Some(input) = input::map_event(&raw) {
                if input == InputEvent::KeyPress(Key::Escape) && desktop.viewer().is_some() {
                    desktop.close_panel(VIEWER_PANEL);
                } else if terminal.handle_input(&input, &mut desktop) == InputResult::Quit {
                    break 'running;
                }
            }
        }

        terminal.tick(Instant::now(), &mut desktop);
        if !desktop.is_terminal_open() {
            break 'running;
        }
    }
    drop(screen);

    log::info!("folio shut down cleanly");
    Ok(())
}
