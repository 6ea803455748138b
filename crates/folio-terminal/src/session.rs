//! A complete terminal session.
//!
//! `Terminal` owns every piece of per-session state and is the only thing a
//! front end talks to: it feeds [`InputEvent`]s in, calls [`Terminal::tick`]
//! on a timer, and reads the log, buffer and ghost text back for drawing.

use std::rc::Rc;
use std::time::Instant;

use folio_types::config::TerminalConfig;
use folio_types::input::{InputEvent, Key};
use folio_vfs::FileTable;

use crate::completion::Completer;
use crate::dispatcher::{DispatchOutcome, Dispatcher};
use crate::host::{Host, TERMINAL_PANEL};
use crate::interpreter::Environment;
use crate::line_editor::LineEditor;
use crate::output::{LineKind, OutputLog};
use crate::registry::CommandRegistry;
use crate::scheduler::{Deferred, Scheduler};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Terminal state: editor, log, dispatcher and pending actions.
pub struct Terminal {
    registry: Rc<CommandRegistry>,
    files: FileTable,
    editor: LineEditor,
    log: OutputLog,
    scheduler: Scheduler,
    dispatcher: Dispatcher,
    config: TerminalConfig,
    viewport: (u16, u16),
}

impl Terminal {
    /// Start a session. The log starts with the boot lines.
    pub fn new(registry: Rc<CommandRegistry>, files: FileTable, config: TerminalConfig) -> Self {
        let mut term = Self {
            registry,
            files,
            editor: LineEditor::new(config.max_history),
            log: OutputLog::new(config.scrollback),
            scheduler: Scheduler::new(),
            dispatcher: Dispatcher::new(&config),
            config,
            viewport: (80, 24),
        };
        term.reset();
        term
    }

    /// Handle one input event.
    pub fn handle_input(&mut self, event: &InputEvent, host: &mut dyn Host) -> InputResult {
        match event {
            InputEvent::Quit => return InputResult::Quit,
            InputEvent::TextInput(ch) => {
                if !ch.is_control() {
                    self.editor.insert(*ch);
                }
            },
            InputEvent::Backspace => self.editor.backspace(),
            InputEvent::Delete => self.editor.delete(),
            InputEvent::Interrupt => {
                let line = self.editor.cancel(&self.config.cancel_marker);
                self.dispatch(&line, host);
            },
            InputEvent::Resize { width, height } => {
                self.viewport = (*width, *height);
            },
            InputEvent::KeyPress(key) => self.handle_key(*key, host),
        }
        InputResult::Continue
    }

    fn handle_key(&mut self, key: Key, host: &mut dyn Host) {
        match key {
            Key::Enter => {
                if let Some(line) = self.editor.submit() {
                    self.dispatch(&line, host);
                }
            },
            Key::Tab => {
                let completer = Completer::new(&self.registry, &self.files);
                if let Some(candidates) = self.editor.complete(&completer) {
                    self.log.append(candidates.join("   "), LineKind::System);
                }
            },
            Key::Right => {
                if self.editor.caret_at_end() {
                    let completer = Completer::new(&self.registry, &self.files);
                    self.editor.accept_suggestion(&completer);
                } else {
                    self.editor.move_right();
                }
            },
            Key::Left => self.editor.move_left(),
            Key::Home => self.editor.move_home(),
            Key::End => self.editor.move_end(),
            Key::Up => self.editor.history_prev(),
            Key::Down => self.editor.history_next(),
            Key::Escape => {},
        }
    }

    /// Run one line as if it had been submitted, without touching the
    /// editor or history.
    pub fn dispatch(&mut self, line: &str, host: &mut dyn Host) -> DispatchOutcome {
        let mut env = Environment {
            registry: self.registry.as_ref(),
            files: &self.files,
            log: &mut self.log,
            host,
            scheduler: &mut self.scheduler,
            config: &self.config,
        };
        self.dispatcher.execute(line, &mut env)
    }

    /// Fire every deferred action due at `now`. Returns how many fired.
    ///
    /// Closing the terminal panel resets the session first, so a reopened
    /// terminal starts from the boot lines.
    pub fn tick(&mut self, now: Instant, host: &mut dyn Host) -> usize {
        let due = self.scheduler.take_due(now);
        let fired = due.len();
        for action in due {
            match action {
                Deferred::ClosePanel(name) => {
                    log::debug!("closing panel: {name}");
                    if name == TERMINAL_PANEL {
                        self.reset();
                    }
                    host.close_panel(&name);
                },
            }
        }
        fired
    }

    /// Clear the log and input, then print the boot lines.
    pub fn reset(&mut self) {
        self.log.clear();
        self.editor.clear();
        for line in &self.config.boot_lines {
            self.log.append(line.as_str(), LineKind::System);
        }
    }

    /// Ghost text to draw after the caret.
    pub fn ghost_text(&self) -> String {
        let completer = Completer::new(&self.registry, &self.files);
        self.editor.suggestion(&completer)
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut OutputLog {
        &mut self.log
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// When the next deferred action is due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Last reported viewport size (columns, rows).
    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::dispatcher::REFUSAL;
    use crate::register_all;
    use crate::test_utils::RecordingHost;

    fn terminal() -> Terminal {
        let mut reg = CommandRegistry::new();
        register_all(&mut reg).unwrap();
        Terminal::new(
            Rc::new(reg),
            FileTable::portfolio().unwrap(),
            TerminalConfig::default(),
        )
    }

    fn type_str(term: &mut Terminal, host: &mut RecordingHost, s: &str) {
        for ch in s.chars() {
            term.handle_input(&InputEvent::TextInput(ch), host);
        }
    }

    fn press(term: &mut Terminal, host: &mut RecordingHost, key: Key) {
        term.handle_input(&InputEvent::KeyPress(key), host);
    }

    fn submit(term: &mut Terminal, host: &mut RecordingHost, s: &str) {
        type_str(term, host, s);
        press(term, host, Key::Enter);
    }

    fn last(term: &Terminal) -> String {
        term.log()
            .texts()
            .last()
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn starts_with_boot_lines() {
        let term = terminal();
        assert_eq!(term.log().texts(), TerminalConfig::default().boot_lines);
        assert!(term.log().lines().all(|l| l.kind() == LineKind::System));
    }

    #[test]
    fn enter_echoes_before_output() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        term.log_mut().clear();
        submit(&mut term, &mut host, "whoami");
        let texts = term.log().texts();
        assert_eq!(texts[0], "visitor@portfolio:~$ whoami");
        assert_eq!(texts[1], "whoami:");
        assert_eq!(term.editor().buffer(), "");
    }

    #[test]
    fn blank_enter_does_nothing() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        let before = term.log().len();
        submit(&mut term, &mut host, "   ");
        assert_eq!(term.log().len(), before);
        assert_eq!(term.editor().buffer(), "   ");
    }

    #[test]
    fn tab_completes_unique_command() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        type_str(&mut term, &mut host, "proj");
        press(&mut term, &mut host, Key::Tab);
        assert_eq!(term.editor().buffer(), "projects ");
    }

    #[test]
    fn tab_lists_ambiguous_matches() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        type_str(&mut term, &mut host, "a");
        let before = term.log().len();
        press(&mut term, &mut host, Key::Tab);
        assert_eq!(term.editor().buffer(), "a");
        assert_eq!(term.log().len(), before + 1);
        assert_eq!(last(&term), "about   achievements   ascii");
        assert_eq!(
            term.log().lines().last().map(|l| l.kind()),
            Some(LineKind::System)
        );
    }

    #[test]
    fn tab_completes_file_argument() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        type_str(&mut term, &mut host, "cat sk");
        press(&mut term, &mut host, Key::Tab);
        assert_eq!(term.editor().buffer(), "cat skills.txt");
    }

    #[test]
    fn ghost_text_follows_caret() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        type_str(&mut term, &mut host, "proj");
        assert_eq!(term.ghost_text(), "ects");
        press(&mut term, &mut host, Key::Left);
        assert_eq!(term.ghost_text(), "");
    }

    #[test]
    fn right_arrow_accepts_or_moves() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        type_str(&mut term, &mut host, "whoa");
        press(&mut term, &mut host, Key::Left);
        press(&mut term, &mut host, Key::Right);
        assert_eq!(term.editor().buffer(), "whoa");
        press(&mut term, &mut host, Key::Right);
        assert_eq!(term.editor().buffer(), "whoami ");
    }

    #[test]
    fn unknown_command_prints_hint() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        submit(&mut term, &mut host, "zzz");
        let texts = term.log().texts();
        let n = texts.len();
        assert_eq!(texts[n - 3], "visitor@portfolio:~$ zzz");
        assert_eq!(texts[n - 2], "command not found: 'zzz'");
        assert_eq!(texts[n - 1], "type 'help' to see available commands.");
    }

    #[test]
    fn destructive_line_is_refused() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        submit(&mut term, &mut host, "sudo rm -rf /");
        assert_eq!(last(&term), REFUSAL);
    }

    #[test]
    fn interrupt_echoes_marker_and_skips_history() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        type_str(&mut term, &mut host, "ab");
        term.handle_input(&InputEvent::Interrupt, &mut host);
        assert_eq!(last(&term), "visitor@portfolio:~$ ab^C");
        assert_eq!(term.editor().buffer(), "");
        assert!(term.editor().history().is_empty());
    }

    #[test]
    fn interrupt_on_empty_line_echoes_marker() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        term.handle_input(&InputEvent::Interrupt, &mut host);
        assert_eq!(last(&term), "visitor@portfolio:~$ ^C");
    }

    #[test]
    fn history_recall() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        submit(&mut term, &mut host, "bio");
        submit(&mut term, &mut host, "ls");
        press(&mut term, &mut host, Key::Up);
        assert_eq!(term.editor().buffer(), "ls");
        press(&mut term, &mut host, Key::Up);
        assert_eq!(term.editor().buffer(), "bio");
        press(&mut term, &mut host, Key::Down);
        press(&mut term, &mut host, Key::Down);
        assert_eq!(term.editor().buffer(), "");
    }

    #[test]
    fn clear_twice_is_same_as_once() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        submit(&mut term, &mut host, "clear");
        assert!(term.log().is_empty());
        submit(&mut term, &mut host, "clear");
        assert!(term.log().is_empty());
    }

    #[test]
    fn open_reaches_host() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        submit(&mut term, &mut host, "open about.txt");
        assert_eq!(host.opened.len(), 1);
        assert_eq!(host.opened[0].0, "about.txt");
        assert_eq!(host.opened[0].1[0], "about:");
    }

    #[test]
    fn exit_closes_terminal_after_delay() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        let start = Instant::now();
        submit(&mut term, &mut host, "exit");
        assert_eq!(last(&term), "");
        assert!(term.log().texts().contains(&"connection closed."));
        assert!(host.closed.is_empty());
        assert!(term.next_due().is_some());

        assert_eq!(term.tick(start, &mut host), 0);
        assert!(host.closed.is_empty());

        let fired = term.tick(start + Duration::from_secs(1), &mut host);
        assert_eq!(fired, 1);
        assert_eq!(host.closed, vec![TERMINAL_PANEL.to_string()]);
        assert_eq!(term.log().texts(), TerminalConfig::default().boot_lines);
        assert!(term.next_due().is_none());
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        term.handle_input(&InputEvent::TextInput('\u{7}'), &mut host);
        assert_eq!(term.editor().buffer(), "");
    }

    #[test]
    fn resize_only_updates_viewport() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        let before = term.log().len();
        term.handle_input(
            &InputEvent::Resize {
                width: 120,
                height: 40,
            },
            &mut host,
        );
        assert_eq!(term.viewport(), (120, 40));
        assert_eq!(term.log().len(), before);
    }

    #[test]
    fn quit_event() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        assert_eq!(
            term.handle_input(&InputEvent::Quit, &mut host),
            InputResult::Quit
        );
        assert_eq!(
            term.handle_input(&InputEvent::KeyPress(Key::Escape), &mut host),
            InputResult::Continue
        );
    }

    #[test]
    fn command_names_are_case_insensitive() {
        let mut term = terminal();
        let mut host = RecordingHost::default();
        submit(&mut term, &mut host, "WhoAmI");
        assert!(term.log().texts().contains(&"whoami:"));
    }
}
