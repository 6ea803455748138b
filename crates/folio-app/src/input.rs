//! crossterm events to terminal input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::{InputEvent, Key};

/// Scrollback paging requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
}

/// PageUp/PageDown presses. These page the view and never reach the terminal.
pub fn scroll_key(event: &Event) -> Option<Scroll> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
            KeyCode::PageUp => Some(Scroll::Up),
            KeyCode::PageDown => Some(Scroll::Down),
            _ => None,
        },
        _ => None,
    }
}

/// Map a crossterm event. Key releases and unhandled keys map to `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Interrupt),
            KeyCode::Char('d') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    let event = match key.code {
        KeyCode::Char(ch) => InputEvent::TextInput(ch),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Delete => InputEvent::Delete,
        KeyCode::Enter => InputEvent::KeyPress(Key::Enter),
        KeyCode::Tab => InputEvent::KeyPress(Key::Tab),
        KeyCode::Esc => InputEvent::KeyPress(Key::Escape),
        KeyCode::Up => InputEvent::KeyPress(Key::Up),
        KeyCode::Down => InputEvent::KeyPress(Key::Down),
        KeyCode::Left => InputEvent::KeyPress(Key::Left),
        KeyCode::Right => InputEvent::KeyPress(Key::Right),
        KeyCode::Home => InputEvent::KeyPress(Key::Home),
        KeyCode::End => InputEvent::KeyPress(Key::End),
        _ => return None,
    };
    Some(event)
}
