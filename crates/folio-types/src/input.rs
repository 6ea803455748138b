//! Platform-agnostic input event types.
//!
//! The front end maps its native key events to these enums. The terminal
//! core never sees raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed at the caret.
    TextInput(char),
    /// Delete the character left of the caret.
    Backspace,
    /// Delete the character under the caret.
    Delete,
    /// A navigation or control key was pressed.
    KeyPress(Key),
    /// User interrupt (Ctrl+C).
    Interrupt,
    /// The viewport changed size. Affects layout only.
    Resize { width: u16, height: u16 },
    /// User requested quit (Ctrl+D, window close).
    Quit,
}

/// Keys the line editor interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    Enter,
    Escape,
}
