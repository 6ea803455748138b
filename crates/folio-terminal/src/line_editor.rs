//! Line editor: input buffer, caret, history navigation and completion.
//!
//! The caret is a character index. Any change to the buffer's contents by
//! the user ends history navigation, so the next Up starts again from the
//! newest entry with a fresh draft.

use std::collections::VecDeque;

use crate::completion::{Completer, Completion};

/// Submitted lines plus the navigation cursor over them.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    /// Index into `entries` while navigating.
    cursor: Option<usize>,
    /// Buffer contents saved when navigation began.
    draft: String,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            cursor: None,
            draft: String::new(),
        }
    }

    /// Record a submitted line. Blank lines and repeats of the newest entry
    /// are skipped; the oldest entry is dropped past capacity.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if self.entries.back().is_some_and(|last| last == line) {
            return;
        }
        self.entries.push_back(line.to_string());
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Stop navigating and forget the draft.
    pub fn reset_navigation(&mut self) {
        self.cursor = None;
        self.draft.clear();
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Step to an older entry. `current` is the buffer, saved as the draft
    /// on the first step. Clamped at the oldest entry.
    pub fn prev(&mut self, current: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => {
                self.draft = current.to_string();
                self.entries.len() - 1
            },
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step to a newer entry. Past the newest, navigation ends and the
    /// draft is returned. `None` when not navigating.
    pub fn next(&mut self) -> Option<String> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some(std::mem::take(&mut self.draft));
        }
        self.cursor = Some(index);
        self.entries.get(index).cloned()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-line input state machine.
#[derive(Debug)]
pub struct LineEditor {
    buffer: String,
    caret: usize,
    history: History,
}

impl LineEditor {
    pub fn new(max_history: usize) -> Self {
        Self {
            buffer: String::new(),
            caret: 0,
            history: History::new(max_history),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Caret position as a character index.
    pub fn caret(&self) -> usize {
        self.caret
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn caret_at_end(&self) -> bool {
        self.caret == self.char_len()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Replace the whole buffer and put the caret at the end.
    fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.caret = self.char_len();
    }

    /// Empty the buffer and end navigation.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.caret = 0;
        self.history.reset_navigation();
    }

    // -- Editing --

    /// Insert a character at the caret.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_pos(self.caret);
        self.buffer.insert(at, ch);
        self.caret += 1;
        self.history.reset_navigation();
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        let at = self.byte_pos(self.caret);
        self.buffer.remove(at);
        self.history.reset_navigation();
    }

    /// Delete the character under the caret.
    pub fn delete(&mut self) {
        if self.caret_at_end() {
            return;
        }
        let at = self.byte_pos(self.caret);
        self.buffer.remove(at);
        self.history.reset_navigation();
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if !self.caret_at_end() {
            self.caret += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.char_len();
    }

    // -- Control actions --

    /// Finish the line. Returns the raw buffer for dispatch, or `None` when
    /// the buffer is blank (which is left untouched).
    pub fn submit(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        self.history.push(&self.buffer);
        self.history.reset_navigation();
        let line = std::mem::take(&mut self.buffer);
        self.caret = 0;
        Some(line)
    }

    /// Abandon the line: append `marker` and return it for dispatch as an
    /// interrupted line. Interrupted lines are not kept in history.
    pub fn cancel(&mut self, marker: &str) -> String {
        let mut line = std::mem::take(&mut self.buffer);
        line.push_str(marker);
        self.caret = 0;
        self.history.reset_navigation();
        line
    }

    /// Up arrow.
    pub fn history_prev(&mut self) {
        if let Some(entry) = self.history.prev(&self.buffer) {
            let entry = entry.to_string();
            self.set_buffer(entry);
        }
    }

    /// Down arrow.
    pub fn history_next(&mut self) {
        if let Some(text) = self.history.next() {
            self.set_buffer(text);
        }
    }

    /// Current ghost text. Only shown with the caret at the end.
    pub fn suggestion(&self, completer: &Completer<'_>) -> String {
        if !self.caret_at_end() {
            return String::new();
        }
        completer.suggest(&self.buffer)
    }

    /// Tab. Applies a unique completion; returns the candidates when the
    /// prefix is ambiguous so the caller can list them.
    pub fn complete(&mut self, completer: &Completer<'_>) -> Option<Vec<String>> {
        if !self.caret_at_end() {
            return None;
        }
        match completer.complete(&self.buffer) {
            Completion::Replace(text) => {
                self.set_buffer(text);
                self.history.reset_navigation();
                None
            },
            Completion::Ambiguous(candidates) => Some(candidates),
            Completion::NoMatch => None,
        }
    }

    /// Right arrow at the end of the line: accept a unique completion only.
    /// Returns whether anything was accepted.
    pub fn accept_suggestion(&mut self, completer: &Completer<'_>) -> bool {
        if !self.caret_at_end() {
            return false;
        }
        match completer.complete(&self.buffer) {
            Completion::Replace(text) => {
                self.set_buffer(text);
                self.history.reset_navigation();
                true
            },
            Completion::Ambiguous(_) | Completion::NoMatch => false,
        }
    }
}
