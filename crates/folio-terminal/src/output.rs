//! Output log: the ordered lines above the prompt.
//!
//! The prompt sentinel is not stored. It is always the last row yielded by
//! [`OutputLog::rows`], so every appended line lands directly above it.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("Invalid URL regex"));

/// Presentation category of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted line.
    Command,
    /// Handler output.
    Output,
    Error,
    /// Terminal messages (boot, hints, completion listings).
    System,
    Success,
}

/// A piece of a line for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// A URL the front end should make activatable.
    Link(&'a str),
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    text: String,
    kind: LineKind,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// The stored text, exactly as appended.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Split the text into plain and link segments. Concatenating the
    /// segments yields the original text.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::new();
        let mut last = 0;
        for m in URL_PATTERN.find_iter(&self.text) {
            if m.start() > last {
                out.push(Segment::Text(&self.text[last..m.start()]));
            }
            out.push(Segment::Link(m.as_str()));
            last = m.end();
        }
        if last < self.text.len() {
            out.push(Segment::Text(&self.text[last..]));
        }
        out
    }
}

/// A row of the terminal view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Line(&'a OutputLine),
    /// The active input line. Always last.
    Prompt,
}

/// Append-only log of output lines, with full clear.
#[derive(Debug)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    scrollback: usize,
    scroll_pending: bool,
}

impl OutputLog {
    /// Create an empty log retaining at most `scrollback` lines.
    pub fn new(scrollback: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            scrollback: scrollback.max(1),
            scroll_pending: false,
        }
    }

    /// Insert a line directly above the prompt and request a scroll to the
    /// bottom. The oldest line is dropped once scrollback is exceeded.
    pub fn append(&mut self, text: impl Into<String>, kind: LineKind) {
        self.lines.push_back(OutputLine::new(text, kind));
        while self.lines.len() > self.scrollback {
            self.lines.pop_front();
        }
        self.scroll_pending = true;
    }

    /// Remove every line. Clearing an empty log changes nothing.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        self.scroll_pending = true;
    }

    pub fn lines(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter()
    }

    /// Stored texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text()).collect()
    }

    /// Lines followed by the prompt sentinel.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.lines
            .iter()
            .map(Row::Line)
            .chain(std::iter::once(Row::Prompt))
    }

    /// Take the pending scroll-to-bottom request, if any.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
