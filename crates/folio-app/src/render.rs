//! Screen drawing.
//!
//! The whole screen is redrawn each frame: the viewer (when open) takes the
//! top half, the terminal shows the tail of its rows below it, ending with
//! the prompt line. PageUp/PageDown move the tail back through the
//! scrollback until new output arrives.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use folio_terminal::{LineKind, OutputLine, OutputLog, Row, Segment, Terminal};

use crate::desktop::{Desktop, Viewer};
use crate::input::Scroll;

/// Foreground colour for a line kind.
pub fn kind_color(kind: LineKind) -> Color {
    match kind {
        LineKind::Command => Color::Cyan,
        LineKind::Output => Color::Reset,
        LineKind::Error => Color::Red,
        LineKind::System => Color::DarkGrey,
        LineKind::Success => Color::Green,
    }
}

/// Rows given to the viewer out of `rows` screen rows.
pub fn viewer_height(rows: u16, viewer_open: bool) -> u16 {
    if viewer_open && rows >= 6 { rows / 2 } else { 0 }
}

/// Index of the first of `total` rows shown in `available` rows, `back`
/// rows up from the newest.
pub fn tail_start(total: usize, available: usize, back: usize) -> usize {
    total.saturating_sub(available).saturating_sub(back)
}

/// How far the terminal view is scrolled back from the newest row.
#[derive(Debug, Default)]
pub struct Scrollback {
    back: usize,
}

impl Scrollback {
    pub fn back(&self) -> usize {
        self.back
    }

    /// Snap to the newest row if the log asked for it.
    pub fn follow(&mut self, log: &mut OutputLog) {
        if log.take_scroll_request() {
            self.back = 0;
        }
    }

    /// Move by `page` rows, never past the oldest of `lines` lines.
    pub fn page(&mut self, dir: Scroll, page: usize, lines: usize) {
        self.back = match dir {
            Scroll::Up => (self.back + page).min(lines),
            Scroll::Down => self.back.saturating_sub(page),
        };
    }
}

/// At most `width` characters of `text`.
fn clip(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// Draw one frame.
pub fn draw(
    out: &mut impl Write,
    term: &Terminal,
    desktop: &Desktop,
    (cols, rows): (u16, u16),
    back: usize,
) -> io::Result<()> {
    let width = usize::from(cols);
    queue!(out, Clear(ClearType::All))?;

    let top = match desktop.viewer() {
        Some(viewer) => draw_viewer(out, viewer, width, viewer_height(rows, true))?,
        None => 0,
    };

    let available = usize::from(rows.saturating_sub(top));
    let all: Vec<Row<'_>> = term.log().rows().collect();
    let start = tail_start(all.len(), available, back);

    let mut caret = (0, top);
    for (y, row) in (top..).zip(&all[start..]) {
        queue!(out, MoveTo(0, y))?;
        match row {
            Row::Line(line) => draw_line(out, line, width)?,
            Row::Prompt => caret = (draw_prompt(out, term, width)?, y),
        }
    }

    queue!(out, MoveTo(caret.0, caret.1))?;
    out.flush()
}

/// Returns the number of rows used.
fn draw_viewer(out: &mut impl Write, viewer: &Viewer, width: usize, height: u16) -> io::Result<u16> {
    if height < 3 {
        return Ok(0);
    }
    let title = format!(" {} (esc to close) ", viewer.title);
    queue!(
        out,
        MoveTo(0, 0),
        SetAttribute(Attribute::Reverse),
        Print(format!("{:<width$}", clip(&title, width))),
        SetAttribute(Attribute::Reset),
    )?;

    let body = usize::from(height - 2);
    for (y, line) in (1..).zip(viewer.lines.iter().take(body)) {
        queue!(out, MoveTo(0, y), Print(clip(line, width)))?;
    }

    queue!(
        out,
        MoveTo(0, height - 1),
        SetForegroundColor(Color::DarkGrey),
        Print("─".repeat(width)),
        ResetColor,
    )?;
    Ok(height)
}

fn draw_line(out: &mut impl Write, line: &OutputLine, width: usize) -> io::Result<()> {
    queue!(out, SetForegroundColor(kind_color(line.kind())))?;
    let mut left = width;
    for segment in line.segments() {
        if left == 0 {
            break;
        }
        let (text, link) = match segment {
            Segment::Text(t) => (t, false),
            Segment::Link(t) => (t, true),
        };
        let shown = clip(text, left);
        left -= shown.chars().count();
        if link {
            queue!(
                out,
                SetAttribute(Attribute::Underlined),
                Print(shown),
                SetAttribute(Attribute::NoUnderline),
            )?;
        } else {
            queue!(out, Print(shown))?;
        }
    }
    queue!(out, ResetColor)
}

/// Draw the prompt, buffer and ghost text. Returns the caret column.
fn draw_prompt(out: &mut impl Write, term: &Terminal, width: usize) -> io::Result<u16> {
    let prompt = format!("{} ", term.prompt());
    let buffer = term.editor().buffer();
    let ghost = term.ghost_text();

    let shown_prompt = clip(&prompt, width);
    let mut left = width - shown_prompt.chars().count();
    let shown_buffer = clip(buffer, left);
    left -= shown_buffer.chars().count();

    queue!(
        out,
        SetForegroundColor(Color::Green),
        Print(shown_prompt),
        ResetColor,
        Print(shown_buffer),
        SetForegroundColor(Color::DarkGrey),
        Print(clip(&ghost, left)),
        ResetColor,
    )?;

    let column = prompt.chars().count() + term.editor().caret();
    let last = width.saturating_sub(1);
    Ok(u16::try_from(column.min(last)).unwrap_or(u16::MAX))
}
