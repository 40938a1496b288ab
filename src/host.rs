//! Editor-facing capabilities and an in-memory document that provides them.
//!
//! The reflow core knows nothing about editors. A host hands it a selection
//! through [`SelectionSource`], preferences through [`PreferenceSource`], and
//! takes the result back through [`SelectionSink`]. [`Buffer`] is a plain
//! string-backed host used by the command-line front end and the tests.
//!
//! ```
//! use rewrap::host::{rewrap_selection, Buffer};
//! use rewrap::Settings;
//!
//! let mut doc = Buffer::new("intro\n  one two\n  three four\nend\n");
//! doc.select(8, 20);
//! let settings = Settings::new(10, 4).unwrap();
//! assert!(rewrap_selection(&mut doc, &settings).unwrap());
//! assert_eq!(doc.text(), "intro\n  one two\n  three\n  four\nend\n");
//! ```

use std::ops::Range;

use memchr::{memchr, memchr_iter, memrchr};
use tracing::debug;

use crate::error::{Result, RewrapError};
use crate::reflow::Settings;

/* ============================= Capabilities ============================== */

/// Supplies the text to rewrap, already expanded to whole lines.
pub trait SelectionSource {
    fn selected_text(&mut self) -> String;
}

/// Supplies the wrapping preferences. Values are validated by the caller.
pub trait PreferenceSource {
    fn max_line_length(&self) -> usize;
    fn tab_width(&self) -> usize;
}

/// Receives the rewrapped text in place of the selection.
pub trait SelectionSink {
    /// Replace the range last handed out by [`SelectionSource::selected_text`]
    /// and leave the selection anchor at its start.
    fn replace_selection(&mut self, text: &str);
}

impl PreferenceSource for Settings {
    fn max_line_length(&self) -> usize {
        Settings::max_line_length(self)
    }

    fn tab_width(&self) -> usize {
        Settings::tab_width(self)
    }
}

/// Run one rewrap action against `host`.
///
/// Returns `Ok(false)` without touching the host when the selection is empty.
pub fn rewrap_selection<H, P>(host: &mut H, prefs: &P) -> Result<bool>
where
    H: SelectionSource + SelectionSink + ?Sized,
    P: PreferenceSource + ?Sized,
{
    let text = host.selected_text();
    if text.is_empty() {
        debug!("empty selection, nothing to rewrap");
        return Ok(false);
    }

    let settings = Settings::new(prefs.max_line_length(), prefs.tab_width())?;
    let output = settings.reflow(&text);
    debug!(
        input_bytes = text.len(),
        output_bytes = output.len(),
        "replacing selection"
    );
    host.replace_selection(&output);
    Ok(true)
}

/* ================================ Buffer ================================= */

/// A string-backed document with a cursor and a selection bound.
///
/// Offsets are byte offsets into the text and always sit on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    text: String,
    insert: usize,
    selection_bound: usize,
    /// Line-expanded range handed out by the last `selected_text` call.
    pending: Option<Range<usize>>,
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

impl Buffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn cursor(&self) -> usize {
        self.insert
    }

    pub fn selection_bound(&self) -> usize {
        self.selection_bound
    }

    pub fn has_selection(&self) -> bool {
        self.insert != self.selection_bound
    }

    /// The raw selection, ordered, without line expansion.
    pub fn selection(&self) -> Range<usize> {
        self.insert.min(self.selection_bound)..self.insert.max(self.selection_bound)
    }

    /// Number of lines; a trailing newline does not open a new line.
    pub fn line_count(&self) -> usize {
        let newlines = memchr_iter(b'\n', self.text.as_bytes()).count();
        if self.text.is_empty() || self.text.ends_with('\n') {
            newlines
        } else {
            newlines + 1
        }
    }

    /// Move the cursor to `pos`, dropping any selection.
    pub fn set_cursor(&mut self, pos: usize) {
        let pos = floor_char_boundary(&self.text, pos);
        self.insert = pos;
        self.selection_bound = pos;
        self.pending = None;
    }

    /// Select from `anchor` to `cursor`. Either order works.
    pub fn select(&mut self, anchor: usize, cursor: usize) {
        self.selection_bound = floor_char_boundary(&self.text, anchor);
        self.insert = floor_char_boundary(&self.text, cursor);
        self.pending = None;
    }

    /// Select whole lines `first..=last`, counted from one.
    pub fn select_lines(&mut self, first: usize, last: usize) -> Result<()> {
        let lines = self.line_count();
        if first == 0 || first > last || last > lines {
            return Err(RewrapError::InvalidLineRange { first, last, lines });
        }
        let start = self.line_start(first);
        let end = if last == lines {
            self.text.len()
        } else {
            self.line_start(last + 1)
        };
        self.select(start, end);
        Ok(())
    }

    /// Byte offset where 1-based line `line` begins.
    fn line_start(&self, line: usize) -> usize {
        if line <= 1 {
            return 0;
        }
        memchr_iter(b'\n', self.text.as_bytes())
            .nth(line - 2)
            .map_or(self.text.len(), |nl| nl + 1)
    }

    fn starts_line(&self, pos: usize) -> bool {
        pos == 0 || self.text.as_bytes()[pos - 1] == b'\n'
    }

    /// Start of the next line, or the end of the text on the last line.
    fn forward_line(&self, pos: usize) -> usize {
        memchr(b'\n', &self.text.as_bytes()[pos..]).map_or(self.text.len(), |off| pos + off + 1)
    }

    /// The selection grown to whole lines. With no selection the cursor's
    /// line is used.
    pub fn expanded_selection(&self) -> Range<usize> {
        let Range { start, end } = self.selection();
        let bytes = self.text.as_bytes();
        let start = memrchr(b'\n', &bytes[..start]).map_or(0, |nl| nl + 1);
        let end = if !self.has_selection() || !self.starts_line(end) {
            self.forward_line(end)
        } else {
            end
        };
        start..end
    }
}

impl SelectionSource for Buffer {
    fn selected_text(&mut self) -> String {
        let range = self.expanded_selection();
        debug!(start = range.start, end = range.end, "expanded selection");
        let text = self.text[range.clone()].to_owned();
        self.pending = Some(range);
        text
    }
}

impl SelectionSink for Buffer {
    fn replace_selection(&mut self, text: &str) {
        let range = self
            .pending
            .take()
            .unwrap_or_else(|| self.expanded_selection());
        let start = range.start;
        self.text.replace_range(range, text);
        self.insert = start + text.len();
        self.selection_bound = start;
    }
}
