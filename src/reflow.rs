//! The paragraph reflow engine and the pipeline that drives it.
//!
//! ```
//! let out = rewrap::reflow("// one two three four five\n", 14, 4);
//! assert_eq!(out, "// one two\n// three four\n// five\n");
//! ```

use tracing::{debug, trace};

use crate::error::{Result, RewrapError};
use crate::indent::{strip_indent, Indent};
use crate::paragraph::{join, segment};

/* ================================ Words ================================== */

/// Iterator over maximal runs of non-whitespace characters.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

pub fn words(text: &str) -> Words<'_> {
    Words { rest: text }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(|c: char| !c.is_whitespace())?;
        let tail = &self.rest[start..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, rest) = tail.split_at(end);
        self.rest = rest;
        Some(word)
    }
}

/* ================================ Engine ================================= */

/// Inter-word gap: two spaces after a `.` when the next word starts with an
/// ASCII capital, otherwise one. Abbreviations like "Mr. Smith" get two too.
#[inline]
fn gap(line_so_far: &str, word: &str) -> &'static str {
    let after_period = line_so_far.ends_with('.');
    let before_capital = word.starts_with(|c: char| c.is_ascii_uppercase());
    if after_period && before_capital {
        "  "
    } else {
        " "
    }
}

/// Greedily pack the words of one paragraph into indented lines.
///
/// Widths are counted in chars. A word that alone is wider than
/// `max_line_length` still gets its own line, unsplit. The result ends with
/// exactly one newline.
pub fn reflow_paragraph(paragraph: &str, indent: Indent<'_>, max_line_length: usize) -> String {
    let mut out = String::with_capacity(paragraph.len() + indent.as_str().len() * 4 + 1);
    let mut width = 0usize;
    let mut line_open = false;

    for word in words(paragraph) {
        let len = word.chars().count();
        if line_open {
            let space = gap(&out, word);
            let candidate = width + space.len() + len;
            if candidate <= max_line_length {
                out.push_str(space);
                out.push_str(word);
                width = candidate;
                continue;
            }
            out.push('\n');
        }
        out.push_str(indent.as_str());
        out.push_str(word);
        width = indent.width() + len;
        line_open = true;
    }
    out.push('\n');
    out
}

/* =============================== Pipeline ================================ */

/// Re-wrap `text` to `max_line_length` columns.
///
/// The first line's indent is reapplied to every output line, paragraphs stay
/// separated by one indent-only blank line, and whitespace between words is
/// normalised. Empty or blank input yields an empty string.
///
/// `max_line_length` should be positive and `tab_width` at least one; neither
/// is checked here (see [`Settings::new`] for the validating path).
pub fn reflow(text: &str, max_line_length: usize, tab_width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let indent = Indent::extract(text, tab_width);
    let stripped = strip_indent(text);
    let paragraphs = segment(&stripped);
    debug!(
        indent = ?indent.as_str(),
        indent_width = indent.width(),
        max_line_length,
        paragraphs = paragraphs.len(),
        "reflowing text"
    );

    join(
        paragraphs.iter().enumerate().map(|(i, paragraph)| {
            let wrapped = reflow_paragraph(paragraph, indent, max_line_length);
            trace!(paragraph = i, lines = wrapped.lines().count(), "paragraph reflowed");
            wrapped
        }),
        indent.as_str(),
    )
}

/// Validated wrapping preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    max_line_length: usize,
    tab_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_line_length: 80,
            tab_width: 8,
        }
    }
}

impl Settings {
    pub fn new(max_line_length: usize, tab_width: usize) -> Result<Self> {
        if max_line_length == 0 {
            return Err(RewrapError::InvalidArgument {
                name: "max_line_length",
                value: max_line_length,
            });
        }
        if tab_width == 0 {
            return Err(RewrapError::InvalidArgument {
                name: "tab_width",
                value: tab_width,
            });
        }
        Ok(Self {
            max_line_length,
            tab_width,
        })
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn reflow(&self, text: &str) -> String {
        reflow(text, self.max_line_length, self.tab_width)
    }
}
