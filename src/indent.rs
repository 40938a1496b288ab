//! Indentation handling: capture the first line's prefix, strip prefixes from
//! every line.
//!
//! The indent-character set covers plain whitespace plus the usual line-comment
//! leaders, so a block like `// foo` or `# - bar` rewraps as a comment block:
//!
//! ```
//! use rewrap::indent::{strip_indent, Indent};
//!
//! let indent = Indent::extract("\t// some text\n", 4);
//! assert_eq!(indent.as_str(), "\t// ");
//! assert_eq!(indent.width(), 7);
//! assert_eq!(strip_indent("  # a\n# b\n"), "a\nb\n");
//! ```

use memchr::memchr_iter;

/// Characters treated as indentation at the start of a line.
pub const INDENT_CHARS: &[u8] = b" \t#/;*!-";

#[inline]
pub fn is_indent_char(b: u8) -> bool {
    INDENT_CHARS.contains(&b)
}

/// Byte length of the leading indent run of `s`. Indent characters are all
/// ASCII, so the result is always a char boundary.
#[inline]
fn indent_len(s: &[u8]) -> usize {
    s.iter().take_while(|&&b| is_indent_char(b)).count()
}

/// The prefix captured from the first line, with its display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent<'a> {
    text: &'a str,
    width: usize,
}

impl<'a> Indent<'a> {
    /// Capture the leading indent run of the first line of `text`.
    ///
    /// Each tab counts as `tab_width` columns, everything else as one.
    pub fn extract(text: &'a str, tab_width: usize) -> Self {
        let text = &text[..indent_len(text.as_bytes())];
        let tabs = text.bytes().filter(|&b| b == b'\t').count();
        Self {
            text,
            width: text.len() + tabs * tab_width.saturating_sub(1),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Remove any leading indent-character run from every line.
///
/// Lines keep their terminators, so a trailing newline survives and running
/// this twice is the same as running it once.
pub fn strip_indent(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut line_start = 0usize;
    for nl in memchr_iter(b'\n', bytes) {
        let line = &text[line_start..nl];
        out.push_str(&line[indent_len(line.as_bytes())..]);
        out.push('\n');
        line_start = nl + 1;
    }
    let last = &text[line_start..];
    out.push_str(&last[indent_len(last.as_bytes())..]);
    out
}
