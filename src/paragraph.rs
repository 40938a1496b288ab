//! Splitting stripped text into paragraphs and joining reflowed ones back up.

use memchr::memchr_iter;

/* ============================== Segmenting =============================== */

/// A line is blank when it holds no token.
#[inline]
fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Split `text` into maximal runs of non-blank lines.
///
/// Each returned slice covers the paragraph's lines including their
/// terminators. Blank lines between, before and after paragraphs are dropped.
pub fn segment(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut para_start: Option<usize> = None;
    let mut line_start = 0usize;

    let line_ends = memchr_iter(b'\n', text.as_bytes())
        .map(|nl| nl + 1)
        .chain((!text.ends_with('\n') && !text.is_empty()).then_some(text.len()));

    for line_end in line_ends {
        let line = &text[line_start..line_end];
        match (is_blank(line), para_start) {
            (true, Some(start)) => {
                paragraphs.push(&text[start..line_start]);
                para_start = None;
            }
            (false, None) => para_start = Some(line_start),
            _ => {}
        }
        line_start = line_end;
    }
    if let Some(start) = para_start {
        paragraphs.push(&text[start..]);
    }
    paragraphs
}

/* =============================== Joining ================================= */

/// Concatenate reflowed paragraphs with an `indent + "\n"` separator line.
pub fn join<I>(paragraphs: I, indent: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, paragraph) in paragraphs.into_iter().enumerate() {
        if i > 0 {
            out.push_str(indent);
            out.push('\n');
        }
        out.push_str(paragraph.as_ref());
    }
    out
}
