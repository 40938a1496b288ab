//! Driving a rewrap through the host capabilities, both with the bundled
//! `Buffer` and with a hand-rolled editor.

use pretty_assertions::assert_eq;
use rewrap::{
    rewrap_selection, Buffer, PreferenceSource, RewrapError, SelectionSink, SelectionSource,
    Settings,
};

/// An editor that records what it was asked to do.
#[derive(Default)]
struct RecordingEditor {
    selection: String,
    replaced: Vec<String>,
    reads: usize,
}

impl SelectionSource for RecordingEditor {
    fn selected_text(&mut self) -> String {
        self.reads += 1;
        self.selection.clone()
    }
}

impl SelectionSink for RecordingEditor {
    fn replace_selection(&mut self, text: &str) {
        self.replaced.push(text.to_owned());
    }
}

struct Margin {
    right: usize,
    tabs: usize,
}

impl PreferenceSource for Margin {
    fn max_line_length(&self) -> usize {
        self.right
    }

    fn tab_width(&self) -> usize {
        self.tabs
    }
}

#[test]
fn editor_receives_reflowed_text_once() {
    let mut editor = RecordingEditor {
        selection: "    -- one two three four\n".to_owned(),
        ..Default::default()
    };
    let prefs = Margin { right: 18, tabs: 4 };
    assert!(rewrap_selection(&mut editor, &prefs).unwrap());
    assert_eq!(editor.reads, 1);
    assert_eq!(editor.replaced, vec!["    -- one two\n    -- three four\n"]);
}

#[test]
fn empty_selection_never_reaches_the_sink() {
    let mut editor = RecordingEditor::default();
    let prefs = Margin { right: 0, tabs: 0 };
    assert!(!rewrap_selection(&mut editor, &prefs).unwrap());
    assert!(editor.replaced.is_empty());
}

#[test]
fn zero_tab_width_is_rejected() {
    let mut editor = RecordingEditor {
        selection: "text\n".to_owned(),
        ..Default::default()
    };
    let err = rewrap_selection(&mut editor, &Margin { right: 80, tabs: 0 }).unwrap_err();
    assert_eq!(err.to_string(), "tab_width must be a positive integer, got 0");
    assert!(editor.replaced.is_empty());
}

#[test]
fn buffer_rewraps_only_the_selected_paragraph() {
    let source = "\
fn main() {
    // This comment is far too long for the margin and
    // should be rewrapped.
    let x = 1;
}
";
    let mut doc = Buffer::new(source);
    doc.select_lines(2, 3).unwrap();
    let settings = Settings::new(40, 4).unwrap();
    assert!(rewrap_selection(&mut doc, &settings).unwrap());
    assert_eq!(
        doc.text(),
        "\
fn main() {
    // This comment is far too long for
    // the margin and should be
    // rewrapped.
    let x = 1;
}
"
    );
    // Anchor at the start of the replaced range, cursor at its end.
    assert_eq!(doc.selection_bound(), "fn main() {\n".len());
    assert_eq!(&doc.text()[doc.cursor()..], "    let x = 1;\n}\n");
}

#[test]
fn buffer_cursor_line_is_rewrapped_without_selection() {
    let mut doc = Buffer::new("a b c d\ne f\n");
    doc.set_cursor(2);
    rewrap_selection(&mut doc, &Settings::new(3, 8).unwrap()).unwrap();
    assert_eq!(doc.text(), "a b\nc d\ne f\n");
}

#[test]
fn buffer_rejects_out_of_range_lines() {
    let mut doc = Buffer::new("one\ntwo\n");
    let err = doc.select_lines(2, 5).unwrap_err();
    assert!(matches!(
        err,
        RewrapError::InvalidLineRange {
            first: 2,
            last: 5,
            lines: 2
        }
    ));
    assert_eq!(
        err.to_string(),
        "invalid line range 2:5 (document has 2 lines)"
    );
}
