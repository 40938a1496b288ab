//! rewrap — re-break paragraphs to a line width, keeping the first line's
//! indentation or comment prefix.
//!
//! - The leading run of indent characters (space, tab, `#`, `/`, `;`, `*`, `!`,
//!   `-`) on the first line becomes the prefix of every output line. Leading
//!   indent characters on all lines are discarded before wrapping.
//! - Blank lines separate paragraphs; each paragraph is packed greedily and the
//!   paragraphs are rejoined with one prefix-only blank line.
//! - Two spaces go between a word ending in `.` and a word starting with an
//!   ASCII capital, one space everywhere else.
//! - Widths count chars; tabs in the prefix count as the tab width.
//!
//! ```
//! let text = "# Hello world. This is a\n# test.\n";
//! assert_eq!(rewrap::reflow(text, 40, 4), "# Hello world.  This is a test.\n");
//! ```

pub mod error;
pub mod host;
pub mod indent;
pub mod paragraph;
pub mod reflow;

pub use error::{Result, RewrapError};
pub use host::{rewrap_selection, Buffer, PreferenceSource, SelectionSink, SelectionSource};
pub use reflow::{reflow, Settings};
