use std::io;

/// Errors raised at the edges of the rewrap pipeline.
///
/// The reflow core itself never fails; these come from validating host
/// preferences, resolving line ranges and file I/O in the command-line host.
#[derive(Debug, thiserror::Error)]
pub enum RewrapError {
    /// A width preference was zero.
    #[error("{name} must be a positive integer, got {value}")]
    InvalidArgument { name: &'static str, value: usize },

    /// A line range that is empty, inverted or outside the document.
    #[error("invalid line range {first}:{last} (document has {lines} lines)")]
    InvalidLineRange {
        first: usize,
        last: usize,
        lines: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RewrapError>;
