//! Error types for blockcut-span

use crate::Span;

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two markers a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    Boundary,
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Boundary => write!(f, "boundary"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{which} marker not found: {marker:?}")]
    MarkerNotFound { which: MarkerKind, marker: String },

    #[error("{which} marker must not be empty")]
    EmptyMarker { which: MarkerKind },

    #[error("no line equal to {expected:?} between lines {from} and {to}")]
    StructuralMatch {
        expected: String,
        from: usize,
        to: usize,
    },

    #[error("invalid indent prefix {indent:?}: {reason}")]
    InvalidIndent { indent: String, reason: &'static str },

    #[error(
        "start line {line} is indented by {found:?}, which is not a prefix of the indent {indent:?}"
    )]
    IndentMismatch {
        line: usize,
        found: String,
        indent: String,
    },

    #[error("closing token must not be empty")]
    InvalidClosingToken,

    #[error("opening token must not be empty")]
    InvalidOpenToken,

    #[error("missing required setting `{field}`")]
    MissingField { field: &'static str },

    #[error("unknown match strategy {0:?} (expected `first` or `balanced`)")]
    UnknownStrategy(String),

    #[error("span {span} is out of range for a document of {len} lines")]
    SpanOutOfRange { span: Span, len: usize },
}
