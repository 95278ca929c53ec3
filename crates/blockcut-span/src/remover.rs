//! Block removal.

use crate::{Error, Result, Span, SpanResolver};

/// The outcome of removing a block from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub span: Span,
    /// The text with the block removed.
    pub content: String,
    /// The removed lines, terminators included.
    pub removed: Vec<String>,
}

/// Delete `span` from `lines` in place and return the removed lines.
///
/// Lines outside the span keep their order and exact content.
///
/// # Errors
/// Returns `Error::SpanOutOfRange` if the span is inverted or reaches past the
/// last line. `lines` is left untouched in that case.
pub fn remove(lines: &mut Vec<String>, span: Span) -> Result<Vec<String>> {
    if span.start > span.end || span.end >= lines.len() {
        return Err(Error::SpanOutOfRange {
            span,
            len: lines.len(),
        });
    }
    Ok(lines.drain(span.indices()).collect())
}

/// Resolve and remove a block from `text`.
///
/// The text is split into lines with their terminators kept, so everything
/// outside the block comes back byte-for-byte.
pub fn remove_block(text: &str, resolver: &SpanResolver) -> Result<Removal> {
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_owned).collect();
    let span = resolver.resolve(&lines)?;
    let removed = remove(&mut lines, span)?;

    Ok(Removal {
        span,
        content: lines.concat(),
        removed,
    })
}
