//! Span resolution.
//!
//! Finds the start marker, the boundary marker after it, and the block's own
//! closing line in between. See the crate docs for the overall shape.

use crate::indent::leading_whitespace;
use crate::{Error, IndentPrefix, MarkerKind, Result, Span};

/// Closing token used when the caller does not name one.
pub const DEFAULT_CLOSING_TOKEN: &str = "</div>";

/// How the block's closing line is picked among the exact-indent candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The first line equal to indent + closing token wins.
    #[default]
    FirstExact,
    /// Track open/close depth from the start line and take the exact-indent
    /// closing line that brings the depth back to zero.
    Balanced { open_token: String },
}

/// Resolves the span of a block from its markers and closing-line shape.
#[derive(Debug, Clone)]
pub struct SpanResolver {
    start_marker: String,
    boundary_marker: String,
    indent: IndentPrefix,
    closing_token: String,
    strategy: MatchStrategy,
    expect_opening: Option<String>,
}

impl SpanResolver {
    pub fn new(
        start_marker: impl Into<String>,
        boundary_marker: impl Into<String>,
        indent: IndentPrefix,
    ) -> Self {
        Self {
            start_marker: start_marker.into(),
            boundary_marker: boundary_marker.into(),
            indent,
            closing_token: DEFAULT_CLOSING_TOKEN.to_string(),
            strategy: MatchStrategy::default(),
            expect_opening: None,
        }
    }

    pub fn closing_token(mut self, token: impl Into<String>) -> Self {
        self.closing_token = token.into();
        self
    }

    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Text the line right after the start marker is expected to contain.
    ///
    /// A mismatch is logged as a warning and does not stop resolution.
    pub fn expect_opening(mut self, text: impl Into<String>) -> Self {
        self.expect_opening = Some(text.into());
        self
    }

    /// The exact content, minus terminator, of the block's closing line.
    pub fn closing_line(&self) -> String {
        format!("{}{}", self.indent.as_str(), self.closing_token)
    }

    /// Resolve the span to delete from `lines`.
    ///
    /// # Errors
    /// - `EmptyMarker` / `InvalidClosingToken` / `InvalidOpenToken` for unusable settings
    /// - `MarkerNotFound` if either marker is missing
    /// - `IndentMismatch` if the start line sits deeper than the indent prefix
    /// - `StructuralMatch` if no closing line is found before the boundary
    pub fn resolve<S: AsRef<str>>(&self, lines: &[S]) -> Result<Span> {
        self.validate()?;

        let start = find_marker(lines, 0, &self.start_marker).ok_or_else(|| {
            Error::MarkerNotFound {
                which: MarkerKind::Start,
                marker: self.start_marker.clone(),
            }
        })?;
        let boundary = find_marker(lines, start, &self.boundary_marker).ok_or_else(|| {
            Error::MarkerNotFound {
                which: MarkerKind::Boundary,
                marker: self.boundary_marker.clone(),
            }
        })?;
        tracing::debug!(start, boundary, "markers located");

        let start_indent = leading_whitespace(lines[start].as_ref());
        if !self.indent.as_str().starts_with(start_indent) {
            return Err(Error::IndentMismatch {
                line: start,
                found: start_indent.to_string(),
                indent: self.indent.as_str().to_string(),
            });
        }

        self.check_opening(lines, start);

        let end = match &self.strategy {
            MatchStrategy::FirstExact => self.find_first_exact(lines, start, boundary),
            MatchStrategy::Balanced { open_token } => {
                self.find_balanced(lines, start, boundary, open_token)
            }
        }
        .ok_or_else(|| Error::StructuralMatch {
            expected: self.closing_line(),
            from: start + 1,
            to: boundary,
        })?;

        let span = Span::new(start, end, boundary);
        tracing::debug!(%span, strategy = ?self.strategy, "span resolved");
        Ok(span)
    }

    fn validate(&self) -> Result<()> {
        if self.start_marker.is_empty() {
            return Err(Error::EmptyMarker {
                which: MarkerKind::Start,
            });
        }
        if self.boundary_marker.is_empty() {
            return Err(Error::EmptyMarker {
                which: MarkerKind::Boundary,
            });
        }
        if self.closing_token.is_empty() {
            return Err(Error::InvalidClosingToken);
        }
        if matches!(&self.strategy, MatchStrategy::Balanced { open_token } if open_token.trim().is_empty()) {
            return Err(Error::InvalidOpenToken);
        }
        Ok(())
    }

    fn check_opening<S: AsRef<str>>(&self, lines: &[S], start: usize) {
        let Some(expected) = self.expect_opening.as_deref().map(str::trim) else {
            return;
        };
        let next = lines.get(start + 1).map(|l| l.as_ref());
        if !next.is_some_and(|line| line.contains(expected)) {
            tracing::warn!(
                line = start + 1,
                expected,
                found = next.map(strip_terminator),
                "line after start marker does not contain the expected opening"
            );
        }
    }

    fn find_first_exact<S: AsRef<str>>(
        &self,
        lines: &[S],
        start: usize,
        boundary: usize,
    ) -> Option<usize> {
        let closing_line = self.closing_line();
        (start + 1..boundary).find(|&idx| strip_terminator(lines[idx].as_ref()) == closing_line)
    }

    fn find_balanced<S: AsRef<str>>(
        &self,
        lines: &[S],
        start: usize,
        boundary: usize,
        open_token: &str,
    ) -> Option<usize> {
        let closing_line = self.closing_line();
        let mut depth = 0usize;

        for (idx, line) in lines.iter().enumerate().take(boundary).skip(start) {
            let content = strip_terminator(line.as_ref());
            let trimmed = content.trim();

            if trimmed.starts_with(&self.closing_token) {
                if idx > start && depth == 1 && content == closing_line {
                    return Some(idx);
                }
                depth = depth.saturating_sub(1);
            } else if opens(trimmed, open_token, &self.closing_token) {
                depth += 1;
            }
        }
        None
    }
}

/// Resolve a span with the first-exact-match strategy.
///
/// # Example
/// ```
/// use blockcut_span::{IndentPrefix, resolve};
///
/// let lines = ["A\n", "START\n", "  <div>\n", "    <btn/>\n", "  </div>\n", "B\n", "END\n"];
/// let indent = IndentPrefix::new("  ").unwrap();
///
/// let span = resolve(&lines, "START", "END", &indent, "</div>").unwrap();
/// assert_eq!((span.start, span.end), (1, 4));
/// ```
pub fn resolve<S: AsRef<str>>(
    lines: &[S],
    start_marker: &str,
    boundary_marker: &str,
    indent: &IndentPrefix,
    closing_token: &str,
) -> Result<Span> {
    SpanResolver::new(start_marker, boundary_marker, indent.clone())
        .closing_token(closing_token)
        .resolve(lines)
}

fn find_marker<S: AsRef<str>>(lines: &[S], from: usize, marker: &str) -> Option<usize> {
    lines
        .iter()
        .skip(from)
        .position(|line| line.as_ref().contains(marker))
        .map(|pos| pos + from)
}

/// Strip only the trailing line terminator (`\n` or `\r\n`).
fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

fn opens(trimmed: &str, open_token: &str, closing_token: &str) -> bool {
    trimmed.starts_with(open_token) && !trimmed.ends_with("/>") && !trimmed.contains(closing_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  </div>\n", "  </div>")]
    #[case("  </div>\r\n", "  </div>")]
    #[case("  </div>", "  </div>")]
    #[case("  </div>  \n", "  </div>  ")]
    #[case("\n", "")]
    fn test_strip_terminator(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(strip_terminator(line), expected);
    }

    #[rstest]
    #[case("<div>", true)]
    #[case("<div className=\"flex\">", true)]
    #[case("<div", true)]
    #[case("<div />", false)]
    #[case("<div>text</div>", false)]
    #[case("<span>", false)]
    fn test_opens(#[case] trimmed: &str, #[case] expected: bool) {
        assert_eq!(opens(trimmed, "<div", "</div>"), expected);
    }

    #[test]
    fn test_find_marker_from_offset() {
        let lines = ["END", "START", "END"];
        assert_eq!(find_marker(&lines, 0, "END"), Some(0));
        assert_eq!(find_marker(&lines, 1, "END"), Some(2));
        assert_eq!(find_marker(&lines, 3, "END"), None);
    }

    #[test]
    fn test_closing_line() {
        let resolver = SpanResolver::new("S", "E", IndentPrefix::spaces(4).unwrap())
            .closing_token("</section>");
        assert_eq!(resolver.closing_line(), "    </section>");
    }
}
