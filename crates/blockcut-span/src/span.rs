use std::ops::RangeInclusive;

/// An inclusive range of line indices marked for deletion.
///
/// `boundary` is the index of the boundary marker line the span was resolved
/// against. A resolved span always satisfies `start <= end < boundary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub boundary: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, boundary: usize) -> Self {
        Self {
            start,
            end,
            boundary,
        }
    }

    /// Number of lines covered by the span.
    pub fn line_count(&self) -> usize {
        self.end + 1 - self.start
    }

    /// 1-based line numbers, as an editor would show them.
    pub fn display_range(&self) -> RangeInclusive<usize> {
        (self.start + 1)..=(self.end + 1)
    }

    pub(crate) fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
