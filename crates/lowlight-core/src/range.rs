//! Line/character coordinates and the range algebra used by the scanner.
//!
//! All coordinates are zero-based. `character` counts Unicode scalar values
//! (`char`), not bytes, so ranges can be handed to hosts that address text by
//! (line, column) pairs without further conversion.

/// A zero-based (line, character) position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character offset within the line, in Unicode scalar values.
    pub character: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A region between two positions, `start <= end` in document order.
///
/// Fragment-rule results are always confined to a single line; block-rule
/// results may span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Inclusive start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Range {
    /// Create a new range.
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start must not follow its end");
        Self { start, end }
    }

    /// Convenience constructor from raw line/character quadruples.
    pub fn of(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    /// Returns `true` if the range starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Intersect two ranges, or `None` when they are disjoint.
    ///
    /// Ranges that merely touch produce an empty range at the shared
    /// position rather than `None`.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            return None;
        }
        Some(Range::new(start, end))
    }

    /// The sub-window strictly after `scanned`'s last line, bounded by `self`.
    ///
    /// Returns `None` unless at least one full line separates `scanned` from
    /// the end of this range (`self.end.line - scanned.end.line > 1`), which
    /// is what forbids a block rule from closing on its own start line.
    pub(crate) fn remainder_after(&self, scanned: &Range) -> Option<Range> {
        if self.end.line.saturating_sub(scanned.end.line) <= 1 {
            return None;
        }
        Some(Range::new(
            Position::new(scanned.end.line + 1, scanned.end.character),
            self.end,
        ))
    }

    /// Join two ranges into one spanning from `start`'s start to `end`'s end.
    pub(crate) fn join(start: &Range, end: &Range) -> Range {
        Range::new(start.start, end.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_document_order() {
        assert!(Position::new(1, 0) > Position::new(0, 99));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Range::of(0, 0, 10, 0);
        let b = Range::of(5, 2, 20, 0);
        assert_eq!(a.intersection(&b), Some(Range::of(5, 2, 10, 0)));
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = Range::of(0, 0, 4, 0);
        let b = Range::of(5, 0, 9, 0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_touching_is_empty_not_none() {
        let a = Range::of(0, 0, 5, 0);
        let b = Range::of(5, 0, 9, 0);
        assert_eq!(a.intersection(&b), Some(Range::of(5, 0, 5, 0)));
    }

    #[test]
    fn test_remainder_requires_a_full_line_gap() {
        let window = Range::of(0, 0, 10, 0);
        let scanned = Range::of(3, 2, 3, 7);
        assert_eq!(
            window.remainder_after(&scanned),
            Some(Range::of(4, 7, 10, 0))
        );

        // Start match on the window's last or second-to-last line leaves nothing.
        let scanned = Range::of(9, 0, 9, 4);
        assert_eq!(window.remainder_after(&scanned), None);
        let scanned = Range::of(10, 0, 10, 4);
        assert_eq!(window.remainder_after(&scanned), None);
    }

    #[test]
    fn test_join_spans_both() {
        let start = Range::of(2, 4, 2, 9);
        let end = Range::of(6, 0, 6, 3);
        assert_eq!(Range::join(&start, &end), Range::of(2, 4, 6, 3));
    }
}
