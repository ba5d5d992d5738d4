//! Viewport clipping.
//!
//! The viewport is a list of visible line ranges (hosts with split views may
//! report several disjoint ones). Before scanning, each visible range is
//! bounded by the global line ceiling so worst-case cost stays fixed
//! regardless of document length.

use crate::range::{Position, Range};

/// Bound each visible range by the scan ceiling.
///
/// A visible range that does not intersect `[(0,0), (ceiling_line,0)]` at all
/// (the viewport has scrolled entirely past the ceiling) falls back to the
/// full ceiling window, so the top of the document keeps getting scanned.
/// Relative order of the input ranges is preserved.
pub fn clip(visible: &[Range], ceiling_line: usize) -> Vec<Range> {
    let ceiling = Range::new(Position::new(0, 0), Position::new(ceiling_line, 0));
    visible
        .iter()
        .map(|range| range.intersection(&ceiling).unwrap_or(ceiling))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_within_ceiling_is_unchanged() {
        let visible = vec![Range::of(10, 0, 50, 20)];
        assert_eq!(clip(&visible, 1000), visible);
    }

    #[test]
    fn test_range_straddling_ceiling_is_clipped() {
        let visible = vec![Range::of(900, 0, 1200, 5)];
        assert_eq!(clip(&visible, 1000), vec![Range::of(900, 0, 1000, 0)]);
    }

    #[test]
    fn test_range_past_ceiling_falls_back_to_full_window() {
        let visible = vec![Range::of(5000, 0, 5040, 0)];
        assert_eq!(clip(&visible, 1000), vec![Range::of(0, 0, 1000, 0)]);
    }

    #[test]
    fn test_order_preserved_for_split_viewports() {
        let visible = vec![Range::of(80, 0, 120, 0), Range::of(0, 0, 40, 0)];
        let clipped = clip(&visible, 100);
        assert_eq!(
            clipped,
            vec![Range::of(80, 0, 100, 0), Range::of(0, 0, 40, 0)]
        );
    }

    #[test]
    fn test_empty_viewport() {
        assert!(clip(&[], 1000).is_empty());
    }
}
