//! Rule scanning over bounded windows.
//!
//! One [`scan`] call resolves one rule against one window and reports at most
//! one match. The tie-break policy is fixed: the earliest possible start and,
//! given that start, the earliest possible end. This must not change; it is
//! what makes repeated scans of an unchanged document reproducible.

use tracing::warn;

use crate::document::ScanSource;
use crate::pattern::Pattern;
use crate::range::Range;
use crate::rules::{Rule, Tier};

/// A resolved match: the range to de-emphasize and the tier to do it at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// The matched document range.
    pub range: Range,
    /// The intensity tier of the rule that produced it.
    pub tier: Tier,
}

/// Find the first qualifying match for `rule` within `window`.
///
/// Fragment rules walk the window's lines in increasing order and return the
/// first line's first hit, confined to that line.
///
/// Block rules run in two phases: the start pattern is resolved exactly like
/// a fragment rule, then the end pattern is resolved over the remaining
/// window strictly after the start line. An end hit on the start line itself
/// never qualifies. If the rule carries `max_lines_between`, an end hit
/// further than that many lines below the start rejects the match.
pub fn scan(source: &dyn ScanSource, window: Range, rule: &Rule) -> Option<RuleMatch> {
    match rule {
        Rule::Fragment { pattern, tier } => {
            let range = scan_for_pattern(source, window, pattern)?;
            Some(RuleMatch { range, tier: *tier })
        }
        Rule::Block {
            start,
            end,
            tier,
            max_lines_between,
        } => {
            let start_match = scan_for_pattern(source, window, start)?;
            let remaining = window.remainder_after(&start_match)?;
            let end_match = scan_for_pattern(source, remaining, end)?;
            if let Some(max) = max_lines_between {
                if end_match.start.line > start_match.start.line + max {
                    return None;
                }
            }
            Some(RuleMatch {
                range: Range::join(&start_match, &end_match),
                tier: *tier,
            })
        }
    }
}

/// Walk `window`'s lines in increasing order; return the first line's first
/// pattern hit as a single-line range.
///
/// Lines the document cannot produce (a concurrent edit may have shrunk it
/// since the viewport was captured) are skipped with a warning; the scan
/// continues on the next line.
fn scan_for_pattern(source: &dyn ScanSource, window: Range, pattern: &Pattern) -> Option<Range> {
    for line in window.start.line..=window.end.line {
        let text = match source.line_text(line) {
            Ok(text) => text,
            Err(err) => {
                warn!(line, error = %err, "skipping unavailable line");
                continue;
            }
        };
        if let Some(hit) = pattern.find_first(&text) {
            return Some(Range::of(line, hit.offset, line, hit.offset + hit.len));
        }
    }
    None
}
