//! Scan orchestration.
//!
//! [`evaluate`] is the engine's sole entry point: it clips the viewport,
//! drives the rules × windows iteration, and buckets the results. It is
//! stateless per call, performs no I/O, and runs to completion synchronously;
//! worst-case cost is bounded by the ceiling, not the document length.
//!
//! Lifecycle contract for callers: rendering resources produced for the
//! previous result set become stale when a new set is applied, and must be
//! released only *after* the new set has been fully applied (dispose after
//! apply), or the text flashes undecorated in between. See
//! [`DecorationLedger`](crate::host::DecorationLedger) for a host-side helper
//! that keeps that handoff explicit. Hosts must serialize evaluations per
//! document view; different views may run in parallel.

use crate::classify::{self, TieredRanges};
use crate::document::ScanSource;
use crate::range::Range;
use crate::rules::Rule;
use crate::{scanner, viewport};

/// Evaluate all rules over the visible portion of a document.
///
/// `visible` is the host's current list of visible line ranges (a split view
/// may report several); `ceiling_line` caps how far down the document any
/// scanning may reach. Rules are visited in order, windows in order within
/// each rule, and each (rule, window) pair contributes at most one match.
///
/// Deterministic: an unchanged (document, viewport, rules, ceiling) input
/// yields an identical result set.
pub fn evaluate(
    source: &dyn ScanSource,
    visible: &[Range],
    rules: &[Rule],
    ceiling_line: usize,
) -> TieredRanges {
    let windows = viewport::clip(visible, ceiling_line);

    let mut results = Vec::new();
    for rule in rules {
        for window in &windows {
            if let Some(result) = scanner::scan(source, *window, rule) {
                results.push(result);
            }
        }
    }

    classify::bucket(results)
}
