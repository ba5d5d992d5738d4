//! Host-side lifecycle helpers.
//!
//! The engine itself is stateless; what persists across scans lives on the
//! host side. Two pieces of that are easy to get wrong, so they are provided
//! here as plain data structures with no hidden behavior:
//!
//! - [`DecorationLedger`] tracks the rendering handles most recently applied
//!   per view, so the previous handles can be disposed *after* the new ones
//!   are applied (disposing first flashes undecorated text).
//! - [`Debounce`] coalesces bursts of edit/scroll triggers into a single
//!   deadline, so rapid typing schedules one scan, not one per keystroke.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identifies one document view on the host side.
///
/// Hosts assign these; the only requirement is stability for the lifetime of
/// the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

impl ViewId {
    /// Create a new view id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Rendering handles most recently applied per view.
///
/// `H` is whatever the host's renderer hands back for an applied style
/// (a decoration type, a highlight id, ...). The ledger never disposes
/// anything itself; it only sequences the handoff.
#[derive(Debug)]
pub struct DecorationLedger<H> {
    applied: HashMap<ViewId, Vec<H>>,
}

impl<H> DecorationLedger<H> {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            applied: HashMap::new(),
        }
    }

    /// Record `handles` as the currently applied set for `view`, returning
    /// the previously applied set for the host to dispose.
    ///
    /// Call this *after* the new handles have been applied to the renderer.
    #[must_use = "the returned handles are stale and must be disposed"]
    pub fn swap(&mut self, view: ViewId, handles: Vec<H>) -> Vec<H> {
        self.applied.insert(view, handles).unwrap_or_default()
    }

    /// Remove a closed view, returning its handles for disposal.
    ///
    /// Hosts call this from their view-close hook; nothing is cleaned up
    /// automatically.
    #[must_use = "the returned handles are stale and must be disposed"]
    pub fn remove(&mut self, view: ViewId) -> Vec<H> {
        self.applied.remove(&view).unwrap_or_default()
    }

    /// The currently applied handles for `view`, if any.
    pub fn applied(&self, view: ViewId) -> Option<&[H]> {
        self.applied.get(&view).map(Vec::as_slice)
    }

    /// Number of views with applied handles.
    pub fn view_count(&self) -> usize {
        self.applied.len()
    }
}

impl<H> Default for DecorationLedger<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pure trigger-coalescing policy.
///
/// Every [`trigger`](Self::trigger) arms (or re-arms) a deadline `delay` into
/// the future; [`fire_due`](Self::fire_due) reports and consumes an elapsed
/// deadline. The host drives it from its own event loop with its own clock.
/// There are no threads or timers here, which also makes it deterministic to
/// test.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// A policy that fires `delay` after the most recent trigger.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Note a trigger event (edit, scroll, focus change) at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` while a deadline is armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the deadline is armed and has elapsed at `now`, disarm it and
    /// return `true`: the host should run one evaluation now.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
