#![warn(missing_docs)]
//! Lowlight Core - Headless Pattern De-emphasis Engine
//!
//! # Overview
//!
//! `lowlight-core` scans the currently visible portion of a text document for
//! user-configured patterns and produces tiered sets of character ranges to
//! be visually de-emphasized. It is built for interactive editors: input is a
//! live, mutable document; output is recomputed cheaply and repeatedly as the
//! user scrolls or types. The engine is headless: it owns no buffer, renders
//! nothing, and schedules nothing.
//!
//! # Core Features
//!
//! - **Fragment rules**: a single pattern; each window's first hit becomes
//!   one single-line range
//! - **Block rules**: start/end-delimited spans across lines, with a strict
//!   minimum one-line gap and an optional line-distance bound
//! - **Bounded cost**: all scanning is clipped to the viewport and a global
//!   line ceiling, independent of document size
//! - **Deterministic output**: fixed first-match tie-breaks make repeated
//!   scans of unchanged input bit-identical
//! - **Fault tolerance**: unavailable lines and individual rule failures are
//!   skipped, never fatal; partial results beat none
//!
//! # Control Flow
//!
//! ```text
//! visible ranges ──▶ viewport::clip ──▶ scan windows
//!                                            │
//! rules ──────────▶ engine::evaluate ── rules × windows ──▶ scanner::scan
//!                                            │
//!                                     classify::bucket ──▶ TieredRanges
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lowlight_core::{evaluate, Pattern, Range, Rule, TextDocument, Tier};
//!
//! let doc = TextDocument::from_text("foo TODO bar\nbaz\nqux FIXME end");
//! let rules = vec![
//!     Rule::fragment(Pattern::new("TODO").unwrap(), Tier::Max),
//!     Rule::fragment(Pattern::new("FIXME").unwrap(), Tier::Min),
//! ];
//!
//! let viewport = [Range::of(0, 0, 2, 0)];
//! let set = evaluate(&doc, &viewport, &rules, 1000);
//!
//! assert_eq!(set.max, vec![Range::of(0, 4, 0, 8)]);
//! assert_eq!(set.min, vec![Range::of(2, 4, 2, 9)]);
//! ```
//!
//! # Module Description
//!
//! - [`pattern`] - compiled fragment patterns (char-offset matching)
//! - [`rules`] - tiers and the fragment/block rule union
//! - [`document`] - the [`ScanSource`] seam and a Rope-backed document
//! - [`viewport`] - ceiling-bounded viewport clipping
//! - [`scanner`] - per-(rule, window) match resolution
//! - [`classify`] - tier bucketing of results
//! - [`engine`] - the [`evaluate`] entry point
//! - [`host`] - host-side lifecycle helpers (decoration ledger, debounce)
//!
//! Configuration parsing (user-facing rule shapes, opacities, the ceiling
//! value) lives in the companion `lowlight-config` crate.

pub mod classify;
pub mod document;
pub mod engine;
pub mod host;
pub mod pattern;
pub mod range;
pub mod rules;
pub mod scanner;
pub mod viewport;

pub use classify::TieredRanges;
pub use document::{LineUnavailable, ScanSource, TextDocument};
pub use engine::evaluate;
pub use host::{Debounce, DecorationLedger, ViewId};
pub use pattern::{Pattern, PatternError, PatternHit};
pub use range::{Position, Range};
pub use rules::{Rule, Tier};
pub use scanner::{RuleMatch, scan};
