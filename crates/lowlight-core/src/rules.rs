//! Dimming rules and intensity tiers.
//!
//! A [`Rule`] is an explicit tagged union: the fragment/block decision is made
//! once, when the configuration layer compiles user entries, and never
//! re-inspected structurally during scanning.

use crate::pattern::Pattern;

/// Dimming intensity applied to a matched range.
///
/// Tiers are totally ordered from strongest to weakest de-emphasis, which
/// gives bucket assignment a deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Strongest de-emphasis (lowest opacity).
    Max,
    /// Intermediate de-emphasis.
    Mid,
    /// Weakest de-emphasis.
    Min,
}

impl Tier {
    /// All tiers in bucket order.
    pub const ALL: [Tier; 3] = [Tier::Max, Tier::Mid, Tier::Min];
}

/// A compiled dimming rule.
///
/// Rules are constructed once per configuration load and are immutable
/// thereafter; scanning shares them freely across windows.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A single-line pattern; its first occurrence per window becomes one
    /// output range confined to that line.
    Fragment {
        /// The pattern to search for.
        pattern: Pattern,
        /// The tier to tag matches with.
        tier: Tier,
    },
    /// A start/end-delimited pattern pair; a match spans from the start hit
    /// to the first qualifying end hit on a strictly later line.
    Block {
        /// The opening delimiter pattern.
        start: Pattern,
        /// The closing delimiter pattern.
        end: Pattern,
        /// The tier to tag matches with.
        tier: Tier,
        /// Maximum allowed line distance between start and end match; an
        /// otherwise-valid end further away rejects the whole match.
        max_lines_between: Option<usize>,
    },
}

impl Rule {
    /// A fragment rule.
    pub fn fragment(pattern: Pattern, tier: Tier) -> Self {
        Self::Fragment { pattern, tier }
    }

    /// A block rule, optionally bounded by `max_lines_between`.
    pub fn block(
        start: Pattern,
        end: Pattern,
        tier: Tier,
        max_lines_between: Option<usize>,
    ) -> Self {
        Self::Block {
            start,
            end,
            tier,
            max_lines_between,
        }
    }

    /// The tier this rule tags its matches with.
    pub fn tier(&self) -> Tier {
        match self {
            Self::Fragment { tier, .. } | Self::Block { tier, .. } => *tier,
        }
    }
}
