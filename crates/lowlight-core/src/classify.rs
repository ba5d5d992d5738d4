//! Tier bucketing of resolved matches.

use crate::range::Range;
use crate::rules::Tier;
use crate::scanner::RuleMatch;

/// Ranges to de-emphasize, grouped by tier.
///
/// Within a tier, ranges keep discovery order (rule order, then window order,
/// then in-line match order). No deduplication happens here: a position may
/// appear in several tiers, or twice in one, when independent rules matched
/// it; the renderer decides precedence (typically last applied wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieredRanges {
    /// Ranges at [`Tier::Max`].
    pub max: Vec<Range>,
    /// Ranges at [`Tier::Mid`].
    pub mid: Vec<Range>,
    /// Ranges at [`Tier::Min`].
    pub min: Vec<Range>,
}

impl TieredRanges {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one resolved match into its tier's queue.
    pub fn push(&mut self, result: RuleMatch) {
        match result.tier {
            Tier::Max => self.max.push(result.range),
            Tier::Mid => self.mid.push(result.range),
            Tier::Min => self.min.push(result.range),
        }
    }

    /// The ordered ranges for one tier.
    pub fn ranges(&self, tier: Tier) -> &[Range] {
        match tier {
            Tier::Max => &self.max,
            Tier::Mid => &self.mid,
            Tier::Min => &self.min,
        }
    }

    /// Total range count across all tiers.
    pub fn len(&self) -> usize {
        self.max.len() + self.mid.len() + self.min.len()
    }

    /// Returns `true` when every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bucket results by tier, preserving input order.
pub fn bucket(results: impl IntoIterator<Item = RuleMatch>) -> TieredRanges {
    let mut out = TieredRanges::new();
    for result in results {
        out.push(result);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(line: usize, tier: Tier) -> RuleMatch {
        RuleMatch {
            range: Range::of(line, 0, line, 1),
            tier,
        }
    }

    #[test]
    fn test_bucket_preserves_order_within_tier() {
        let set = bucket(vec![m(5, Tier::Min), m(1, Tier::Min), m(3, Tier::Max)]);
        assert_eq!(set.ranges(Tier::Min), &[Range::of(5, 0, 5, 1), Range::of(1, 0, 1, 1)]);
        assert_eq!(set.ranges(Tier::Max), &[Range::of(3, 0, 3, 1)]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_no_deduplication() {
        let set = bucket(vec![m(2, Tier::Mid), m(2, Tier::Mid)]);
        assert_eq!(set.mid.len(), 2);
    }

    #[test]
    fn test_empty() {
        let set = bucket(Vec::new());
        assert!(set.is_empty());
        for tier in Tier::ALL {
            assert!(set.ranges(tier).is_empty());
        }
    }
}
