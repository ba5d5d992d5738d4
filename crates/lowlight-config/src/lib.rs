#![warn(missing_docs)]
//! `lowlight-config` - Settings layer for the lowlight engine.
//!
//! Parses the host's persisted settings (JSON) into engine inputs: the
//! compiled, ordered rule list, the per-tier opacity values for the renderer,
//! and the scan ceiling.
//!
//! Three rule shapes are accepted:
//!
//! - a bare pattern string: a fragment rule at the default tier;
//! - a two-element string array `[start, end]`: a block rule at the default
//!   tier;
//! - an object with `rule` *or* `startRule` + `endRule`, and optional `tier`,
//!   `maxLinesBetween`, `sameScope` overrides.
//!
//! Shape dispatch happens once, at parse time; the engine only ever sees the
//! compiled [`Rule`] union. Entries that match no shape, or whose pattern
//! fails to compile, are dropped with one warning each and the remaining
//! rules proceed; there is no fatal per-entry error.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use lowlight_core::{Pattern, PatternError, Rule, Tier};

/// Line bound applied when `sameScope: true` is given without an explicit
/// `maxLinesBetween`. Scope here means textual line proximity only.
pub const SAME_SCOPE_LINE_BOUND: usize = 100;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings document is not valid JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule entry matched none of the recognized shapes.
    #[error("unrecognized rule shape: {0}")]
    Shape(String),

    /// A rule entry's pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// A tier name as written in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierName {
    /// Strongest de-emphasis.
    Max,
    /// Intermediate de-emphasis.
    Mid,
    /// Weakest de-emphasis.
    Min,
}

impl From<TierName> for Tier {
    fn from(name: TierName) -> Self {
        match name {
            TierName::Max => Tier::Max,
            TierName::Mid => Tier::Mid,
            TierName::Min => Tier::Min,
        }
    }
}

/// Per-tier opacity values for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierOpacities {
    /// Opacity applied to [`Tier::Max`] ranges.
    pub max: f32,
    /// Opacity applied to [`Tier::Mid`] ranges.
    pub mid: f32,
    /// Opacity applied to [`Tier::Min`] ranges.
    pub min: f32,
}

impl TierOpacities {
    /// The opacity for one tier.
    pub fn for_tier(&self, tier: Tier) -> f32 {
        match tier {
            Tier::Max => self.max,
            Tier::Mid => self.mid,
            Tier::Min => self.min,
        }
    }
}

/// One rule entry as found in persisted settings.
///
/// Deserialization is total: an entry that matches no recognized shape
/// becomes [`RawRule::Invalid`] instead of failing the whole settings load,
/// and is dropped (with a warning) during [`Settings::compile`].
#[derive(Debug, Clone)]
pub enum RawRule {
    /// Bare pattern string.
    Pattern(String),
    /// `[start, end]` pattern pair.
    PatternPair(String, String),
    /// Object form with explicit overrides.
    Detailed(DetailedRule),
    /// An entry that matched no recognized shape; the payload says why.
    Invalid(String),
}

/// The object form of a rule entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRule {
    /// Fragment pattern; mutually exclusive with `start_rule`/`end_rule`.
    #[serde(default)]
    pub rule: Option<String>,

    /// Block start pattern; requires `end_rule`.
    #[serde(default)]
    pub start_rule: Option<String>,

    /// Block end pattern; requires `start_rule`.
    #[serde(default)]
    pub end_rule: Option<String>,

    /// Tier override; defaults to the settings-level tier.
    #[serde(default)]
    pub tier: Option<TierName>,

    /// Maximum line distance between a block's start and end match.
    #[serde(default)]
    pub max_lines_between: Option<usize>,

    /// Alias constraint: bounds a block to [`SAME_SCOPE_LINE_BOUND`] lines
    /// unless `max_lines_between` is set explicitly.
    #[serde(default)]
    pub same_scope: Option<bool>,
}

impl<'de> Deserialize<'de> for RawRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        match value {
            Value::String(pattern) => Ok(Self::Pattern(pattern)),

            Value::Array(items) => {
                let mut patterns = items.iter().map(Value::as_str);
                match (patterns.next(), patterns.next(), items.len()) {
                    (Some(Some(start)), Some(Some(end)), 2) => {
                        Ok(Self::PatternPair(start.to_string(), end.to_string()))
                    }
                    _ => Ok(Self::Invalid(
                        "array form must be exactly two pattern strings".to_string(),
                    )),
                }
            }

            Value::Object(_) => match serde_json::from_value::<DetailedRule>(value) {
                Ok(detailed) => Ok(Self::Detailed(detailed)),
                Err(err) => Ok(Self::Invalid(err.to_string())),
            },

            other => Ok(Self::Invalid(format!(
                "rule entries must be a string, a two-element array, or an object, got {other}"
            ))),
        }
    }
}

/// Persisted lowlight settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The ordered rule entries.
    #[serde(default)]
    pub rules: Vec<RawRule>,

    /// Default tier for rules without an explicit one.
    #[serde(default = "default_tier")]
    pub tier: TierName,

    /// Opacity for [`Tier::Max`] ranges.
    #[serde(default = "default_max_opacity")]
    pub max_opacity: f32,

    /// Opacity for [`Tier::Mid`] ranges.
    #[serde(default = "default_mid_opacity")]
    pub mid_opacity: f32,

    /// Opacity for [`Tier::Min`] ranges.
    #[serde(default = "default_min_opacity")]
    pub min_opacity: f32,

    /// The scan ceiling: the highest line index the engine will ever scan.
    #[serde(default = "default_max_number_of_lines_to_scan")]
    pub max_number_of_lines_to_scan: usize,
}

fn default_tier() -> TierName {
    TierName::Mid
}

fn default_max_opacity() -> f32 {
    0.3
}

fn default_mid_opacity() -> f32 {
    0.5
}

fn default_min_opacity() -> f32 {
    0.7
}

fn default_max_number_of_lines_to_scan() -> usize {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            tier: default_tier(),
            max_opacity: default_max_opacity(),
            mid_opacity: default_mid_opacity(),
            min_opacity: default_min_opacity(),
            max_number_of_lines_to_scan: default_max_number_of_lines_to_scan(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The per-tier opacity values for the renderer.
    pub fn opacities(&self) -> TierOpacities {
        TierOpacities {
            max: self.max_opacity,
            mid: self.mid_opacity,
            min: self.min_opacity,
        }
    }

    /// Compile the raw entries into engine rules, in order.
    ///
    /// Entries that fail shape validation or pattern compilation are dropped
    /// with one warning each; the remaining rules are returned.
    pub fn compile(&self) -> Vec<Rule> {
        let default_tier = Tier::from(self.tier);
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match compile_entry(raw, default_tier) {
                Ok(rule) => Some(rule),
                Err(error) => {
                    warn!(index, %error, "dropping rule entry");
                    None
                }
            })
            .collect()
    }
}

fn compile_entry(raw: &RawRule, default_tier: Tier) -> Result<Rule, ConfigError> {
    match raw {
        RawRule::Pattern(pattern) => Ok(Rule::fragment(Pattern::new(pattern)?, default_tier)),

        RawRule::PatternPair(start, end) => Ok(Rule::block(
            Pattern::new(start)?,
            Pattern::new(end)?,
            default_tier,
            None,
        )),

        RawRule::Detailed(detailed) => {
            let tier = detailed.tier.map(Tier::from).unwrap_or(default_tier);
            match (&detailed.rule, &detailed.start_rule, &detailed.end_rule) {
                (Some(pattern), None, None) => Ok(Rule::fragment(Pattern::new(pattern)?, tier)),

                (None, Some(start), Some(end)) => {
                    let max_lines_between = match (detailed.max_lines_between, detailed.same_scope)
                    {
                        (Some(max), _) => Some(max),
                        (None, Some(true)) => Some(SAME_SCOPE_LINE_BOUND),
                        _ => None,
                    };
                    Ok(Rule::block(
                        Pattern::new(start)?,
                        Pattern::new(end)?,
                        tier,
                        max_lines_between,
                    ))
                }

                _ => Err(ConfigError::Shape(
                    "exactly one of `rule` or `startRule`+`endRule` is required".to_string(),
                )),
            }
        }

        RawRule::Invalid(reason) => Err(ConfigError::Shape(reason.clone())),
    }
}
