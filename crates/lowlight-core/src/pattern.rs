//! Compiled fragment patterns.
//!
//! A [`Pattern`] wraps one user-supplied regex and answers "where does it
//! first occur in this line". Matching is always a search, never a full-line
//! match, and offsets are reported in **character offsets** (not byte
//! offsets) so they can be used directly as (line, character) coordinates.
//!
//! Compilation is the only fallible step: a pattern that fails to compile is
//! rejected at configuration time with [`PatternError`], and a scan never
//! fails at match time.

use regex::Regex;

/// A compiled, reusable, stateless pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

/// The first occurrence of a pattern within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternHit {
    /// Start character offset of the match within the line.
    pub offset: usize,
    /// Length of the match in characters.
    pub len: usize,
}

/// Pattern compilation errors.
#[derive(Debug)]
pub enum PatternError {
    /// The provided pattern failed to compile as a regex.
    Invalid {
        /// The offending pattern string.
        pattern: String,
        /// The compiler's error message.
        message: String,
    },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { pattern, message } => {
                write!(f, "invalid pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Compile a pattern from a user-supplied string.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|err| PatternError::Invalid {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// The source string this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the first (lowest start-offset) occurrence in `line`.
    ///
    /// Deterministic: identical `(line, pattern)` pairs always yield
    /// identical results.
    pub fn find_first(&self, line: &str) -> Option<PatternHit> {
        let m = self.regex.find(line)?;
        // regex reports byte offsets; convert to char offsets.
        let offset = line[..m.start()].chars().count();
        let len = line[m.start()..m.end()].chars().count();
        Some(PatternHit { offset, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_returns_lowest_offset() {
        let pattern = Pattern::new("ab+").unwrap();
        let hit = pattern.find_first("xx abb yy ab").unwrap();
        assert_eq!(hit, PatternHit { offset: 3, len: 3 });
    }

    #[test]
    fn test_find_first_none_on_miss() {
        let pattern = Pattern::new("TODO").unwrap();
        assert_eq!(pattern.find_first("nothing here"), None);
    }

    #[test]
    fn test_char_offsets_with_wide_text() {
        let pattern = Pattern::new("世界").unwrap();
        // "你好 世界" - the match starts at char 3, not byte 7.
        let hit = pattern.find_first("你好 世界").unwrap();
        assert_eq!(hit, PatternHit { offset: 3, len: 2 });
    }

    #[test]
    fn test_invalid_pattern_is_a_construction_error() {
        let err = Pattern::new("[unclosed").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("[unclosed"), "got: {message}");
    }

    #[test]
    fn test_search_not_full_line_match() {
        // An anchored-feeling pattern still matches as a fragment.
        let pattern = Pattern::new("fn ").unwrap();
        assert!(pattern.find_first("    fn main() {").is_some());
    }
}
