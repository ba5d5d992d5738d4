//! Document access for the scanner.
//!
//! The engine never owns the text it scans; it reads lines through the
//! [`ScanSource`] trait. Hosts adapt their own buffers to it. For in-process
//! use and tests, [`TextDocument`] provides a Rope-backed implementation with
//! O(log n) line access.

use ropey::Rope;

use crate::range::Position;

/// Error returned when a requested line is not (or no longer) present.
///
/// Typically caused by a concurrent edit between viewport capture and scan;
/// the scanner treats it as recoverable and skips the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineUnavailable {
    /// The requested line index.
    pub line: usize,
}

impl std::fmt::Display for LineUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} is not available in the document", self.line)
    }
}

impl std::error::Error for LineUnavailable {}

/// Read-only line access used by the scanner.
///
/// Implementations must not mutate shared state; the engine only ever reads.
pub trait ScanSource {
    /// Total line count of the document.
    fn line_count(&self) -> usize;

    /// Text of the given line, without its trailing line break.
    fn line_text(&self, line: usize) -> Result<String, LineUnavailable>;
}

/// In-memory document backed by a Rope.
///
/// Supports edits so callers (and tests) can exercise the scan path across
/// document changes; the scanner itself only uses the [`ScanSource`] view.
pub struct TextDocument {
    rope: Rope,
}

impl TextDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a document from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Insert text at the given character offset.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Delete a character range.
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        let start_char = start_char.min(self.rope.len_chars());
        let end_char = (start_char + len_chars).min(self.rope.len_chars());
        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
    }

    /// The complete document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Convert a (line, character) position to a flat character offset.
    ///
    /// Out-of-range positions clamp to the document/line end.
    pub fn position_to_char_offset(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(position.line);
        let line_len = if position.line + 1 < self.rope.len_lines() {
            // -1 for the newline.
            self.rope.line_to_char(position.line + 1) - line_start - 1
        } else {
            self.rope.len_chars() - line_start
        };
        line_start + position.character.min(line_len)
    }

    /// Convert a flat character offset to a (line, character) position.
    pub fn char_offset_to_position(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(line);
        Position::new(line, char_offset - line_start)
    }
}

impl ScanSource for TextDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, line: usize) -> Result<String, LineUnavailable> {
        if line >= self.rope.len_lines() {
            return Err(LineUnavailable { line });
        }
        let mut text = self.rope.line(line).to_string();
        // Rope's line() includes the line break.
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Ok(text)
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}
