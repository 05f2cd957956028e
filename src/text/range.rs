//! Location/length ranges into a styled text snapshot.

use std::ops::Range;

use serde::Serialize;

/// A span of text in code-unit (UTF-8 byte) offsets.
///
/// An `EditRange` is only meaningful against the snapshot it was computed
/// for; use [`EditRange::is_valid_in`] before indexing a different snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EditRange {
    /// Offset of the first code unit
    pub location: usize,
    /// Number of code units covered
    pub length: usize,
}

impl EditRange {
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Zero-length range at `location`
    pub const fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Range covering `range.start..range.end`
    pub fn from_bounds(range: Range<usize>) -> Self {
        Self {
            location: range.start,
            length: range.end.saturating_sub(range.start),
        }
    }

    /// Exclusive end offset, or `None` if it would overflow
    pub fn checked_end(&self) -> Option<usize> {
        self.location.checked_add(self.length)
    }

    /// Exclusive end offset. Saturates on overflow.
    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.location..self.end()
    }

    /// Whether `other` lies entirely within this range
    pub fn contains_range(&self, other: &EditRange) -> bool {
        other.location >= self.location && other.end() <= self.end()
    }

    /// Whether this range can index `text`: in bounds and on char boundaries.
    pub fn is_valid_in(&self, text: &str) -> bool {
        match self.checked_end() {
            Some(end) => {
                end <= text.len()
                    && text.is_char_boundary(self.location)
                    && text.is_char_boundary(end)
            }
            None => false,
        }
    }
}

impl From<Range<usize>> for EditRange {
    fn from(range: Range<usize>) -> Self {
        Self::from_bounds(range)
    }
}

impl std::fmt::Display for EditRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.location, self.end())
    }
}
