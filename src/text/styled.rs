//! Immutable styled text snapshots
//!
//! A [`StyledText`] pairs a string with attribute runs. Runs are contiguous,
//! never overlap, cover the whole text, and adjacent runs with equal
//! attributes are always merged, so two snapshots that style every code unit
//! the same way compare equal.

use std::collections::BTreeMap;
use std::ops::Range;

use super::range::EditRange;

/// Attribute key → value for one run of text
pub type Attributes = BTreeMap<String, String>;

/// A maximal span of text sharing the same attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Byte range covered by this run
    pub range: Range<usize>,
    pub attributes: Attributes,
}

/// Errors from operations that index a snapshot with a caller-supplied range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Range extends past the end of the text
    OutOfBounds { range: EditRange, len: usize },
    /// Range starts or ends inside a multi-byte character
    NotOnCharBoundary { range: EditRange, index: usize },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { range, len } => {
                write!(f, "range {} out of bounds for text of len {}", range, len)
            }
            Self::NotOnCharBoundary { range, index } => {
                write!(f, "range {} splits a character at index {}", range, index)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Character content plus per-range style attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    runs: Vec<Run>,
}

impl StyledText {
    /// Create an unstyled snapshot
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes(text, Attributes::new())
    }

    /// Create a snapshot with `attributes` applied to the whole text
    pub fn with_attributes(text: impl Into<String>, attributes: Attributes) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                range: 0..text.len(),
                attributes,
            }]
        };
        Self { text, runs }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code units (bytes)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Attribute runs in text order
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Range covering the whole text
    pub fn full_range(&self) -> EditRange {
        EditRange::new(0, self.text.len())
    }

    /// Validate `range` against this snapshot
    pub fn check_range(&self, range: EditRange) -> Result<(), RangeError> {
        let end = match range.checked_end() {
            Some(end) if end <= self.text.len() => end,
            _ => {
                return Err(RangeError::OutOfBounds {
                    range,
                    len: self.text.len(),
                })
            }
        };
        for index in [range.location, end] {
            if !self.text.is_char_boundary(index) {
                return Err(RangeError::NotOnCharBoundary { range, index });
            }
        }
        Ok(())
    }

    /// Attributes of the code unit at `offset`, `None` past the end
    pub fn attributes_at(&self, offset: usize) -> Option<&Attributes> {
        self.run_index_at(offset).map(|i| &self.runs[i].attributes)
    }

    /// Value of `key` at `offset`
    pub fn attribute_at(&self, offset: usize, key: &str) -> Option<&str> {
        self.attributes_at(offset)
            .and_then(|attrs| attrs.get(key))
            .map(String::as_str)
    }

    /// Whether any code unit in `range` carries `key`
    ///
    /// A caret has no code units of its own, so it tests the code unit it
    /// sits in front of.
    pub fn has_attribute_in(&self, range: EditRange, key: &str) -> bool {
        if range.is_empty() {
            return self.attribute_at(range.location, key).is_some();
        }
        let range = range.as_range();
        self.runs
            .iter()
            .filter(|run| run.range.start < range.end && run.range.end > range.start)
            .any(|run| run.attributes.contains_key(key))
    }

    /// Maximal spans carrying `key`, with the value they carry
    ///
    /// Neighbouring runs with the same value for `key` are reported as one
    /// span even if they differ in other attributes.
    pub fn spans(&self, key: &str) -> Vec<(Range<usize>, &str)> {
        let mut spans: Vec<(Range<usize>, &str)> = Vec::new();
        for run in &self.runs {
            let Some(value) = run.attributes.get(key) else {
                continue;
            };
            match spans.last_mut() {
                Some((range, last)) if range.end == run.range.start && *last == value.as_str() => {
                    range.end = run.range.end;
                }
                _ => spans.push((run.range.clone(), value.as_str())),
            }
        }
        spans
    }

    /// Set `key = value` over `range`
    pub fn set_attribute(
        &mut self,
        range: EditRange,
        key: &str,
        value: &str,
    ) -> Result<(), RangeError> {
        self.check_range(range)?;
        self.update_range(range.as_range(), |attrs| {
            attrs.insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    /// Remove `key` from every run overlapping `range`, within `range`
    pub fn remove_attribute(&mut self, range: EditRange, key: &str) -> Result<(), RangeError> {
        self.check_range(range)?;
        self.update_range(range.as_range(), |attrs| {
            attrs.remove(key);
        });
        Ok(())
    }

    /// Return a new snapshot with `range` replaced by `replacement`
    ///
    /// Attributes of the replaced span are dropped. Inserted text takes the
    /// attributes of the character before the edit point, or of the first
    /// replaced character when editing at the very start.
    pub fn replace_range(&self, range: EditRange, replacement: &str) -> Result<Self, RangeError> {
        self.check_range(range)?;
        let start = range.location;
        let end = range.end();

        let inherited = if start > 0 {
            self.attributes_at(start - 1).cloned()
        } else {
            self.attributes_at(start).cloned()
        }
        .unwrap_or_default();

        let mut text = String::with_capacity(self.text.len() - range.length + replacement.len());
        text.push_str(&self.text[..start]);
        text.push_str(replacement);
        text.push_str(&self.text[end..]);

        let inserted_end = start + replacement.len();
        let mut runs = Vec::with_capacity(self.runs.len() + 1);
        for run in &self.runs {
            if run.range.start < start {
                runs.push(Run {
                    range: run.range.start..run.range.end.min(start),
                    attributes: run.attributes.clone(),
                });
            }
        }
        if !replacement.is_empty() {
            runs.push(Run {
                range: start..inserted_end,
                attributes: inherited,
            });
        }
        for run in &self.runs {
            if run.range.end > end {
                let from = run.range.start.max(end);
                runs.push(Run {
                    range: (from - end + inserted_end)..(run.range.end - end + inserted_end),
                    attributes: run.attributes.clone(),
                });
            }
        }

        let mut result = Self { text, runs };
        result.coalesce();
        Ok(result)
    }

    /// Apply `f` to the attributes of every code unit in `range`
    ///
    /// `range` must already be valid for this text.
    pub(crate) fn update_range(&mut self, range: Range<usize>, mut f: impl FnMut(&mut Attributes)) {
        debug_assert!(range.end <= self.text.len(), "range past end of text");
        if range.start >= range.end {
            return;
        }
        self.split_at(range.start);
        self.split_at(range.end);
        for run in &mut self.runs {
            if run.range.start >= range.start && run.range.end <= range.end {
                f(&mut run.attributes);
            }
        }
        self.coalesce();
    }

    fn run_index_at(&self, offset: usize) -> Option<usize> {
        if offset >= self.text.len() {
            return None;
        }
        let index = self.runs.partition_point(|run| run.range.end <= offset);
        (index < self.runs.len()).then_some(index)
    }

    /// Make `offset` a run boundary
    fn split_at(&mut self, offset: usize) {
        let Some(index) = self.run_index_at(offset) else {
            return;
        };
        let run = &mut self.runs[index];
        if run.range.start == offset {
            return;
        }
        let tail = Run {
            range: offset..run.range.end,
            attributes: run.attributes.clone(),
        };
        run.range.end = offset;
        self.runs.insert(index + 1, tail);
    }

    fn coalesce(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.range.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.attributes == run.attributes => last.range.end = run.range.end,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        let text = StyledText::new("");
        assert!(text.runs().is_empty());
        assert_eq!(text.attributes_at(0), None);
    }

    #[test]
    fn test_set_attribute_splits_runs() {
        let mut text = StyledText::new("hello world");
        text.set_attribute(EditRange::new(6, 5), "link", "x").unwrap();

        assert_eq!(text.runs().len(), 2);
        assert_eq!(text.attribute_at(5, "link"), None);
        assert_eq!(text.attribute_at(6, "link"), Some("x"));
        assert_eq!(text.attribute_at(10, "link"), Some("x"));
    }

    #[test]
    fn test_remove_attribute_recoalesces() {
        let mut text = StyledText::new("hello world");
        text.set_attribute(EditRange::new(2, 3), "link", "x").unwrap();
        text.remove_attribute(EditRange::new(0, 11), "link").unwrap();

        assert_eq!(text, StyledText::new("hello world"));
    }

    #[test]
    fn test_set_attribute_rejects_bad_ranges() {
        let mut text = StyledText::new("éclair");
        assert!(matches!(
            text.set_attribute(EditRange::new(1, 1), "k", "v"),
            Err(RangeError::NotOnCharBoundary { index: 1, .. })
        ));
        assert!(matches!(
            text.set_attribute(EditRange::new(5, 10), "k", "v"),
            Err(RangeError::OutOfBounds { len: 7, .. })
        ));
    }

    #[test]
    fn test_spans_merge_neighbouring_runs_with_same_value() {
        let mut text = StyledText::new("abcdef");
        text.set_attribute(EditRange::new(0, 4), "link", "x").unwrap();
        text.set_attribute(EditRange::new(2, 4), "color", "red").unwrap();

        assert_eq!(text.runs().len(), 3);
        assert_eq!(text.spans("link"), vec![(0..4, "x")]);
        assert_eq!(text.spans("color"), vec![(2..6, "red")]);
    }

    #[test]
    fn test_has_attribute_in() {
        let mut text = StyledText::new("abc def");
        text.set_attribute(EditRange::new(4, 3), "link", "x").unwrap();
        assert!(text.has_attribute_in(EditRange::new(3, 2), "link"));
        assert!(!text.has_attribute_in(EditRange::new(0, 4), "link"));
    }

    #[test]
    fn test_has_attribute_in_caret_tests_following_code_unit() {
        let mut text = StyledText::new("abc def");
        text.set_attribute(EditRange::new(4, 3), "link", "x").unwrap();
        assert!(!text.has_attribute_in(EditRange::caret(3), "link"));
        assert!(text.has_attribute_in(EditRange::caret(4), "link"));
        assert!(text.has_attribute_in(EditRange::caret(5), "link"));
        assert!(!text.has_attribute_in(EditRange::caret(7), "link"));
    }

    #[test]
    fn test_replace_range_insert_inherits_previous_attributes() {
        let text = StyledText::with_attributes("ab", attrs(&[("font", "mono")]));
        let edited = text.replace_range(EditRange::caret(2), "cd").unwrap();

        assert_eq!(edited.as_str(), "abcd");
        assert_eq!(edited.runs().len(), 1);
        assert_eq!(edited.attribute_at(3, "font"), Some("mono"));
    }

    #[test]
    fn test_replace_range_at_start_inherits_following_attributes() {
        let mut text = StyledText::new("world");
        text.set_attribute(EditRange::new(0, 5), "color", "red").unwrap();
        let edited = text.replace_range(EditRange::caret(0), "hi ").unwrap();

        assert_eq!(edited.as_str(), "hi world");
        assert_eq!(edited.attribute_at(0, "color"), Some("red"));
    }

    #[test]
    fn test_replace_range_shifts_trailing_runs() {
        let mut text = StyledText::new("one two three");
        text.set_attribute(EditRange::new(8, 5), "link", "t").unwrap();
        let edited = text.replace_range(EditRange::new(4, 3), "2").unwrap();

        assert_eq!(edited.as_str(), "one 2 three");
        assert_eq!(edited.spans("link"), vec![(6..11, "t")]);
    }

    #[test]
    fn test_replace_range_deletion() {
        let text = StyledText::new("hello world");
        let edited = text.replace_range(EditRange::new(5, 1), "").unwrap();
        assert_eq!(edited.as_str(), "helloworld");
        assert_eq!(edited.runs().len(), 1);
        assert_eq!(edited.runs()[0].range, 0..10);
    }

    #[test]
    fn test_replace_range_out_of_bounds() {
        let text = StyledText::new("abc");
        assert!(text.replace_range(EditRange::new(2, 5), "x").is_err());
    }
}
