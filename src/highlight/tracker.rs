//! Pending edit capture for the pre-change phase

use crate::text::EditRange;

/// Records the range believed to have changed across one edit
///
/// Only insertions grow the recorded range. Deletions and same-length
/// replacements collapse to a caret at the edit point; the segment expansion
/// around that caret is what picks up the affected neighbourhood.
#[derive(Debug, Clone, Default)]
pub struct EditTracker {
    pending: Option<EditRange>,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit about to replace `replaced` with `replacement_len`
    /// code units, overwriting any previously recorded edit
    pub fn record_change(&mut self, replaced: EditRange, replacement_len: usize) -> EditRange {
        let range = EditRange::new(
            replaced.location,
            replacement_len.saturating_sub(replaced.length),
        );
        self.pending = Some(range);
        range
    }

    /// The recorded edit, if any
    pub fn pending(&self) -> Option<EditRange> {
        self.pending
    }

    /// Consume the recorded edit, returning the tracker to idle
    pub fn take_pending(&mut self) -> Option<EditRange> {
        self.pending.take()
    }
}
