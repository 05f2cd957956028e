//! Edit session: the two-phase edit protocol
//!
//! The host calls [`EditSession::will_change`] before it mutates its text
//! and [`EditSession::did_change`] with the mutated snapshot afterwards.
//! Calls must alternate; a second `will_change` before `did_change` simply
//! replaces the pending edit.

use crate::config::HighlightConfig;
use crate::highlight::{apply, find_segment, EditTracker, PatternMatcher};
use crate::text::{EditRange, StyledText};

/// Callback invoked with the target of an interacted link
pub type LinkCallback = Box<dyn FnMut(&str)>;

/// Orchestrates tracking, segmenting, detection and attribute merging for
/// one editing surface
pub struct EditSession {
    config: HighlightConfig,
    tracker: EditTracker,
    matcher: PatternMatcher,
    on_link_interaction: LinkCallback,
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl EditSession {
    /// Create a session with `on_link_interaction` called for link interactions
    pub fn new(config: HighlightConfig, on_link_interaction: impl FnMut(&str) + 'static) -> Self {
        let matcher = PatternMatcher::new(&config);
        Self {
            config,
            tracker: EditTracker::new(),
            matcher,
            on_link_interaction: Box::new(on_link_interaction),
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Whether an edit is waiting for its post-change notification
    pub fn has_pending(&self) -> bool {
        self.tracker.pending().is_some()
    }

    /// Pre-change: `range` is about to be replaced by `replacement_len` code units
    pub fn will_change(&mut self, range: EditRange, replacement_len: usize) {
        let pending = self.tracker.record_change(range, replacement_len);
        tracing::debug!(
            "will_change: replacing {} with {} units, pending {}",
            range,
            replacement_len,
            pending
        );
    }

    /// Post-change: rescan around the pending edit in `text`
    ///
    /// Returns the snapshot the host should display, or `None` when there is
    /// nothing to do (no pending edit, or the edit no longer fits `text`).
    pub fn did_change(&mut self, text: &StyledText) -> Option<StyledText> {
        let Some(pending) = self.tracker.take_pending() else {
            tracing::debug!("did_change without pending edit, ignoring");
            return None;
        };

        let Some(segment) = find_segment(text.as_str(), pending) else {
            tracing::debug!(
                "Pending edit {} invalid for text of len {}, skipping rescan",
                pending,
                text.len()
            );
            return None;
        };

        Some(self.rescan(text, segment))
    }

    /// Highlight the whole of `text`, e.g. after loading a document
    ///
    /// Any pending edit is left in place.
    pub fn highlight_all(&self, text: &StyledText) -> StyledText {
        self.rescan(text, text.full_range())
    }

    /// Report an interaction on `range` whose target is `uri`
    ///
    /// If `range` carries a link, forwards `uri` to the link callback and
    /// returns `false`: the host must not perform its default action. For
    /// anything else returns `true` and the callback is not called.
    pub fn interact(&mut self, text: &StyledText, range: EditRange, uri: &str) -> bool {
        if text.check_range(range).is_err() || !text.has_attribute_in(range, &self.config.link_key)
        {
            tracing::debug!("Interaction at {} is not on a link", range);
            return true;
        }

        tracing::debug!("Forwarding link interaction at {}: {}", range, uri);
        (self.on_link_interaction)(uri);
        false
    }

    fn rescan(&self, text: &StyledText, segment: EditRange) -> StyledText {
        let reset = self.matcher.reset(segment);
        let matches = self.matcher.detect(text.as_str(), segment);
        tracing::debug!("Rescanned {}: {} matches", segment, matches.len());
        apply(text, segment, &reset, &matches)
    }
}
