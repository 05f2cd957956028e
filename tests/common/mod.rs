//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use textmark::highlight::find_segment;
use textmark::text::Attributes;
use textmark::{EditRange, EditSession, HighlightConfig, StyledText};

/// Create a session with the default config and a no-op link callback
pub fn test_session() -> EditSession {
    EditSession::new(HighlightConfig::default(), |_| {})
}

/// Create a session that records every URI passed to the link callback
pub fn recording_session() -> (EditSession, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let session = EditSession::new(HighlightConfig::default(), move |uri| {
        sink.borrow_mut().push(uri.to_string());
    });
    (session, calls)
}

/// Build attributes from key/value pairs
pub fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Run one full pre/post-change cycle directly against the session
///
/// Returns the mutated text the host would hold and the session's output.
pub fn run_edit(
    session: &mut EditSession,
    current: &StyledText,
    range: EditRange,
    replacement: &str,
) -> (StyledText, Option<StyledText>) {
    session.will_change(range, replacement.len());
    let mutated = current
        .replace_range(range, replacement)
        .expect("edit range valid for test text");
    let output = session.did_change(&mutated);
    (mutated, output)
}

/// The segment the session rescans for an edit of `range` by `replacement_len`
pub fn expected_segment(
    mutated: &StyledText,
    range: EditRange,
    replacement_len: usize,
) -> Option<EditRange> {
    let pending = EditRange::new(
        range.location,
        replacement_len.saturating_sub(range.length),
    );
    find_segment(mutated.as_str(), pending)
}

/// Assert every code unit outside `segment` kept its attributes
pub fn assert_unchanged_outside(before: &StyledText, after: &StyledText, segment: EditRange) {
    assert_eq!(before.as_str(), after.as_str(), "characters changed");
    for offset in (0..before.len()).filter(|o| !segment.as_range().contains(o)) {
        assert_eq!(
            before.attributes_at(offset),
            after.attributes_at(offset),
            "attributes changed at {} outside segment {}",
            offset,
            segment
        );
    }
}
