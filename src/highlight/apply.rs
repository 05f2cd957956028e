//! Merging detector output into a new snapshot

use super::detect::{MatchResult, Reset};
use crate::text::{EditRange, StyledText};

/// Produce a new snapshot with `reset` and `matches` applied inside `segment`
///
/// Matches are written in order, so the last write wins where ranges
/// overlap. Characters are never touched, and neither is anything outside
/// `segment`: a match or reset that reaches past it is dropped.
pub fn apply(
    text: &StyledText,
    segment: EditRange,
    reset: &Reset,
    matches: &[MatchResult],
) -> StyledText {
    let mut output = text.clone();
    if text.check_range(segment).is_err() {
        tracing::debug!("Segment {} invalid for text of len {}", segment, text.len());
        return output;
    }

    if segment.contains_range(&reset.segment) {
        let (set_key, set_value) = &reset.set;
        output.update_range(reset.segment.as_range(), |attrs| {
            attrs.insert(set_key.clone(), set_value.clone());
            attrs.remove(&reset.clear);
        });
    } else {
        tracing::debug!(
            "Ignoring reset over {} outside segment {}",
            reset.segment,
            segment
        );
    }

    for result in matches {
        if !segment.contains_range(&result.range) || text.check_range(result.range).is_err() {
            tracing::debug!(
                "Ignoring {} match at {} outside segment {}",
                result.kind.name(),
                result.range,
                segment
            );
            continue;
        }
        output.update_range(result.range.as_range(), |attrs| {
            for (key, value) in &result.attributes {
                attrs.insert(key.clone(), value.clone());
            }
        });
    }

    output
}
