//! Segment expansion around an edit
//!
//! A segment is the re-scan window for one edit: it grows the edit range
//! outwards to the nearest space on each side. Only the ASCII space counts
//! as a separator, so tabs and newlines stay inside a segment.

use crate::text::EditRange;

/// The only code unit that delimits segments
pub const SEGMENT_SEPARATOR: u8 = b' ';

/// Expand `range` to the whitespace-delimited segment containing it
///
/// The left edge is just after the nearest space before `range.location`
/// (or the start of the text). The right edge is just after the nearest
/// space at or after the end of `range` (or the end of the text).
///
/// Returns `None` if `range` is out of bounds. A range end that falls inside
/// a multi-byte character is fine: both edges land next to an ASCII space or
/// at a text end, so the segment always sits on character boundaries.
pub fn find_segment(text: &str, range: EditRange) -> Option<EditRange> {
    if !range.checked_end().is_some_and(|end| end <= text.len()) {
        tracing::debug!(
            "Rejecting edit range {} against text of len {}",
            range,
            text.len()
        );
        return None;
    }

    let bytes = text.as_bytes();
    let end = range.end();

    let left = bytes[..range.location]
        .iter()
        .rposition(|&b| b == SEGMENT_SEPARATOR)
        .map_or(0, |i| i + 1);

    let right = bytes[end..]
        .iter()
        .position(|&b| b == SEGMENT_SEPARATOR)
        .map_or(text.len(), |i| end + i + 1);

    Some(EditRange::from_bounds(left..right))
}
