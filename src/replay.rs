//! Headless host: drives a session the way a text view would
//!
//! Input is replayed as typed text, one pre/post-change pair per character,
//! with each returned snapshot becoming the content for the next keystroke.

use serde::Serialize;

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::session::EditSession;
use crate::text::{EditRange, RangeError, StyledText};
use crate::update::update;

/// A highlighted span, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpan {
    pub range: EditRange,
    pub target: String,
    pub text: String,
}

/// Apply one edit to `current` through the two-phase protocol
pub fn edit(
    session: &mut EditSession,
    current: &StyledText,
    range: EditRange,
    replacement: &str,
) -> Result<StyledText, RangeError> {
    update(
        session,
        SessionMsg::WillChange {
            range,
            replacement_len: replacement.len(),
        },
    );
    let mutated = current.replace_range(range, replacement)?;
    match update(session, SessionMsg::DidChange(mutated.clone())) {
        Some(Cmd::Display(text)) => Ok(text),
        _ => Ok(mutated),
    }
}

/// Type `input` character by character at the end of an empty document
pub fn type_text(session: &mut EditSession, input: &str) -> StyledText {
    let mut current = StyledText::default();
    let mut buf = [0u8; 4];
    for ch in input.chars() {
        let caret = EditRange::caret(current.len());
        // The caret is always the end of the text, so the edit cannot fail
        if let Ok(next) = edit(session, &current, caret, ch.encode_utf8(&mut buf)) {
            current = next;
        }
    }
    current
}

/// Collect the spans of `text` carrying the session's link attribute
pub fn link_spans(text: &StyledText, link_key: &str) -> Vec<LinkSpan> {
    text.spans(link_key)
        .into_iter()
        .map(|(range, target)| LinkSpan {
            text: text.as_str()[range.clone()].to_string(),
            range: range.into(),
            target: target.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HighlightConfig;

    #[test]
    fn test_typed_email_is_highlighted() {
        let mut session = EditSession::new(HighlightConfig::default(), |_| {});
        let text = type_text(&mut session, "write to a@b.com");
        let spans = link_spans(&text, "link");

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "a@b.com");
        assert_eq!(spans[0].target, "mailto:a@b.com");
        assert_eq!(spans[0].range, EditRange::new(9, 7));
    }

    #[test]
    fn test_typed_multibyte_text_round_trips() {
        let mut session = EditSession::new(HighlightConfig::default(), |_| {});
        let text = type_text(&mut session, "héllo wörld ✓");
        assert_eq!(text.as_str(), "héllo wörld ✓");
    }

    #[test]
    fn test_edit_rejects_out_of_bounds() {
        let mut session = EditSession::new(HighlightConfig::default(), |_| {});
        let current = StyledText::new("abc");
        assert!(edit(&mut session, &current, EditRange::new(2, 5), "x").is_err());
    }
}
