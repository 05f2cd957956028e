//! Message types for the Elm-style host protocol
//!
//! Hosts with an event loop can drive an [`EditSession`](crate::session::EditSession)
//! by feeding it these messages through [`update`](crate::update::update).

use crate::text::{EditRange, StyledText};

/// Notifications a host sends to its edit session
#[derive(Debug, Clone)]
pub enum SessionMsg {
    /// `range` is about to be replaced by `replacement_len` code units
    WillChange {
        range: EditRange,
        replacement_len: usize,
    },
    /// The mutation was applied; carries the full current text
    DidChange(StyledText),
    /// The user activated `range`, whose target is `uri`
    Interact {
        text: StyledText,
        range: EditRange,
        uri: String,
    },
}

// Convenience constructors for common messages
impl SessionMsg {
    /// Pre-change message for inserting `text` at `offset`
    pub fn insert(offset: usize, text: &str) -> Self {
        SessionMsg::WillChange {
            range: EditRange::caret(offset),
            replacement_len: text.len(),
        }
    }

    /// Pre-change message for deleting `range`
    pub fn delete(range: EditRange) -> Self {
        SessionMsg::WillChange {
            range,
            replacement_len: 0,
        }
    }
}
