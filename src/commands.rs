//! Command types for the Elm-style host protocol
//!
//! Commands are what the host must do after a message was processed.

use crate::text::StyledText;

/// Host-side effect requested by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Replace the displayed content with this snapshot (attributes only
    /// differ, characters are identical to the ones the host sent)
    Display(StyledText),
    /// Do not perform the default action for the interaction just reported
    SuppressDefault,
}
