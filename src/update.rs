//! Update function for the Elm-style host protocol

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::session::EditSession;

#[cfg(debug_assertions)]
use tracing::{span, Level};

/// Dispatch a message to the session
///
/// In debug builds, this wraps the dispatch in a tracing span.
#[inline]
pub fn update(session: &mut EditSession, msg: SessionMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        let _span = span!(Level::DEBUG, "update", msg = msg_type_name(&msg)).entered();
        update_inner(session, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(session, msg)
    }
}

fn update_inner(session: &mut EditSession, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::WillChange {
            range,
            replacement_len,
        } => {
            session.will_change(range, replacement_len);
            None
        }
        SessionMsg::DidChange(text) => session.did_change(&text).map(Cmd::Display),
        SessionMsg::Interact { text, range, uri } => {
            if session.interact(&text, range, &uri) {
                None
            } else {
                Some(Cmd::SuppressDefault)
            }
        }
    }
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &SessionMsg) -> &'static str {
    match msg {
        SessionMsg::WillChange { .. } => "WillChange",
        SessionMsg::DidChange(_) => "DidChange",
        SessionMsg::Interact { .. } => "Interact",
    }
}
