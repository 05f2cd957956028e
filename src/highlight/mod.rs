//! Incremental re-annotation engine
//!
//! ## Pipeline
//!
//! ```text
//! will_change → EditTracker::record_change     (pending edit range)
//! did_change  → find_segment                   (space-delimited window)
//!             → PatternMatcher::reset/detect   (email, phone, link)
//!             → apply                          (new StyledText)
//! ```
//!
//! Every stage takes a snapshot by reference and returns a new value, so a
//! failure at any stage leaves the host's current snapshot as it was.

mod apply;
mod boundary;
mod detect;
mod tracker;

pub use apply::apply;
pub use boundary::{find_segment, SEGMENT_SEPARATOR};
pub use detect::{MatchKind, MatchResult, PatternMatcher, Reset};
pub use tracker::EditTracker;
