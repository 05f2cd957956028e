//! Styled text snapshots and the ranges that index them
//!
//! All offsets are code units of the underlying Rust string (UTF-8 bytes).
//! Ranges that split a character are rejected rather than adjusted.

mod range;
mod styled;

pub use range::EditRange;
pub use styled::{Attributes, RangeError, Run, StyledText};
