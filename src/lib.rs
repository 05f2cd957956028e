//! textmark - incremental entity highlighting for live-edited text
//!
//! This crate highlights email addresses, phone numbers and links inside a
//! styled text buffer as the user types, rescanning only the
//! whitespace-delimited segment around each edit.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod highlight;
pub mod messages;
pub mod replay;
pub mod session;
pub mod text;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::HighlightConfig;
pub use messages::SessionMsg;
pub use session::EditSession;
pub use text::{EditRange, StyledText};
