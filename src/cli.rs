//! Command-line argument parsing for the headless host
//!
//! Supports:
//! - Reading a file or stdin
//! - Replaying input as typed text (default) or one whole-document pass
//! - Plain or JSON output
//! - An explicit config file

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::HighlightConfig;

/// Highlight emails, phone numbers and links in text
#[derive(Parser, Debug)]
#[command(name = "textmark", version, about = "Highlight emails, phone numbers and links")]
pub struct CliArgs {
    /// File to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Highlight the whole text in one pass instead of replaying it as typed input
    #[arg(long)]
    pub whole: bool,

    /// Print spans as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of ~/.config/textmark/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// How the input is fed to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayMode {
    /// One pre/post-change pair per character
    Typed,
    /// A single pass over the whole document
    Whole,
}

impl CliArgs {
    pub fn mode(&self) -> ReplayMode {
        if self.whole {
            ReplayMode::Whole
        } else {
            ReplayMode::Typed
        }
    }

    /// Load the explicit config file, or the user config with fallback to defaults
    pub fn load_config(&self) -> anyhow::Result<HighlightConfig> {
        match &self.config {
            Some(path) => HighlightConfig::load_from(path),
            None => Ok(HighlightConfig::load()),
        }
    }

    /// Read the input text from the file or stdin
    pub fn read_input(&self) -> anyhow::Result<String> {
        match &self.path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_typed() {
        let args = CliArgs::parse_from(["textmark", "notes.txt"]);
        assert_eq!(args.mode(), ReplayMode::Typed);
        assert_eq!(args.path, Some(PathBuf::from("notes.txt")));
        assert!(!args.json);
    }

    #[test]
    fn test_whole_and_json_flags() {
        let args = CliArgs::parse_from(["textmark", "--whole", "--json"]);
        assert_eq!(args.mode(), ReplayMode::Whole);
        assert!(args.json);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let args = CliArgs::parse_from(["textmark", "--config", "/nonexistent/textmark.yaml"]);
        assert!(args.load_config().is_err());
    }
}
