//! Highlighting configuration
//!
//! Stores the display font, attribute key names and detector patterns in
//! `~/.config/textmark/config.yaml`. Every field has a default, so a partial
//! file only overrides what it names.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration injected into an [`EditSession`](crate::session::EditSession)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Display font identifier written to every rescanned segment
    #[serde(default = "default_font")]
    pub font: String,

    /// Attribute key carrying the font
    #[serde(default = "default_font_key")]
    pub font_key: String,

    /// Attribute key carrying link targets
    #[serde(default = "default_link_key")]
    pub link_key: String,

    #[serde(default)]
    pub patterns: DetectorPatterns,
}

/// Regular expressions for each detector, as source strings
///
/// Invalid patterns are not rejected here; the matcher skips the detector
/// and logs a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorPatterns {
    #[serde(default = "default_email_pattern")]
    pub email: String,
    #[serde(default = "default_phone_pattern")]
    pub phone: String,
    #[serde(default = "default_link_pattern")]
    pub link: String,
}

fn default_font() -> String {
    "system-17".to_string()
}

fn default_font_key() -> String {
    "font".to_string()
}

fn default_link_key() -> String {
    "link".to_string()
}

fn default_email_pattern() -> String {
    r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}".to_string()
}

fn default_phone_pattern() -> String {
    r"\+?\d{1,3}[ .-]?\(?\d{3}\)?[ .-]?\d{3}[ .-]?\d{4}".to_string()
}

fn default_link_pattern() -> String {
    r#"(?:[A-Za-z][A-Za-z0-9+.-]*://|www\.)[^\s<>"]+"#.to_string()
}

impl Default for DetectorPatterns {
    fn default() -> Self {
        Self {
            email: default_email_pattern(),
            phone: default_phone_pattern(),
            link: default_link_pattern(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            font: default_font(),
            font_key: default_font_key(),
            link_key: default_link_key(),
            patterns: DetectorPatterns::default(),
        }
    }
}

impl HighlightConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the user config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: HighlightConfig = serde_yaml::from_str("font: mono-12\n").unwrap();
        assert_eq!(config.font, "mono-12");
        assert_eq!(config.link_key, "link");
        assert_eq!(config.patterns, DetectorPatterns::default());
    }

    #[test]
    fn test_partial_patterns_keep_other_defaults() {
        let yaml = "patterns:\n  phone: '\\d+'\n";
        let config: HighlightConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.patterns.phone, r"\d+");
        assert_eq!(config.patterns.email, default_email_pattern());
    }
}
