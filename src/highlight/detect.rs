//! Entity detectors
//!
//! Three ordered passes run over a segment: email, phone, generic link.
//! Each pass turns regex matches into attribute writes. The order is fixed
//! because later writes win where matches overlap.

use regex::Regex;
use url::Url;

use crate::config::HighlightConfig;
use crate::text::{Attributes, EditRange};

/// Which detector produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Email,
    Phone,
    Link,
}

impl MatchKind {
    /// Detector order. Later kinds override earlier ones on overlap.
    pub const ORDER: [MatchKind; 3] = [MatchKind::Email, MatchKind::Phone, MatchKind::Link];

    pub fn name(self) -> &'static str {
        match self {
            MatchKind::Email => "email",
            MatchKind::Phone => "phone",
            MatchKind::Link => "link",
        }
    }
}

/// Attribute writes for one detected entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub kind: MatchKind,
    /// Range of the matched text in the full snapshot
    pub range: EditRange,
    pub attributes: Attributes,
}

/// Reset applied to a segment before any match is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reset {
    pub segment: EditRange,
    /// Attribute set across the whole segment
    pub set: (String, String),
    /// Attribute removed across the whole segment
    pub clear: String,
}

/// A compiled detector pass
#[derive(Debug)]
struct Detector {
    kind: MatchKind,
    regex: Regex,
}

/// Runs the configured detectors over segments of text
#[derive(Debug)]
pub struct PatternMatcher {
    detectors: Vec<Detector>,
    font_key: String,
    font: String,
    link_key: String,
}

impl PatternMatcher {
    /// Compile the detector patterns from `config`
    ///
    /// A pattern that fails to compile disables only its own detector.
    pub fn new(config: &HighlightConfig) -> Self {
        let detectors = MatchKind::ORDER
            .into_iter()
            .filter_map(|kind| {
                let pattern = match kind {
                    MatchKind::Email => &config.patterns.email,
                    MatchKind::Phone => &config.patterns.phone,
                    MatchKind::Link => &config.patterns.link,
                };
                match Regex::new(pattern) {
                    Ok(regex) => Some(Detector { kind, regex }),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping {} detector, pattern failed to compile: {}",
                            kind.name(),
                            e
                        );
                        None
                    }
                }
            })
            .collect();

        Self {
            detectors,
            font_key: config.font_key.clone(),
            font: config.font.clone(),
            link_key: config.link_key.clone(),
        }
    }

    /// Kinds of the detectors that compiled, in run order
    pub fn active_kinds(&self) -> Vec<MatchKind> {
        self.detectors.iter().map(|d| d.kind).collect()
    }

    /// The reset that precedes detection in `segment`: uniform font, no links
    pub fn reset(&self, segment: EditRange) -> Reset {
        Reset {
            segment,
            set: (self.font_key.clone(), self.font.clone()),
            clear: self.link_key.clone(),
        }
    }

    /// Run every active detector over `segment` of `text`
    ///
    /// Matches come back grouped by detector in run order. Detectors search
    /// the whole text starting at the segment, so anchors and word
    /// boundaries see the real neighbours of the segment. Matches that reach
    /// past the segment end are skipped; an invalid segment yields no
    /// matches.
    pub fn detect(&self, text: &str, segment: EditRange) -> Vec<MatchResult> {
        if !segment.is_valid_in(text) {
            tracing::debug!("Not scanning invalid segment {}", segment);
            return Vec::new();
        }

        let end = segment.end();
        let mut results = Vec::new();

        for detector in &self.detectors {
            let mut pos = segment.location;
            while pos < end {
                let Some(found) = detector.regex.find_at(text, pos) else {
                    break;
                };
                if found.start() >= end {
                    break;
                }
                if found.is_empty() || found.end() > end {
                    pos = found.start() + char_len_at(text, found.start());
                    continue;
                }
                pos = found.end();

                let Some(target) = self.link_target(detector.kind, found.as_str()) else {
                    continue;
                };
                let range = EditRange::new(found.start(), found.len());
                tracing::trace!("{} match at {}: {}", detector.kind.name(), range, target);

                let mut attributes = Attributes::new();
                attributes.insert(self.link_key.clone(), target);
                results.push(MatchResult {
                    kind: detector.kind,
                    range,
                    attributes,
                });
            }
        }

        results
    }

    /// Link value for a match, or `None` if the match should be dropped
    fn link_target(&self, kind: MatchKind, matched: &str) -> Option<String> {
        match kind {
            MatchKind::Email => Some(format!("mailto:{}", matched)),
            MatchKind::Phone => Some(format!("tel:{}", matched)),
            MatchKind::Link => match Url::parse(matched) {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    tracing::debug!("Dropping link match {:?}: {}", matched, e);
                    None
                }
            },
        }
    }
}

fn char_len_at(text: &str, index: usize) -> usize {
    text[index..].chars().next().map_or(1, char::len_utf8)
}
