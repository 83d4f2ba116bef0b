//! Result types returned by the engine.

use serde::{Deserialize, Serialize};
use simscan_core::{ScoreParts, Topic};

/// Outcome of one comparison.
///
/// Carries the final blended score together with the component scores it
/// was blended from, so callers can always see which scorers contributed.
/// Serializes flat: `{"score": 74.0, "scheme": "full", "edit": ..., ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Final similarity on the 0-100 scale.
    pub score: f32,
    #[serde(flatten)]
    pub parts: ScoreParts,
}

impl ComparisonReport {
    /// Blends the components into the final score.
    #[must_use]
    pub fn new(parts: ScoreParts) -> Self {
        Self {
            score: parts.blend(),
            parts,
        }
    }

    /// True when the semantic judge did not contribute to this score.
    #[inline]
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.parts.is_degraded()
    }
}

/// Where a topic list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicSource {
    /// Produced by the topic model.
    Model,
    /// Produced by the local frequency-based extractor.
    Lexical,
}

/// Topics detected for one document, tagged with their origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicReport {
    pub topics: Vec<Topic>,
    pub source: TopicSource,
}
