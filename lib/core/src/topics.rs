//! Topic extraction from term frequencies.
//!
//! The lexical extractor here is the always-available fallback: it promotes
//! the most frequent tokens of a document to topics. A generative model can
//! produce far better topics, but its replies pass through
//! [`sanitize_topics`] so both paths honor the same shape guarantees.

use serde::{Deserialize, Serialize};

use crate::blend::clamp_score;
use crate::tokenize::frequency_vector;

/// Maximum number of topics reported per document.
pub const MAX_TOPICS: usize = 5;

/// One detected topic with its confidence on the 0-100 scale.
///
/// Both fields default when deserializing so that partially filled entries
/// in a model reply survive parsing; [`sanitize_topics`] drops them
/// afterwards instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub confidence: f32,
}

impl Topic {
    pub fn new(topic: impl Into<String>, confidence: f32) -> Self {
        Self {
            topic: topic.into(),
            confidence,
        }
    }
}

/// Normalizes a raw topic list: trims labels, drops entries without a label
/// or without a positive finite confidence, clamps confidences to [0, 100]
/// and keeps at most [`MAX_TOPICS`] entries.
#[must_use]
pub fn sanitize_topics(raw: Vec<Topic>) -> Vec<Topic> {
    raw.into_iter()
        .filter(|t| !t.topic.trim().is_empty() && t.confidence.is_finite() && t.confidence > 0.0)
        .map(|t| Topic {
            topic: t.topic.trim().to_string(),
            confidence: clamp_score(t.confidence),
        })
        .take(MAX_TOPICS)
        .collect()
}

/// Frequency-based topic extraction.
///
/// The most frequent tokens become the topics; confidence is the token's
/// share of the distinct vocabulary, scaled to 0-100 and clamped. Ties are
/// broken alphabetically so the output is deterministic.
#[must_use]
pub fn lexical_topics(text: &str) -> Vec<Topic> {
    let freq = frequency_vector(text);
    let distinct = freq.len();
    if distinct == 0 {
        return Vec::new();
    }

    let mut entries: Vec<(String, u32)> = freq.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(MAX_TOPICS);

    entries
        .into_iter()
        .map(|(topic, count)| Topic {
            topic,
            confidence: clamp_score(count as f32 / distinct as f32 * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_ranks_by_frequency() {
        let text = "wolves wolves wolves rivers rivers forest";
        let topics = lexical_topics(text);
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].topic, "wolves");
        assert_eq!(topics[1].topic, "rivers");
        assert_eq!(topics[2].topic, "forest");
    }

    #[test]
    fn test_lexical_confidence_is_vocabulary_share() {
        // 3 occurrences over 3 distinct terms -> 100.
        let topics = lexical_topics("wolves wolves wolves rivers rivers forest");
        assert_eq!(topics[0].confidence, 100.0);
        let second = topics[1].confidence;
        assert!(
            (second - 2.0 / 3.0 * 100.0).abs() < 1e-3,
            "Expected ~66.7, got {}",
            second
        );
    }

    #[test]
    fn test_lexical_caps_at_five() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel";
        let topics = lexical_topics(text);
        assert_eq!(topics.len(), MAX_TOPICS, "Expected 5, got {}", topics.len());
    }

    #[test]
    fn test_lexical_ties_break_alphabetically() {
        let topics = lexical_topics("zulu yankee xray whiskey victor uniform");
        let labels: Vec<&str> = topics.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(labels, vec!["uniform", "victor", "whiskey", "xray", "yankee"]);
    }

    #[test]
    fn test_lexical_empty_input() {
        assert!(lexical_topics("").is_empty());
        assert!(lexical_topics("a an the of").is_empty());
    }

    #[test]
    fn test_lexical_confidence_clamped_on_repetition() {
        // One term repeated: share of vocabulary exceeds 100 before clamping.
        let topics = lexical_topics("wolves wolves wolves");
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].confidence, 100.0);
    }

    #[test]
    fn test_sanitize_drops_invalid_entries() {
        let raw = vec![
            Topic::new("  climate  ", 82.0),
            Topic::new("", 50.0),
            Topic::new("noise", 0.0),
            Topic::new("negative", -5.0),
            Topic::new("nan", f32::NAN),
            Topic::new("overflow", 130.0),
        ];
        let topics = sanitize_topics(raw);
        assert_eq!(topics.len(), 2, "Expected 2 topics, got {:?}", topics);
        assert_eq!(topics[0], Topic::new("climate", 82.0));
        assert_eq!(topics[1], Topic::new("overflow", 100.0));
    }

    #[test]
    fn test_sanitize_caps_at_five() {
        let raw = (0..8).map(|i| Topic::new(format!("t{}", i), 10.0)).collect();
        assert_eq!(sanitize_topics(raw).len(), MAX_TOPICS);
    }

    #[test]
    fn test_topic_deserializes_with_missing_fields() {
        let t: Topic = serde_json::from_str(r#"{"topic":"climate"}"#).unwrap();
        assert_eq!(t.confidence, 0.0);
        let t: Topic = serde_json::from_str(r#"{"confidence":40.0}"#).unwrap();
        assert!(t.topic.is_empty());
    }
}
