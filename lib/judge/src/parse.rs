//! Reply parsing for generative model output.
//!
//! Models are instructed to answer with a bare number or a JSON array, but
//! real replies wander: prose around the number, markdown code fences
//! around the JSON. The parsers here accept those shapes and only give up
//! when there is nothing usable at all.

use std::sync::OnceLock;

use regex::Regex;
use simscan_core::{clamp_score, sanitize_topics, Topic};

use crate::error::{JudgeError, Result};

/// Score assumed when a reply arrives intact but carries no number.
///
/// A prose answer with no figure is treated as "the model would not commit"
/// rather than a failed call, so the full weighting scheme still applies.
pub const NEUTRAL_SIMILARITY: f32 = 50.0;

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(r"\d+(\.\d+)?").expect("number pattern compiles"))
}

/// Extracts the similarity percentage from a model reply.
///
/// Takes the first unsigned decimal number in the text, clamped to the
/// 0-100 scale. Replies without any number yield [`NEUTRAL_SIMILARITY`].
#[must_use]
pub fn extract_similarity(reply: &str) -> f32 {
    match number_re().find(reply) {
        Some(m) => match m.as_str().parse::<f32>() {
            Ok(value) => clamp_score(value),
            Err(_) => NEUTRAL_SIMILARITY,
        },
        None => NEUTRAL_SIMILARITY,
    }
}

/// Parses a topic reply into a sanitized topic list.
///
/// Accepts a bare JSON array or one wrapped in a markdown code fence.
/// Anything that does not decode as a JSON array is a malformed response.
pub fn parse_topics_reply(reply: &str) -> Result<Vec<Topic>> {
    let body = strip_code_fence(reply);
    let raw: Vec<Topic> = serde_json::from_str(body)
        .map_err(|e| JudgeError::MalformedResponse(format!("topic reply: {e}")))?;
    Ok(sanitize_topics(raw))
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
