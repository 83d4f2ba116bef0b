//! Term frequency cosine scoring.
//!
//! Compares the vocabulary overlap of two documents regardless of word
//! order: each document becomes a term frequency vector and the score is
//! the cosine of the angle between them, scaled to 0-100.
//!
//! When either vector is empty the cosine is undefined and the functions
//! here return `NaN` instead of inventing a value. The aggregator owns the
//! substitution policy for that case.

use crate::tokenize::{frequency_vector, FrequencyVector};

/// Raw cosine similarity between two frequency vectors, in [0, 1].
///
/// Returns `NaN` when either vector has zero norm.
#[must_use]
pub fn cosine(source: &FrequencyVector, target: &FrequencyVector) -> f32 {
    let mut dot = 0.0f32;
    let mut source_norm = 0.0f32;
    let mut target_norm = 0.0f32;

    for (term, &count) in source {
        let s = count as f32;
        source_norm += s * s;
        if let Some(&t) = target.get(term) {
            dot += s * t as f32;
        }
    }
    for &count in target.values() {
        let t = count as f32;
        target_norm += t * t;
    }

    dot / (source_norm.sqrt() * target_norm.sqrt())
}

/// Term frequency similarity between two documents on the 0-100 scale.
///
/// Tokenizes both sides with the shared tokenizer and takes the cosine of
/// the resulting frequency vectors. Propagates `NaN` when either document
/// has no qualifying tokens.
#[must_use]
pub fn frequency_similarity(a: &str, b: &str) -> f32 {
    cosine(&frequency_vector(a), &frequency_vector(b)) * 100.0
}
