//! # simscan Core
//!
//! Scoring core for the simscan document similarity engine.
//!
//! This crate provides the local, model-free building blocks:
//!
//! - [`edit_similarity`] - normalized character edit distance on the 0-100 scale
//! - [`FrequencyVector`] - term frequency vector built by the shared tokenizer
//! - [`frequency_similarity`] - cosine similarity over term frequencies
//! - [`ScoreParts`] - component scores and the weighted blend that combines them
//! - [`lexical_topics`] - frequency-based topic extraction
//!
//! Everything here is synchronous and total: no I/O, no configuration, no
//! failure paths. Degenerate inputs surface as documented sentinel values
//! (the frequency scorer yields `NaN` when a document has no qualifying
//! tokens) and callers decide how to react.
//!
//! ## Example
//!
//! ```rust
//! use simscan_core::{edit_similarity, frequency_similarity, ScoreParts};
//!
//! let a = "The quick brown fox jumps over the lazy dog";
//! let b = "The quick brown fox leaps over the lazy dog";
//!
//! let parts = ScoreParts::Degraded {
//!     edit: edit_similarity(a, b),
//!     freq: frequency_similarity(a, b),
//! };
//! let score = parts.blend();
//! assert!((0.0..=100.0).contains(&score));
//! ```

pub mod blend;
pub mod edit;
pub mod freq;
pub mod tokenize;
pub mod topics;

pub use blend::{clamp_score, ScoreParts};
pub use edit::{edit_distance, edit_similarity};
pub use freq::{cosine, frequency_similarity};
pub use tokenize::{frequency_vector, tokenize, FrequencyVector};
pub use topics::{lexical_topics, sanitize_topics, Topic, MAX_TOPICS};
