//! # simscan
//!
//! A document similarity scanning engine.
//!
//! simscan scores how similar two text documents are by blending three
//! signals: character-level edit distance, term frequency cosine
//! similarity and a generative-model judgment. When the model is
//! unreachable the engine degrades to the local scorers instead of
//! failing, so a comparison always produces a score.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install simscan
//! GEMINI_API_KEY=... simscan --http-port 7171
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use simscan::prelude::*;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! // An engine without a judge scores with the local scorers only.
//! let engine = SimilarityEngine::new();
//!
//! let report = engine
//!     .compare(
//!         "The quick brown fox jumps over the lazy dog",
//!         "The quick brown fox leaps over the lazy dog",
//!     )
//!     .await;
//! assert!(report.is_degraded());
//! assert!((0.0..=100.0).contains(&report.score));
//!
//! // Scan one document against a small corpus.
//! let corpus = vec![
//!     ScanDocument::new("a", "The quick brown fox leaps over the lazy dog"),
//!     ScanDocument::new("b", "Quarterly revenue exceeded projections"),
//! ];
//! let outcome = engine
//!     .scan(
//!         "The quick brown fox jumps over the lazy dog",
//!         &corpus,
//!         &ScanOptions::default(),
//!     )
//!     .await;
//! assert_eq!(outcome.scanned, 2);
//! # });
//! ```
//!
//! ## Crate Structure
//!
//! simscan is composed of several crates:
//!
//! - `simscan-core` - Local scorers (edit distance, term frequency, blending, topics)
//! - `simscan-judge` - Semantic judge traits and the Gemini client
//! - `simscan-engine` - Score aggregation, fallback policy and corpus scans
//! - `simscan-api` - REST API
//!
//! ## Features
//!
//! - **Blended Scoring**: edit distance, term frequency and model judgment in one score
//! - **Graceful Degradation**: local-only scoring whenever the model is unavailable
//! - **Corpus Scans**: bounded-concurrency scans with threshold filtering
//! - **Topic Detection**: model-backed with a frequency-based fallback
//! - **REST API**: compare, scan and topics over JSON

// Re-export core types
pub use simscan_core::{
    clamp_score, edit_distance, edit_similarity, frequency_similarity, frequency_vector,
    lexical_topics, tokenize, FrequencyVector, ScoreParts, Topic, MAX_TOPICS,
};

// Re-export judge types
pub use simscan_judge::{
    GeminiClient, GeminiConfig, JudgeError, SemanticJudge, TopicModel, NEUTRAL_SIMILARITY,
};

// Re-export engine types
pub use simscan_engine::{
    ComparisonReport, DocId, ScanDocument, ScanMatch, ScanMode, ScanOptions, ScanOutcome,
    SimilarityEngine, TopicReport, TopicSource,
};

// Re-export API
pub use simscan_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComparisonReport, DocId, GeminiClient, GeminiConfig, JudgeError, ScanDocument, ScanMatch,
        ScanMode, ScanOptions, ScanOutcome, ScoreParts, SemanticJudge, SimilarityEngine, Topic,
        TopicModel, TopicReport, TopicSource,
    };
    pub use crate::RestApi;
}
