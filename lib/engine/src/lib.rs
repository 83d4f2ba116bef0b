//! # simscan Engine
//!
//! Orchestration layer of the simscan similarity scanner.
//!
//! The engine owns the policy around the scorers:
//!
//! - [`SimilarityEngine::compare`] - blended comparison with judge fallback
//! - [`SimilarityEngine::compare_basic`] - edit distance only
//! - [`SimilarityEngine::scan`] - one source against a corpus, bounded
//!   concurrency, threshold filtering and score-sorted matches
//! - [`SimilarityEngine::topics`] - topic detection with lexical fallback
//!
//! Scoring itself lives in `simscan-core`; model calls live behind the
//! `simscan-judge` traits. The engine decides when each runs, enforces the
//! model timeout and guarantees that callers always get a finite score in
//! [0, 100] no matter what fails underneath.

pub mod compare;
pub mod report;
pub mod scan;

pub use compare::{SimilarityEngine, DEFAULT_JUDGE_TIMEOUT, DEFAULT_SCAN_CONCURRENCY};
pub use report::{ComparisonReport, TopicReport, TopicSource};
pub use scan::{
    DocId, ScanDocument, ScanMatch, ScanMode, ScanOptions, ScanOutcome, DEFAULT_SCAN_THRESHOLD,
};
