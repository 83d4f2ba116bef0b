//! Corpus scanning: one source document against many candidates.
//!
//! A scan compares the source against every candidate with bounded
//! concurrency, drops matches under the threshold and returns the rest
//! sorted by score. Candidates carrying the source's own id are skipped so
//! a document never matches itself.

use std::cmp::Ordering;
use std::fmt;

use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::compare::SimilarityEngine;
use crate::report::ComparisonReport;

/// Matches scoring below this are dropped from scan results.
pub const DEFAULT_SCAN_THRESHOLD: f32 = 10.0;

/// Caller-supplied document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    /// String ID
    String(String),
    /// UUID
    Uuid(Uuid),
    /// Integer ID
    Integer(u64),
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::String(s) => write!(f, "{}", s),
            DocId::Uuid(u) => write!(f, "{}", u),
            DocId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        DocId::String(s)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        DocId::String(s.to_string())
    }
}

impl From<Uuid> for DocId {
    fn from(u: Uuid) -> Self {
        DocId::Uuid(u)
    }
}

impl From<u64> for DocId {
    fn from(i: u64) -> Self {
        DocId::Integer(i)
    }
}

/// One candidate document in a scan corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDocument {
    pub id: DocId,
    pub text: String,
}

impl ScanDocument {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Which scoring path a scan runs per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Edit distance only; no tokenization, no model calls.
    Basic,
    /// Blended scoring with the semantic judge when available.
    #[default]
    Full,
}

/// Per-scan options.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: ScanMode,
    /// Minimum score a match must reach to be kept.
    pub threshold: f32,
    /// Id of the source document, skipped when present in the corpus.
    pub source_id: Option<DocId>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            threshold: DEFAULT_SCAN_THRESHOLD,
            source_id: None,
        }
    }
}

/// One corpus document at or above the scan threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMatch {
    pub id: DocId,
    pub score: f32,
    /// Full comparison breakdown; absent in basic mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ComparisonReport>,
}

/// Result of scanning one source against a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Matches at or above the threshold, highest score first.
    pub matches: Vec<ScanMatch>,
    /// Number of candidates actually compared.
    pub scanned: usize,
}

impl SimilarityEngine {
    /// Scans `source` against every candidate in `documents`.
    ///
    /// Comparisons run with the engine's configured concurrency. Candidates
    /// whose id equals `options.source_id` are skipped entirely; matches
    /// under `options.threshold` are dropped. The surviving matches come
    /// back sorted by score, highest first.
    pub async fn scan(
        &self,
        source: &str,
        documents: &[ScanDocument],
        options: &ScanOptions,
    ) -> ScanOutcome {
        let candidates: Vec<&ScanDocument> = documents
            .iter()
            .filter(|doc| options.source_id.as_ref() != Some(&doc.id))
            .collect();
        let scanned = candidates.len();

        let mut matches: Vec<ScanMatch> = stream::iter(candidates)
            .map(|doc| async move {
                match options.mode {
                    ScanMode::Basic => ScanMatch {
                        id: doc.id.clone(),
                        score: self.compare_basic(source, &doc.text),
                        report: None,
                    },
                    ScanMode::Full => {
                        let report = self.compare(source, &doc.text).await;
                        ScanMatch {
                            id: doc.id.clone(),
                            score: report.score,
                            report: Some(report),
                        }
                    }
                }
            })
            .buffer_unordered(self.scan_concurrency())
            .collect()
            .await;

        matches.retain(|m| m.score >= options.threshold);
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(scanned, kept = matches.len(), "scan complete");
        ScanOutcome { matches, scanned }
    }
}
