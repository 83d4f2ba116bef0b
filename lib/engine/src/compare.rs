//! The similarity engine: scorer orchestration and fallback policy.
//!
//! [`SimilarityEngine::compare`] is the one entry point for scoring a
//! document pair. It always runs the two local scorers, asks the semantic
//! judge when one is attached, and degrades to reweighted local scores
//! whenever the judge fails, times out or is absent. A comparison itself
//! never fails.

use std::sync::Arc;
use std::time::Duration;

use simscan_core::{edit_similarity, frequency_similarity, lexical_topics, ScoreParts};
use simscan_judge::{JudgeError, SemanticJudge, TopicModel};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::report::{ComparisonReport, TopicReport, TopicSource};

/// Default wall clock budget for one model call.
pub const DEFAULT_JUDGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of comparisons in flight during a scan.
pub const DEFAULT_SCAN_CONCURRENCY: usize = 8;

/// Aggregates the local scorers and the optional model-backed judges.
///
/// Construction is builder-style; an engine without a judge is valid and
/// simply produces degraded scores:
///
/// ```rust
/// use simscan_engine::SimilarityEngine;
///
/// # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
/// # rt.block_on(async {
/// let engine = SimilarityEngine::new();
/// let report = engine.compare("wolves hunt at dusk", "wolves hunt at dawn").await;
/// assert!(report.is_degraded());
/// # });
/// ```
pub struct SimilarityEngine {
    judge: Option<Arc<dyn SemanticJudge>>,
    topic_model: Option<Arc<dyn TopicModel>>,
    judge_timeout: Duration,
    scan_concurrency: usize,
}

impl SimilarityEngine {
    /// Creates an engine with no model attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            judge: None,
            topic_model: None,
            judge_timeout: DEFAULT_JUDGE_TIMEOUT,
            scan_concurrency: DEFAULT_SCAN_CONCURRENCY,
        }
    }

    /// Attaches a semantic judge.
    #[must_use]
    pub fn with_judge(mut self, judge: Arc<dyn SemanticJudge>) -> Self {
        self.judge = Some(judge);
        self
    }

    /// Attaches a topic model.
    #[must_use]
    pub fn with_topic_model(mut self, model: Arc<dyn TopicModel>) -> Self {
        self.topic_model = Some(model);
        self
    }

    /// Sets the wall clock budget for one model call.
    #[must_use]
    pub fn with_judge_timeout(mut self, timeout: Duration) -> Self {
        self.judge_timeout = timeout;
        self
    }

    /// Sets how many comparisons a scan keeps in flight.
    #[must_use]
    pub fn with_scan_concurrency(mut self, concurrency: usize) -> Self {
        self.scan_concurrency = concurrency.max(1);
        self
    }

    /// Model identifier of the attached judge, if any.
    #[inline]
    #[must_use]
    pub fn judge_model(&self) -> Option<&str> {
        self.judge.as_deref().map(|judge| judge.model_id())
    }

    pub(crate) fn scan_concurrency(&self) -> usize {
        self.scan_concurrency
    }

    /// Compares two documents and returns the blended report.
    ///
    /// Local scorers always run. The semantic judge contributes when it is
    /// attached and answers within the timeout; any judge failure is logged
    /// and the comparison falls back to the degraded weighting. The final
    /// score is always finite and within [0, 100].
    pub async fn compare(&self, source: &str, target: &str) -> ComparisonReport {
        let edit = edit_similarity(source, target);
        let freq = guard_freq(frequency_similarity(source, target));

        let parts = match self.semantic_score(source, target).await {
            Ok(semantic) => ScoreParts::Full {
                edit,
                freq,
                semantic,
            },
            Err(e) => {
                warn!(
                    model = self.judge_model().unwrap_or("none"),
                    error = %e,
                    "semantic judge unavailable, reweighting local scores"
                );
                ScoreParts::Degraded { edit, freq }
            }
        };

        let report = ComparisonReport::new(parts);
        debug!(
            score = report.score,
            degraded = report.is_degraded(),
            "comparison complete"
        );
        report
    }

    /// Edit distance similarity alone, for cheap scans.
    ///
    /// No tokenization, no model call. Useful when a caller wants a fast
    /// first pass over a large corpus.
    #[must_use]
    pub fn compare_basic(&self, source: &str, target: &str) -> f32 {
        edit_similarity(source, target)
    }

    /// Detects topics for one document.
    ///
    /// Uses the topic model when attached and falls back to the lexical
    /// extractor on any model failure, mirroring the compare fallback.
    pub async fn topics(&self, text: &str) -> TopicReport {
        if let Some(model) = &self.topic_model {
            match timeout(self.judge_timeout, model.topics(text)).await {
                Ok(Ok(topics)) => {
                    return TopicReport {
                        topics,
                        source: TopicSource::Model,
                    }
                }
                Ok(Err(e)) => warn!(error = %e, "topic model failed, using lexical fallback"),
                Err(_) => warn!(
                    timeout = ?self.judge_timeout,
                    "topic model timed out, using lexical fallback"
                ),
            }
        }
        TopicReport {
            topics: lexical_topics(text),
            source: TopicSource::Lexical,
        }
    }

    async fn semantic_score(&self, source: &str, target: &str) -> simscan_judge::Result<f32> {
        let judge = self
            .judge
            .as_ref()
            .ok_or_else(|| JudgeError::NotConfigured("no semantic judge attached".to_string()))?;

        match timeout(self.judge_timeout, judge.judge(source, target)).await {
            Ok(result) => result,
            Err(_) => Err(JudgeError::Timeout(self.judge_timeout)),
        }
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The frequency scorer reports `NaN` for documents without qualifying
/// tokens. Blending must stay finite, so substitute 0 and say so.
fn guard_freq(freq: f32) -> f32 {
    if freq.is_finite() {
        freq
    } else {
        warn!("frequency scorer returned a non-finite value, substituting 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use simscan_core::Topic;

    struct FixedJudge(f32);

    #[async_trait]
    impl SemanticJudge for FixedJudge {
        async fn judge(&self, _source: &str, _target: &str) -> simscan_judge::Result<f32> {
            Ok(self.0)
        }

        fn model_id(&self) -> &str {
            "fixed"
        }
    }

    struct FailingJudge;

    #[async_trait]
    impl SemanticJudge for FailingJudge {
        async fn judge(&self, _source: &str, _target: &str) -> simscan_judge::Result<f32> {
            Err(JudgeError::Transport("connection refused".to_string()))
        }

        fn model_id(&self) -> &str {
            "failing"
        }
    }

    struct SlowJudge;

    #[async_trait]
    impl SemanticJudge for SlowJudge {
        async fn judge(&self, _source: &str, _target: &str) -> simscan_judge::Result<f32> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(100.0)
        }

        fn model_id(&self) -> &str {
            "slow"
        }
    }

    struct FixedTopics(Vec<Topic>);

    #[async_trait]
    impl TopicModel for FixedTopics {
        async fn topics(&self, _text: &str) -> simscan_judge::Result<Vec<Topic>> {
            Ok(self.0.clone())
        }
    }

    struct FailingTopics;

    #[async_trait]
    impl TopicModel for FailingTopics {
        async fn topics(&self, _text: &str) -> simscan_judge::Result<Vec<Topic>> {
            Err(JudgeError::Transport("connection refused".to_string()))
        }
    }

    const SOURCE: &str = "wolves hunt deer across frozen rivers every winter";
    const TARGET: &str = "wolves chase deer across frozen rivers each winter";

    #[tokio::test]
    async fn test_full_blend_uses_full_weights() {
        let engine = SimilarityEngine::new().with_judge(Arc::new(FixedJudge(90.0)));
        let report = engine.compare(SOURCE, TARGET).await;

        let edit = edit_similarity(SOURCE, TARGET);
        let freq = frequency_similarity(SOURCE, TARGET);
        let expected = edit * 0.2 + freq * 0.3 + 90.0 * 0.5;
        assert!(
            (report.score - expected).abs() < 1e-3,
            "Expected {}, got {}",
            expected,
            report.score
        );
        assert!(!report.is_degraded());
        assert_eq!(report.parts.semantic(), Some(90.0));
    }

    #[tokio::test]
    async fn test_judge_failure_degrades() {
        let engine = SimilarityEngine::new().with_judge(Arc::new(FailingJudge));
        let report = engine.compare(SOURCE, TARGET).await;

        let edit = edit_similarity(SOURCE, TARGET);
        let freq = frequency_similarity(SOURCE, TARGET);
        let expected = edit * 0.4 + freq * 0.6;
        assert!(
            (report.score - expected).abs() < 1e-3,
            "Expected {}, got {}",
            expected,
            report.score
        );
        assert!(report.is_degraded());
    }

    #[tokio::test]
    async fn test_no_judge_degrades() {
        let engine = SimilarityEngine::new();
        let report = engine.compare(SOURCE, TARGET).await;
        assert!(report.is_degraded());
        assert_eq!(report.parts.semantic(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_judge_timeout_degrades() {
        let engine = SimilarityEngine::new()
            .with_judge(Arc::new(SlowJudge))
            .with_judge_timeout(Duration::from_millis(50));
        let report = engine.compare(SOURCE, TARGET).await;
        assert!(report.is_degraded(), "Expected degraded report after timeout");
    }

    #[tokio::test]
    async fn test_identical_documents_score_high() {
        let engine = SimilarityEngine::new().with_judge(Arc::new(FixedJudge(100.0)));
        let report = engine.compare(SOURCE, SOURCE).await;
        assert!(
            report.score >= 99.0,
            "Expected >= 99 for identical documents, got {}",
            report.score
        );
    }

    #[tokio::test]
    async fn test_disjoint_documents_score_low_without_panicking() {
        let engine = SimilarityEngine::new().with_judge(Arc::new(FailingJudge));
        let report = engine
            .compare(
                "wolves hunting deer across frozen northern rivers",
                "quarterly revenue exceeded projections this fiscal period",
            )
            .await;
        assert!(
            report.score < 30.0,
            "Expected low score for disjoint documents, got {}",
            report.score
        );
        assert!(report.score >= 0.0);
    }

    #[tokio::test]
    async fn test_tokenless_documents_stay_finite() {
        // "The cat." produces no tokens, so the frequency score is NaN and
        // must be substituted before blending.
        let engine = SimilarityEngine::new();
        let report = engine.compare("The cat.", "The cat.").await;
        assert!(
            report.score.is_finite(),
            "Expected finite score, got {}",
            report.score
        );
        assert_eq!(report.parts.freq(), 0.0);
        // Edit similarity still sees identical strings.
        assert_eq!(report.parts.edit(), 100.0);
    }

    #[tokio::test]
    async fn test_score_always_in_bounds() {
        let engine = SimilarityEngine::new().with_judge(Arc::new(FixedJudge(1000.0)));
        let report = engine.compare(SOURCE, SOURCE).await;
        assert!(
            (0.0..=100.0).contains(&report.score),
            "Score out of bounds: {}",
            report.score
        );
    }

    #[test]
    fn test_basic_compare_is_edit_only() {
        let engine = SimilarityEngine::new();
        let score = engine.compare_basic(SOURCE, TARGET);
        assert_eq!(score, edit_similarity(SOURCE, TARGET));
    }

    #[test]
    fn test_judge_model_reports_attached_judge() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.judge_model(), None);

        let engine = engine.with_judge(Arc::new(FixedJudge(50.0)));
        assert_eq!(engine.judge_model(), Some("fixed"));
    }

    #[tokio::test]
    async fn test_topics_prefer_model() {
        let canned = vec![Topic::new("wolf ecology", 88.0)];
        let engine = SimilarityEngine::new().with_topic_model(Arc::new(FixedTopics(canned.clone())));
        let report = engine.topics("wolves along the river").await;
        assert_eq!(report.source, TopicSource::Model);
        assert_eq!(report.topics, canned);
    }

    #[tokio::test]
    async fn test_topics_fall_back_to_lexical() {
        let engine = SimilarityEngine::new().with_topic_model(Arc::new(FailingTopics));
        let report = engine.topics("wolves wolves rivers").await;
        assert_eq!(report.source, TopicSource::Lexical);
        assert_eq!(report.topics[0].topic, "wolves");
    }

    #[tokio::test]
    async fn test_topics_without_model_are_lexical() {
        let engine = SimilarityEngine::new();
        let report = engine.topics("wolves wolves rivers").await;
        assert_eq!(report.source, TopicSource::Lexical);
        assert_eq!(report.topics.len(), 2);
    }
}
