//! Provider traits for model-backed scoring.
//!
//! The engine only ever talks to these traits. Production wires in the
//! Gemini client; tests substitute fixed or failing judges without touching
//! the network.

use async_trait::async_trait;
use simscan_core::Topic;

use crate::error::Result;

/// A model that judges the holistic similarity of two documents.
#[async_trait]
pub trait SemanticJudge: Send + Sync {
    /// Similarity percentage for the pair on the 0-100 scale.
    ///
    /// One attempt per call. Implementations must not retry internally;
    /// the caller owns the fallback policy.
    async fn judge(&self, source: &str, target: &str) -> Result<f32>;

    /// Identifier of the backing model, for logs.
    fn model_id(&self) -> &str;
}

/// A model that extracts the main topics of a document.
#[async_trait]
pub trait TopicModel: Send + Sync {
    /// Up to five topics with 0-100 confidences.
    async fn topics(&self, text: &str) -> Result<Vec<Topic>>;
}
