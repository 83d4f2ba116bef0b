//! Error types for semantic judge calls.

use std::time::Duration;

use thiserror::Error;

/// Result type for judge operations
pub type Result<T> = std::result::Result<T, JudgeError>;

/// Failure modes of a semantic judge call.
///
/// Every variant is a hard failure of the call itself. Replies that arrive
/// intact but contain no parseable number are not errors; the reply parser
/// substitutes a neutral score for those.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Judge not configured: {0}")]
    NotConfigured(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Model API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Judge call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}
