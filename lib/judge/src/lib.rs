//! # simscan Judge
//!
//! Semantic judging for the simscan engine: everything that involves a
//! generative model lives here, behind two narrow traits.
//!
//! - [`SemanticJudge`] - holistic similarity percentage for a document pair
//! - [`TopicModel`] - main topic extraction for one document
//! - [`GeminiClient`] - production implementation of both, over the Gemini
//!   `generateContent` REST endpoint
//! - [`parse`] - tolerant parsing of model replies
//!
//! Calls are one-shot: a failed call is reported as a [`JudgeError`] and
//! never retried here. The engine downstream decides whether to fall back
//! to local scoring.

pub mod error;
pub mod gemini;
pub mod parse;
pub mod provider;

pub use error::{JudgeError, Result};
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, PROMPT_DOCUMENT_LIMIT};
pub use parse::{extract_similarity, parse_topics_reply, NEUTRAL_SIMILARITY};
pub use provider::{SemanticJudge, TopicModel};
