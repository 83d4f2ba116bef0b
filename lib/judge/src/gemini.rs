//! Gemini `generateContent` client.
//!
//! Thin REST client for Google's Generative Language API. One prompt goes
//! in, the first candidate's text comes out; similarity and topic calls are
//! just different prompts over the same endpoint. The base URL is
//! configurable so tests can point the client at a local stub server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use simscan_core::Topic;
use tracing::debug;

use crate::error::{JudgeError, Result};
use crate::parse;
use crate::provider::{SemanticJudge, TopicModel};

/// Default public endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-pro";
/// Documents are cut to this many characters before prompting, bounding
/// request size and model cost.
pub const PROMPT_DOCUMENT_LIMIT: usize = 10_000;

/// Connection settings for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Creates a client from the given configuration.
    ///
    /// Fails when the API key is empty; a keyless deployment should not
    /// construct a judge at all.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(JudgeError::NotConfigured("empty API key".to_string()));
        }
        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        )
    }

    /// Sends one prompt and returns the first candidate's text.
    async fn generate(&self, prompt: String) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| JudgeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JudgeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| JudgeError::MalformedResponse(e.to_string()))?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or_else(|| JudgeError::MalformedResponse("reply has no candidates".to_string()))?;

        Ok(text)
    }
}

#[async_trait]
impl SemanticJudge for GeminiClient {
    async fn judge(&self, source: &str, target: &str) -> Result<f32> {
        let reply = self.generate(similarity_prompt(source, target)).await?;
        let score = parse::extract_similarity(&reply);
        debug!(model = %self.config.model, score, "semantic judgment received");
        Ok(score)
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TopicModel for GeminiClient {
    async fn topics(&self, text: &str) -> Result<Vec<Topic>> {
        let reply = self.generate(topics_prompt(text)).await?;
        let topics = parse::parse_topics_reply(&reply)?;
        debug!(model = %self.config.model, count = topics.len(), "topics received");
        Ok(topics)
    }
}

/// First `limit` characters of `text`, cut on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn similarity_prompt(source: &str, target: &str) -> String {
    let source = truncate_chars(source, PROMPT_DOCUMENT_LIMIT);
    let target = truncate_chars(target, PROMPT_DOCUMENT_LIMIT);
    format!(
        "Analyze these two documents for similarity. Consider:\n\
         1. Key concepts and themes\n\
         2. Main topics covered\n\
         3. Writing style and structure\n\
         4. Semantic meaning\n\n\
         Document 1:\n{source}\n\n\
         Document 2:\n{target}\n\n\
         Return only a similarity percentage as a number between 0 and 100."
    )
}

fn topics_prompt(text: &str) -> String {
    let text = truncate_chars(text, PROMPT_DOCUMENT_LIMIT);
    format!(
        "Analyze this text and:\n\
         1. Identify the main topics (maximum 5)\n\
         2. Provide a confidence score (0-100) for each topic\n\
         3. Format as a JSON array with 'topic' and 'confidence' keys\n\n\
         Text:\n{text}"
    )
}
