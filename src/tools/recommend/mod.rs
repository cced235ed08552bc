//! LLM-backed package comparison and recommendations.

mod client;
mod prompt;
mod tests;

pub mod types;

pub use client::{ChatBackend, OpenRouterBackend};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use types::{ChatRequest, Message};

use crate::config::LlmConfig;
use crate::engine::Recommender;
use crate::error::{is_sentinel, CheckupError, Result};

/// Sends the scraped summary to a chat model with a fixed analysis prompt.
///
/// The credential lives in the injected [`LlmConfig`]; without one no
/// request is made.
pub struct LlmRecommender<B: ChatBackend = OpenRouterBackend> {
    config: LlmConfig,
    backend: B,
}

impl LlmRecommender<OpenRouterBackend> {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let backend = OpenRouterBackend::new(config.base_url.clone(), config.timeout)?;
        Ok(Self { config, backend })
    }
}

impl<B: ChatBackend> LlmRecommender<B> {
    pub fn with_backend(config: LlmConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// Request body for a given summary.
    pub fn build_request(&self, summary: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(build_prompt(summary)),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Generate markdown commentary for the summary.
    ///
    /// Empty input and upstream error text are returned unchanged.
    pub fn generate(&self, summary: &str) -> Result<String> {
        if summary.is_empty() || is_sentinel(summary) {
            return Ok(summary.to_string());
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CheckupError::MissingCredential)?;

        let request = self.build_request(summary);
        self.backend
            .complete(api_key, &request)
            .map_err(|e| match e {
                CheckupError::Recommendation(_) => e,
                other => CheckupError::Recommendation(other.to_string()),
            })
    }

    /// Like [`generate`](Self::generate), but failures become the
    /// user-facing message.
    pub fn analyze(&self, summary: &str) -> String {
        self.generate(summary).unwrap_or_else(|e| e.to_string())
    }
}

impl<B: ChatBackend> Recommender for LlmRecommender<B> {
    fn name(&self) -> &'static str {
        "openrouter-chat"
    }

    fn recommend(&self, summary: &str) -> Result<String> {
        self.generate(summary)
    }
}
