use super::types::{ChatRequest, ChatResponseRaw};
use crate::error::{CheckupError, Result};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Sends one chat-completion request and returns the generated text.
pub trait ChatBackend {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String>;
}

impl<B: ChatBackend + ?Sized> ChatBackend for &B {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String> {
        (**self).complete(api_key, request)
    }
}

/// OpenAI-compatible chat endpoint (OpenRouter by default).
pub struct OpenRouterBackend {
    http_client: Client,
    base_url: String,
}

impl OpenRouterBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CheckupError::Other(format!("Failed to build client: {e}")))?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }
}

impl ChatBackend for OpenRouterBackend {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                log::warn!("chat completion request failed: {e}");
                CheckupError::Recommendation(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            log::warn!("chat completion API error {status}: {error_text}");
            return Err(CheckupError::Recommendation(format!(
                "API error ({status}): {error_text}"
            )));
        }

        let raw: ChatResponseRaw = response
            .json()
            .map_err(|e| CheckupError::Recommendation(format!("invalid response: {e}")))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CheckupError::Recommendation("empty response from model".into()))?;

        log::debug!(
            "chat completion with {} took {}ms",
            request.model,
            start.elapsed().as_millis()
        );
        Ok(content)
    }
}
