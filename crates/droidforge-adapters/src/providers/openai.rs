//! OpenAI content provider.
//!
//! Calls the chat-completions endpoint with the shared system instruction
//! and extracts the first choice's message content. Single attempt: any
//! failure is reported to the chain, which moves on to the next strategy.

use std::time::Duration;

use serde::Deserialize;
use tracing::instrument;

use droidforge_core::{
    application::ports::{ContentProvider, ProviderError},
    domain::{Fragment, SYSTEM_INSTRUCTION, strip_code_fences},
};

pub const PROVIDER_NAME: &str = "openai";

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI chat-completions client strategy.
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiProvider {
    /// Create a provider with the given credential, model, and request
    /// timeout.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            model,
            timeout,
        }
    }
}

impl ContentProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip_all, fields(model = %self.model))]
    fn attempt(&self, prompt: &str) -> Result<Fragment, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt },
            ],
            "temperature": 0.3,
        });

        let response = client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(Fragment::new(strip_code_fences(&content)))
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}
