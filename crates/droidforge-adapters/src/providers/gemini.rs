//! Google Gemini content provider.
//!
//! Calls the public `generateContent` REST endpoint with a low sampling
//! temperature and extracts the first candidate's first text part. This is
//! the retry-bearing strategy of the chain: HTTP 429 and transport-level
//! failures are retried on a fixed backoff schedule; after the schedule is
//! exhausted the error propagates to the chain, which falls through to the
//! next strategy.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use droidforge_core::{
    application::ports::{ContentProvider, ProviderError},
    domain::{Fragment, SYSTEM_INSTRUCTION, strip_code_fences},
};

pub const PROVIDER_NAME: &str = "gemini";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fixed wait times between attempts. Bounded by construction: one initial
/// attempt plus one retry per entry.
const BACKOFF_SCHEDULE: [Duration; 4] = [
    Duration::from_secs(2),
    Duration::from_secs(5),
    Duration::from_secs(10),
    Duration::from_secs(20),
];

/// Injectable clock seam so retry tests don't sleep for real.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by `std::thread::sleep`.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Gemini REST client strategy.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    timeout: Duration,
    sleeper: Box<dyn Sleeper>,
}

impl GeminiProvider {
    /// Create a provider with the given credential, model, and request
    /// timeout.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            model,
            timeout,
            sleeper: Box::new(ThreadSleeper),
        }
    }

    /// Single request/response cycle, no retry.
    fn call_once(&self, prompt: &str) -> Result<Fragment, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let url = format!(
            "{API_BASE}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("{SYSTEM_INSTRUCTION}\n\n{prompt}") }],
            }],
            "generationConfig": { "temperature": 0.1 },
        });

        let response = client
            .post(&url)
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

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(Fragment::new(strip_code_fences(&text)))
    }
}

impl ContentProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip_all, fields(model = %self.model))]
    fn attempt(&self, prompt: &str) -> Result<Fragment, ProviderError> {
        run_with_backoff(&BACKOFF_SCHEDULE, self.sleeper.as_ref(), || {
            self.call_once(prompt)
        })
    }
}

/// Execute `op`, retrying rate-limit and transport failures on the given
/// schedule. Total attempts are bounded at `schedule.len() + 1`; any other
/// error aborts immediately.
fn run_with_backoff<T>(
    schedule: &[Duration],
    sleeper: &dyn Sleeper,
    mut op: impl FnMut() -> Result<T, ProviderError>,
) -> Result<T, ProviderError> {
    let mut attempt = 0;
    loop {
        match op() {
            Ok(value) => {
                debug!(attempt = attempt + 1, "provider call succeeded");
                return Ok(value);
            }
            Err(e @ (ProviderError::RateLimited | ProviderError::Transport(_)))
                if attempt < schedule.len() =>
            {
                let delay = schedule[attempt];
                warn!(
                    attempt = attempt + 1,
                    delay_s = delay.as_secs(),
                    error = %e,
                    "retryable provider failure, backing off"
                );
                sleeper.sleep(delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
