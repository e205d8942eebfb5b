//! Fragment Service - the content-provider fallback chain.
//!
//! Holds an explicit ordered list of provider strategies and iterates them,
//! stopping at the first success. When the list is exhausted (or empty) the
//! deterministic local fallback takes over, so [`FragmentService::fetch`]
//! never fails: the user-visible behavior is "always eventually get a
//! fragment", possibly a lower-quality one.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::ContentProvider,
    domain::{Fragment, fallback_fragment},
};

/// Ordered provider chain with a guaranteed deterministic tail.
pub struct FragmentService {
    providers: Vec<Box<dyn ContentProvider>>,
}

impl FragmentService {
    /// Create a service over an ordered list of provider strategies.
    ///
    /// The list may be empty; `fetch` then always answers with the local
    /// fallback.
    pub fn new(providers: Vec<Box<dyn ContentProvider>>) -> Self {
        Self { providers }
    }

    /// Number of strategies in the chain.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Obtain a UI fragment for the prompt. Infallible by construction.
    ///
    /// Provider failures (rate limits exhausted, transport errors, empty
    /// responses) are logged and absorbed - they must never surface to the
    /// caller as request failures.
    #[instrument(skip_all)]
    pub fn fetch(&self, prompt: &str) -> Fragment {
        for provider in &self.providers {
            match provider.attempt(prompt) {
                Ok(fragment) => {
                    info!(provider = provider.name(), "fragment obtained");
                    return fragment;
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next strategy"
                    );
                }
            }
        }

        debug!("provider chain exhausted, using deterministic fallback");
        fallback_fragment(prompt)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
