//! Deterministic fallback strategy.
//!
//! Terminal element of every provider chain. Wraps the pure domain fallback
//! so the chain as a whole can never fail.

use droidforge_core::{
    application::ports::{ContentProvider, ProviderError},
    domain::{Fragment, fallback_fragment},
};

pub const PROVIDER_NAME: &str = "fallback";

/// Always-available local strategy; no credentials, no I/O.
pub struct FallbackProvider;

impl ContentProvider for FallbackProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn attempt(&self, prompt: &str) -> Result<Fragment, ProviderError> {
        Ok(fallback_fragment(prompt))
    }
}
