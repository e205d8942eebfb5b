//! Content provider adapters and chain assembly.
//!
//! Each provider implements the `ContentProvider` port as one strategy of an
//! ordered chain. Credentials are explicit constructor inputs
//! ([`ProviderSettings`]) - adapters never read process environment, so tests
//! can substitute presence/absence freely.

pub mod fallback;
pub mod gemini;
pub mod openai;

pub use fallback::FallbackProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use droidforge_core::application::ports::ContentProvider;

/// Default Gemini model for fragment generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Default OpenAI model for fragment generation.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
/// Default per-request timeout for provider calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Which provider strategy the chain should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderSelector {
    /// First configured provider wins: Gemini, then OpenAI, then fallback.
    #[default]
    Auto,
    /// Only Gemini (if configured), then fallback.
    Gemini,
    /// Only OpenAI (if configured), then fallback.
    OpenAi,
    /// Deterministic local fallback only - no remote calls.
    Fallback,
}

impl FromStr for ProviderSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "fallback" => Ok(Self::Fallback),
            other => Err(format!(
                "unknown provider '{other}' (expected auto, gemini, openai, or fallback)"
            )),
        }
    }
}

impl fmt::Display for ProviderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Gemini => write!(f, "gemini"),
            Self::OpenAi => write!(f, "openai"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Explicit provider configuration, injected at construction time.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderSettings {
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Assemble the ordered provider chain for a selector.
///
/// The deterministic fallback strategy always terminates the list, so the
/// chain as a whole cannot fail. An explicit selector whose credential is
/// absent yields a fallback-only chain rather than an error.
pub fn build_chain(
    selector: ProviderSelector,
    settings: &ProviderSettings,
) -> Vec<Box<dyn ContentProvider>> {
    let mut chain: Vec<Box<dyn ContentProvider>> = Vec::new();

    let gemini = |chain: &mut Vec<Box<dyn ContentProvider>>| {
        if let Some(key) = settings.gemini_api_key.as_deref().filter(|k| !k.is_empty()) {
            chain.push(Box::new(GeminiProvider::new(
                key.to_string(),
                settings.gemini_model.clone(),
                settings.timeout,
            )));
        }
    };
    let openai = |chain: &mut Vec<Box<dyn ContentProvider>>| {
        if let Some(key) = settings.openai_api_key.as_deref().filter(|k| !k.is_empty()) {
            chain.push(Box::new(OpenAiProvider::new(
                key.to_string(),
                settings.openai_model.clone(),
                settings.timeout,
            )));
        }
    };

    match selector {
        ProviderSelector::Auto => {
            gemini(&mut chain);
            openai(&mut chain);
        }
        ProviderSelector::Gemini => gemini(&mut chain),
        ProviderSelector::OpenAi => openai(&mut chain),
        ProviderSelector::Fallback => {}
    }

    chain.push(Box::new(FallbackProvider));
    debug!(selector = %selector, strategies = chain.len(), "provider chain assembled");
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chain: &[Box<dyn ContentProvider>]) -> Vec<&'static str> {
        chain.iter().map(|p| p.name()).collect()
    }

    fn full_settings() -> ProviderSettings {
        ProviderSettings {
            gemini_api_key: Some("g-key".into()),
            openai_api_key: Some("o-key".into()),
            ..ProviderSettings::default()
        }
    }

    #[test]
    fn auto_with_no_credentials_is_fallback_only() {
        let chain = build_chain(ProviderSelector::Auto, &ProviderSettings::default());
        assert_eq!(names(&chain), ["fallback"]);
    }

    #[test]
    fn auto_prefers_gemini_then_openai() {
        let chain = build_chain(ProviderSelector::Auto, &full_settings());
        assert_eq!(names(&chain), ["gemini", "openai", "fallback"]);
    }

    #[test]
    fn explicit_selector_skips_other_providers() {
        let chain = build_chain(ProviderSelector::OpenAi, &full_settings());
        assert_eq!(names(&chain), ["openai", "fallback"]);
    }

    #[test]
    fn explicit_selector_without_credential_degrades_to_fallback() {
        let chain = build_chain(ProviderSelector::Gemini, &ProviderSettings::default());
        assert_eq!(names(&chain), ["fallback"]);
    }

    #[test]
    fn fallback_selector_never_builds_remote_strategies() {
        let chain = build_chain(ProviderSelector::Fallback, &full_settings());
        assert_eq!(names(&chain), ["fallback"]);
    }

    #[test]
    fn empty_string_credential_counts_as_absent() {
        let settings = ProviderSettings {
            gemini_api_key: Some(String::new()),
            ..ProviderSettings::default()
        };
        assert!(!settings.has_gemini());
        let chain = build_chain(ProviderSelector::Auto, &settings);
        assert_eq!(names(&chain), ["fallback"]);
    }

    #[test]
    fn selector_parses_case_insensitively() {
        assert_eq!(
            "GEMINI".parse::<ProviderSelector>().unwrap(),
            ProviderSelector::Gemini
        );
        assert!("claude".parse::<ProviderSelector>().is_err());
    }
}
