//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`DROIDFORGE_*`, plus the provider key
//!    variables `GEMINI_API_KEY` / `OPENAI_API_KEY`)
//! 3. Config file (TOML, `--config` or the default location)
//! 4. Built-in defaults (always present)
//!
//! This is the single place in the binary that reads process environment.
//! Provider adapters receive credentials as explicit constructor inputs.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use droidforge_adapters::{
    ProviderSettings,
    providers::{DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL},
};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content provider settings.
    pub providers: ProvidersConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Provider credentials.  Usually left out of the config file and
    /// supplied via `GEMINI_API_KEY` / `OPENAI_API_KEY`.
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_model: String,
    /// Per-request timeout for provider calls, in seconds.
    pub timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            openai_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory-backed template set; `None` selects the built-ins.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file (if any), then
    /// `DROIDFORGE_*` environment variables, then the plain provider key
    /// variables.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = config_file.cloned().unwrap_or_else(Self::config_path);

        let mut cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            // DROIDFORGE_PROVIDERS__GEMINI_MODEL=... style overrides.
            .add_source(config::Environment::with_prefix("DROIDFORGE").separator("__"))
            .build()?
            .try_deserialize()?;

        // The provider key variables everyone actually sets.
        if cfg.providers.gemini_api_key.is_none() {
            cfg.providers.gemini_api_key = non_empty_env("GEMINI_API_KEY");
        }
        if cfg.providers.openai_api_key.is_none() {
            cfg.providers.openai_api_key = non_empty_env("OPENAI_API_KEY");
        }
        if let Some(model) = non_empty_env("GEMINI_MODEL") {
            cfg.providers.gemini_model = model;
        }
        if let Some(model) = non_empty_env("OPENAI_MODEL") {
            cfg.providers.openai_model = model;
        }

        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.droidforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "droidforge", "droidforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".droidforge.toml"))
    }

    /// Translate the provider section into the settings object injected into
    /// the adapter layer.
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            gemini_api_key: self.providers.gemini_api_key.clone(),
            gemini_model: self.providers.gemini_model.clone(),
            openai_api_key: self.providers.openai_api_key.clone(),
            openai_model: self.providers.openai_model.clone(),
            timeout: Duration::from_secs(self.providers.timeout_secs),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_models_are_set() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.providers.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.providers.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(cfg.providers.timeout_secs, 60);
    }

    #[test]
    fn default_has_no_credentials() {
        let cfg = AppConfig::default();
        let settings = cfg.provider_settings();
        assert!(!settings.has_gemini());
        assert!(!settings.has_openai());
    }

    #[test]
    fn provider_settings_carries_timeout() {
        let mut cfg = AppConfig::default();
        cfg.providers.timeout_secs = 5;
        assert_eq!(cfg.provider_settings().timeout, Duration::from_secs(5));
    }

    #[test]
    fn config_path_is_non_empty() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
