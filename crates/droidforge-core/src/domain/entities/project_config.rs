//! Project configuration value object.
//!
//! [`ProjectConfig`] describes one generation request. It is constructed once
//! from caller input through a validating builder, passed by reference through
//! the pipeline, and never mutated.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::error::DomainError;

/// Default minimum Android SDK level.
pub const DEFAULT_MIN_SDK: u32 = 24;
/// Default target Android SDK level.
pub const DEFAULT_TARGET_SDK: u32 = 34;

/// Immutable configuration for a single project generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    app_name: String,
    package_name: String,
    description: String,
    min_sdk: u32,
    target_sdk: u32,
    prompt: String,
}

impl ProjectConfig {
    /// Start building a config.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    /// Display/directory name of the app.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Dotted Android package identifier.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Free-text description, may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn min_sdk(&self) -> u32 {
        self.min_sdk
    }

    pub fn target_sdk(&self) -> u32 {
        self.target_sdk
    }

    /// The natural-language UI request.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The package name as a directory path: every `.` becomes `/`.
    ///
    /// `com.example.demo` -> `com/example/demo`, placing the Kotlin source
    /// file N+1 directories deep for N dots.
    pub fn package_dir(&self) -> String {
        self.package_name.replace('.', "/")
    }

    /// Re-check the invariants this config was built under.
    ///
    /// Construction already guarantees them; this exists so services can
    /// validate configs that crossed a serialization boundary.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_app_name(&self.app_name)?;
        validate_package_name(&self.package_name)?;
        if self.prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(())
    }
}

/// Builder for [`ProjectConfig`]. All validation happens in [`Self::build`].
#[derive(Debug, Default, Clone)]
pub struct ProjectConfigBuilder {
    app_name: Option<String>,
    package_name: Option<String>,
    description: Option<String>,
    min_sdk: Option<u32>,
    target_sdk: Option<u32>,
    prompt: Option<String>,
}

impl ProjectConfigBuilder {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn min_sdk(mut self, level: u32) -> Self {
        self.min_sdk = Some(level);
        self
    }

    pub fn target_sdk(mut self, level: u32) -> Self {
        self.target_sdk = Some(level);
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Validate all fields and produce the immutable config.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let app_name = self
            .app_name
            .ok_or(DomainError::MissingRequiredField { field: "app_name" })?;
        validate_app_name(&app_name)?;

        let package_name = self.package_name.ok_or(DomainError::MissingRequiredField {
            field: "package_name",
        })?;
        validate_package_name(&package_name)?;

        let prompt = self
            .prompt
            .ok_or(DomainError::MissingRequiredField { field: "prompt" })?;
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }

        let min_sdk = self.min_sdk.unwrap_or(DEFAULT_MIN_SDK);
        let target_sdk = self.target_sdk.unwrap_or(DEFAULT_TARGET_SDK);
        // No ordering invariant is enforced between the two levels; surface
        // the suspicious combination in the logs without rejecting it.
        if min_sdk > target_sdk {
            warn!(min_sdk, target_sdk, "min_sdk exceeds target_sdk");
        }

        Ok(ProjectConfig {
            app_name,
            package_name,
            description: self.description.unwrap_or_default(),
            min_sdk,
            target_sdk,
            prompt,
        })
    }
}

// ── Field validation ──────────────────────────────────────────────────────────

fn validate_app_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

fn validate_package_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidPackageName {
            name: name.into(),
            reason: "package name cannot be empty".into(),
        });
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(DomainError::InvalidPackageName {
                name: name.into(),
                reason: "empty segment (consecutive or leading/trailing dots)".into(),
            });
        }
        let mut chars = segment.chars();
        let first = chars.next().unwrap();
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(DomainError::InvalidPackageName {
                name: name.into(),
                reason: format!("segment '{segment}' must start with a letter or underscore"),
            });
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DomainError::InvalidPackageName {
                name: name.into(),
                reason: format!("segment '{segment}' contains invalid characters"),
            });
        }
    }
    Ok(())
}
