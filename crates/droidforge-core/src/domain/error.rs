// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors (invalid caller input)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    // ========================================================================
    // Template Errors (store/mapping drift, not user input)
    // ========================================================================
    #[error("Template '{template}' references undefined variable '{variable}'")]
    UndefinedVariable { template: String, variable: String },

    #[error("Template '{template_id}' has no content")]
    EmptyTemplate { template_id: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("The '{}' field is required", field),
                "Use --help for the full list of flags".into(),
            ],
            Self::InvalidAppName { name, reason } => vec![
                format!("App name '{}' is invalid: {}", name, reason),
                "Use a simple directory-safe name like 'DemoApp'".into(),
            ],
            Self::InvalidPackageName { name, reason } => vec![
                format!("Package name '{}' is invalid: {}", name, reason),
                "Use dotted segments like 'com.example.demo'".into(),
                "Each segment must start with a letter or underscore".into(),
            ],
            Self::EmptyPrompt => vec![
                "Describe the UI you want, e.g. 'A todo list with an add button'".into(),
            ],
            Self::UndefinedVariable { template, variable } => vec![
                format!(
                    "Template '{}' uses '{{{{{}}}}}' which is not part of the render context",
                    template, variable
                ),
                "The template set and the context must change in lockstep".into(),
            ],
            Self::EmptyTemplate { template_id } => vec![
                format!("Template '{}' is empty or corrupted", template_id),
                "Restore the template file or fall back to the built-in set".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidAppName { .. }
            | Self::InvalidPackageName { .. }
            | Self::EmptyPrompt => ErrorCategory::Validation,
            Self::UndefinedVariable { .. } | Self::EmptyTemplate { .. } => ErrorCategory::Template,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}
