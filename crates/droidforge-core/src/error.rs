//! Unified error handling for Droidforge Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Droidforge Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// droidforge-core, providing a unified interface for error handling.
///
/// Provider failures are deliberately absent: they are absorbed by the
/// fallback chain inside [`crate::application::FragmentService`] and never
/// reach a caller of the core API.
#[derive(Debug, Error, Clone)]
pub enum DroidforgeError {
    /// Errors from the domain layer (invalid project configuration,
    /// strict-expansion failures).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DroidforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Droidforge".into(),
                "Please report this issue at: https://github.com/droidforge/droidforge/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid caller input (bad project configuration).
    Validation,
    /// Template store / mapping mismatch - not a user input problem.
    Template,
    /// A requested resource was not found.
    NotFound,
    /// Setup problem (store root missing, adapter misconfigured).
    Configuration,
    /// Internal/system failure.
    Internal,
}

/// Convenient result type alias.
pub type DroidforgeResult<T> = Result<T, DroidforgeError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> DroidforgeResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> DroidforgeResult<T> {
        self.map_err(|e| DroidforgeError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
