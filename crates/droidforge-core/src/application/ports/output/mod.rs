//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `droidforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Fragment, RenderContext, Template, TemplateId};
use crate::error::DroidforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `droidforge_adapters::filesystem::LocalFilesystem` (production)
/// - `droidforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Rendered output lives in request-scoped temporary directories; the
///   `create_temp_dir` names must be unique across concurrent requests.
/// - All generated files are plain text.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DroidforgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> DroidforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> DroidforgeResult<()>;

    /// Create a fresh uniquely-named directory for one request.
    fn create_temp_dir(&self, prefix: &str) -> DroidforgeResult<PathBuf>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `droidforge_adapters::template_store::InMemoryStore` (built-in set)
/// - `droidforge_adapters::template_store::DirectoryStore` (user-editable set)
pub trait TemplateStore: Send + Sync {
    /// Get a specific template by ID.
    fn get(&self, id: &TemplateId) -> DroidforgeResult<Template>;

    /// List all available template ids.
    fn list(&self) -> DroidforgeResult<Vec<TemplateId>>;

    /// Insert or update a template.
    fn insert(&self, template: Template) -> DroidforgeResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `droidforge_adapters::renderer::StrictRenderer`
///
/// Strict expansion: a reference to an undefined context variable is a hard
/// error, never an empty substitution. This guards against drift between the
/// template set and the render context.
pub trait TemplateRenderer: Send + Sync {
    /// Render a template's content against a context.
    fn render(&self, template: &Template, context: &RenderContext) -> DroidforgeResult<String>;
}

/// Port for one content-provider strategy.
///
/// The fallback chain in [`crate::application::FragmentService`] holds an
/// ordered list of these and stops at the first success. An implementation
/// owns its own retry policy; the chain never retries.
#[cfg_attr(test, mockall::automock)]
pub trait ContentProvider: Send + Sync {
    /// Short provider name for logs (`gemini`, `openai`, `fallback`).
    fn name(&self) -> &'static str;

    /// Attempt to produce a UI fragment for the prompt.
    fn attempt(&self, prompt: &str) -> Result<Fragment, ProviderError>;
}

/// Failures a content provider can report to the chain.
///
/// None of these ever reach the end caller: the chain absorbs them and falls
/// through to the deterministic fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The remote endpoint signalled rate limiting (HTTP 429).
    #[error("provider rate-limited the request")]
    RateLimited,

    /// Transport-level failure (connect, timeout, TLS, malformed body).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint returned a non-success status other than 429.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered but produced no usable candidate.
    #[error("provider returned no usable candidate")]
    EmptyResponse,

    /// The provider cannot run (no credential configured).
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Port for archive assembly.
///
/// Implemented by `droidforge_adapters::archive::ZipArchiver`. Walks every
/// file under the given root and returns a complete deflate-compressed zip
/// as in-memory bytes, with entry names relative to the root. All-or-nothing:
/// an error yields no bytes.
pub trait Archiver: Send + Sync {
    fn archive(&self, root: &Path) -> DroidforgeResult<Vec<u8>>;
}
