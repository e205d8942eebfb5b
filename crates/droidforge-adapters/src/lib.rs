//! Infrastructure adapters for Droidforge.
//!
//! This crate implements the ports defined in
//! `droidforge_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod archive;
pub mod builtin_templates;
pub mod filesystem;
pub mod providers;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use archive::ZipArchiver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use providers::{ProviderSelector, ProviderSettings, build_chain};
pub use renderer::StrictRenderer;
pub use template_store::{DirectoryStore, InMemoryStore};
