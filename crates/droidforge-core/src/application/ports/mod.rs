//! Application ports (traits).
//!
//! Only driven (output) ports exist: the CLI drives the application services
//! directly through their public methods.

pub mod output;

pub use output::{
    Archiver, ContentProvider, Filesystem, ProviderError, TemplateRenderer, TemplateStore,
};

#[cfg(test)]
pub use output::MockContentProvider;
