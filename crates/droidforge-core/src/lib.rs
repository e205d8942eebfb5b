//! Droidforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Droidforge
//! Android project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        droidforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, FragmentService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Renderer, Filesystem, Provider, │
//! │               Archiver)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   droidforge-adapters (Infrastructure)  │
//! │ (InMemoryStore, LocalFilesystem, Gemini │
//! │     and OpenAI clients, ZipArchiver)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectConfig, TemplateMapping, the    │
//! │   fallback fragment, the sanitizer)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use droidforge_core::{
//!     application::{FragmentService, GenerateService},
//!     domain::ProjectConfig,
//! };
//!
//! // 1. Describe the project
//! let config = ProjectConfig::builder()
//!     .app_name("DemoApp")
//!     .package_name("com.example.demo")
//!     .prompt("Simple screen with a title and a button")
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(store, renderer, filesystem, archiver, fragments);
//! let zip_bytes = service.generate(&config).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FragmentService, GenerateService,
        ports::{Archiver, ContentProvider, Filesystem, ProviderError, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Fragment, ProjectConfig, ProjectConfigBuilder, RenderContext, Template, TemplateId,
        TemplateMapping,
    };
    pub use crate::error::{DroidforgeError, DroidforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
