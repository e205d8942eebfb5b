//! Domain entities and value objects.

pub mod common;
pub mod project_config;
pub mod template;

pub use common::RelativePath;
pub use project_config::{DEFAULT_MIN_SDK, DEFAULT_TARGET_SDK, ProjectConfig, ProjectConfigBuilder};
pub use template::{
    APP_BUILD_SCRIPT, MappingEntry, RenderContext, Template, TemplateId, TemplateMapping,
};
