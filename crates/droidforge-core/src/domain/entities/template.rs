//! Template domain model.
//!
//! Templates are the central concept in Droidforge: the generated Android
//! project is nothing but a fixed set of text templates expanded against one
//! [`RenderContext`].
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Template Domain                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateId (Value Object)   - logical path, e.g.           │
//! │                                "app/build.gradle.kts"       │
//! │  Template (Entity)           - id + parameterized content   │
//! │  TemplateMapping (Value Obj) - ordered id -> output-path    │
//! │                                pairs, fixed at build time   │
//! │  RenderContext (Value Obj)   - {{VARIABLE}} substitutions   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//!
//! ### 1. Why is the mapping fixed rather than discovered?
//!
//! The generator supports exactly one Android skeleton. Discovering arbitrary
//! templates would silently widen the contract between the store and the
//! context; a fixed ordered list keeps "template added" an explicit, reviewed
//! change. (The external template-repair assistant *does* discover all
//! templates for editing purposes, but rendering never does.)
//!
//! ### 2. Why can output paths contain variables?
//!
//! Exactly one output path depends on request data: the Kotlin activity file
//! lives under the package directory
//! (`app/src/main/java/{{PACKAGE_DIR}}/MainActivity.kt`). Running output
//! paths through the same strict expansion as content keeps that rule in one
//! place instead of special-casing the activity.
//!
//! ### 3. Why `SCREAMING_SNAKE_CASE` variables?
//!
//! Built-in variables use a reserved casing so template authors can spot them
//! instantly, and so future user-defined variables (snake_case) cannot
//! collide.

use std::collections::HashMap;
use std::fmt;

use super::project_config::ProjectConfig;
use crate::domain::fragment::Fragment;

/// Logical identifier of a template: its path inside the template set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A template: logical id plus parameterized text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub content: String,
}

impl Template {
    pub fn new(id: impl Into<TemplateId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// The template that receives the post-expansion compiler-version pin.
pub const APP_BUILD_SCRIPT: &str = "app/build.gradle.kts";

/// One entry of the fixed mapping: which template renders to which
/// project-relative output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub template: TemplateId,
    /// Output path, itself subject to strict expansion.
    pub output: &'static str,
}

/// Static, ordered mapping from template id to output path.
///
/// Fixed at build time; adding or removing a template requires updating this
/// mapping and the template set in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMapping {
    entries: Vec<MappingEntry>,
}

impl TemplateMapping {
    /// The standard Android (Gradle + Jetpack Compose) skeleton: 14 files.
    pub fn standard() -> Self {
        let pairs: [(&str, &str); 14] = [
            ("root/settings.gradle.kts", "settings.gradle.kts"),
            ("root/build.gradle.kts", "build.gradle.kts"),
            ("root/gradle.properties", "gradle.properties"),
            ("root/gitignore", ".gitignore"),
            (APP_BUILD_SCRIPT, "app/build.gradle.kts"),
            (
                "app/src/main/AndroidManifest.xml",
                "app/src/main/AndroidManifest.xml",
            ),
            (
                "app/src/main/java/MainActivity.kt",
                "app/src/main/java/{{PACKAGE_DIR}}/MainActivity.kt",
            ),
            (
                "app/src/main/res/values/strings.xml",
                "app/src/main/res/values/strings.xml",
            ),
            (
                "app/src/main/res/values/themes.xml",
                "app/src/main/res/values/themes.xml",
            ),
            (
                "app/src/main/res/values/colors.xml",
                "app/src/main/res/values/colors.xml",
            ),
            (
                "app/src/main/res/mipmap-anydpi-v26/ic_launcher.xml",
                "app/src/main/res/mipmap-anydpi-v26/ic_launcher.xml",
            ),
            (
                "app/src/main/res/mipmap-anydpi-v26/ic_launcher_round.xml",
                "app/src/main/res/mipmap-anydpi-v26/ic_launcher_round.xml",
            ),
            (
                "app/src/main/res/values/ic_launcher_background.xml",
                "app/src/main/res/values/ic_launcher_background.xml",
            ),
            (
                "app/src/main/res/drawable/ic_launcher_foreground.xml",
                "app/src/main/res/drawable/ic_launcher_foreground.xml",
            ),
        ];

        Self {
            entries: pairs
                .into_iter()
                .map(|(template, output)| MappingEntry {
                    template: TemplateId::new(template),
                    output,
                })
                .collect(),
        }
    }

    /// Entries in their stable rendering order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateMapping {
    fn default() -> Self {
        Self::standard()
    }
}

/// Context for template rendering.
///
/// A flat map of substitution variables shared by every template of one
/// request. Immutable after creation - transformations create new instances
/// (see [`Self::with_variable`]).
///
/// ## Built-in Variables
///
/// | Variable          | Example                  | Source            |
/// |-------------------|--------------------------|-------------------|
/// | `APP_NAME`        | "DemoApp"                | User input        |
/// | `PACKAGE_NAME`    | "com.example.demo"       | User input        |
/// | `PACKAGE_DIR`     | "com/example/demo"       | Computed          |
/// | `DESCRIPTION`     | "A demo app"             | User input        |
/// | `MIN_SDK`         | "24"                     | User input        |
/// | `TARGET_SDK`      | "34"                     | User input        |
/// | `COMPOSE_CONTENT` | Compose snippet          | Provider/fallback |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the full per-request context: config fields, the computed
    /// package directory, and the UI fragment.
    pub fn for_project(config: &ProjectConfig, fragment: &Fragment) -> Self {
        let mut vars = HashMap::new();
        vars.insert("APP_NAME".to_string(), config.app_name().to_string());
        vars.insert("PACKAGE_NAME".to_string(), config.package_name().to_string());
        vars.insert("PACKAGE_DIR".to_string(), config.package_dir());
        vars.insert("DESCRIPTION".to_string(), config.description().to_string());
        vars.insert("MIN_SDK".to_string(), config.min_sdk().to_string());
        vars.insert("TARGET_SDK".to_string(), config.target_sdk().to_string());
        vars.insert("COMPOSE_CONTENT".to_string(), fragment.as_str().to_string());
        Self { variables: vars }
    }

    /// An empty context (test scaffolding and custom template sets).
    pub fn empty() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Whether the variable is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// Iterate over all defined variables (unspecified order).
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
