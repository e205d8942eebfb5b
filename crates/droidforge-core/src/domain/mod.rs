// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Droidforge.
//!
//! This module contains pure business logic with ZERO I/O.
//! Filesystem, HTTP, and archive concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Deterministic**: Given a config and a fragment, every function in this
//!   module is a pure computation

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod fragment;
pub mod sanitizer;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    project_config::{DEFAULT_MIN_SDK, DEFAULT_TARGET_SDK, ProjectConfig, ProjectConfigBuilder},
    template::{
        APP_BUILD_SCRIPT, MappingEntry, RenderContext, Template, TemplateId, TemplateMapping,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use fragment::{
    FALLBACK_TITLE_MAX, Fragment, SYSTEM_INSTRUCTION, fallback_fragment, strip_code_fences,
};

pub use sanitizer::{COMPOSE_COMPILER_VERSION, pin_compose_compiler};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> ProjectConfig {
        ProjectConfig::builder()
            .app_name("DemoApp")
            .package_name("com.example.demo")
            .description("desc")
            .min_sdk(24)
            .target_sdk(34)
            .prompt("Simple screen with a title and a button")
            .build()
            .unwrap()
    }

    // ========================================================================
    // ProjectConfig Tests
    // ========================================================================

    #[test]
    fn config_builder_basic() {
        let config = demo_config();
        assert_eq!(config.app_name(), "DemoApp");
        assert_eq!(config.package_name(), "com.example.demo");
        assert_eq!(config.min_sdk(), 24);
        assert_eq!(config.target_sdk(), 34);
    }

    #[test]
    fn config_builder_defaults_sdk_levels() {
        let config = ProjectConfig::builder()
            .app_name("App")
            .package_name("com.example.app")
            .prompt("a screen")
            .build()
            .unwrap();
        assert_eq!(config.min_sdk(), DEFAULT_MIN_SDK);
        assert_eq!(config.target_sdk(), DEFAULT_TARGET_SDK);
        assert_eq!(config.description(), "");
    }

    #[test]
    fn config_builder_requires_app_name() {
        let result = ProjectConfig::builder()
            .package_name("com.example.app")
            .prompt("a screen")
            .build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::MissingRequiredField { field: "app_name" }
        );
    }

    #[test]
    fn config_builder_rejects_empty_prompt() {
        let result = ProjectConfig::builder()
            .app_name("App")
            .package_name("com.example.app")
            .prompt("   \n ")
            .build();
        assert_eq!(result.unwrap_err(), DomainError::EmptyPrompt);
    }

    #[test]
    fn config_builder_rejects_bad_app_names() {
        for bad in ["", ".hidden", "a/b", "a\\b"] {
            let result = ProjectConfig::builder()
                .app_name(bad)
                .package_name("com.example.app")
                .prompt("a screen")
                .build();
            assert!(
                matches!(result, Err(DomainError::InvalidAppName { .. })),
                "app name {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn config_builder_rejects_bad_package_names() {
        for bad in ["", "com..demo", ".com.demo", "com.1demo", "com.de-mo"] {
            let result = ProjectConfig::builder()
                .app_name("App")
                .package_name(bad)
                .prompt("a screen")
                .build();
            assert!(
                matches!(result, Err(DomainError::InvalidPackageName { .. })),
                "package name {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn config_builder_accepts_underscore_segments() {
        let config = ProjectConfig::builder()
            .app_name("App")
            .package_name("com._internal.demo_2")
            .prompt("a screen")
            .build();
        assert!(config.is_ok());
    }

    // min_sdk > target_sdk is suspicious but not rejected
    #[test]
    fn config_builder_allows_min_above_target() {
        let config = ProjectConfig::builder()
            .app_name("App")
            .package_name("com.example.app")
            .min_sdk(34)
            .target_sdk(24)
            .prompt("a screen")
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn package_dir_replaces_dots() {
        assert_eq!(demo_config().package_dir(), "com/example/demo");
    }

    #[test]
    fn package_dir_depth_is_dots_plus_one() {
        let config = ProjectConfig::builder()
            .app_name("App")
            .package_name("io.acme.apps.demo")
            .prompt("a screen")
            .build()
            .unwrap();
        // 3 dots -> 4 path components
        assert_eq!(config.package_dir().split('/').count(), 4);
    }

    // ========================================================================
    // Fallback Fragment Tests
    // ========================================================================

    #[test]
    fn fallback_is_pure() {
        let prompt = "Simple screen with a title and a button";
        assert_eq!(fallback_fragment(prompt), fallback_fragment(prompt));
    }

    #[test]
    fn fallback_embeds_prompt_as_title() {
        let fragment = fallback_fragment("A weather dashboard");
        assert!(fragment.as_str().contains("Text(\"A weather dashboard\""));
    }

    #[test]
    fn fallback_truncation_boundary() {
        let base: String = "x".repeat(79);
        let at_79 = fallback_fragment(&base);
        assert!(at_79.as_str().contains(&"x".repeat(79)));
        assert!(!at_79.as_str().contains(&"x".repeat(80)));

        let at_80 = fallback_fragment(&"x".repeat(80));
        assert!(at_80.as_str().contains(&"x".repeat(80)));
        assert!(!at_80.as_str().contains(&"x".repeat(81)));

        // The 81st character is cut exactly
        let at_81 = fallback_fragment(&"x".repeat(81));
        assert!(at_81.as_str().contains(&"x".repeat(80)));
        assert!(!at_81.as_str().contains(&"x".repeat(81)));
    }

    #[test]
    fn fallback_flattens_newlines() {
        let fragment = fallback_fragment("line one\nline two");
        assert!(fragment.as_str().contains("Text(\"line one line two\""));
    }

    #[test]
    fn fallback_truncates_before_flattening() {
        // A newline past the 80-char cut must not influence the title.
        let prompt = format!("{}\ntail", "y".repeat(80));
        let fragment = fallback_fragment(&prompt);
        assert!(fragment.as_str().contains(&"y".repeat(80)));
        assert!(!fragment.as_str().contains("tail"));
    }

    // ========================================================================
    // Code-Fence Stripping Tests
    // ========================================================================

    #[test]
    fn strip_fences_plain_text_is_trimmed_only() {
        assert_eq!(strip_code_fences("  Text(\"hi\")  \n"), "Text(\"hi\")");
    }

    #[test]
    fn strip_fences_with_language_tag() {
        let raw = "```kotlin\nText(\"hi\")\n```";
        assert_eq!(strip_code_fences(raw), "Text(\"hi\")");
    }

    #[test]
    fn strip_fences_without_language_tag() {
        let raw = "```\nText(\"hi\")\n```";
        assert_eq!(strip_code_fences(raw), "Text(\"hi\")");
    }

    #[test]
    fn strip_fences_drops_surrounding_prose() {
        let raw = "Here you go:\n```kotlin\nText(\"hi\")\n```\nEnjoy!";
        assert_eq!(strip_code_fences(raw), "Text(\"hi\")");
    }

    #[test]
    fn strip_fences_unterminated_fence_left_alone() {
        let raw = "```kotlin\nText(\"hi\")";
        assert_eq!(strip_code_fences(raw), raw.trim());
    }

    #[test]
    fn strip_fences_keeps_code_resembling_a_tag() {
        // First line is real code, not a language tag.
        let raw = "```\nText(\"hi\")\nSpacer()\n```";
        assert_eq!(strip_code_fences(raw), "Text(\"hi\")\nSpacer()");
    }

    // ========================================================================
    // Sanitizer Tests
    // ========================================================================

    #[test]
    fn sanitizer_pins_compiler_version() {
        let rendered = "composeOptions {\n    kotlinCompilerExtensionVersion = \"9.9.9\"\n}\n";
        let pinned = pin_compose_compiler(rendered);
        assert!(pinned.contains("kotlinCompilerExtensionVersion = \"1.5.14\""));
        assert!(!pinned.contains("9.9.9"));
    }

    #[test]
    fn sanitizer_handles_whitespace_variants() {
        let rendered = "kotlinCompilerExtensionVersion   =\"2.0.0\"";
        assert_eq!(
            pin_compose_compiler(rendered),
            "kotlinCompilerExtensionVersion   =\"1.5.14\""
        );
    }

    #[test]
    fn sanitizer_leaves_other_content_byte_identical() {
        let rendered = "android {\n    compileSdk = 34\n    \
                        kotlinCompilerExtensionVersion = \"0.1.0\"\n    namespace = \"x\"\n}\n";
        let pinned = pin_compose_compiler(rendered);
        let expected = rendered.replace("0.1.0", COMPOSE_COMPILER_VERSION);
        assert_eq!(pinned, expected);
    }

    #[test]
    fn sanitizer_is_noop_without_the_key() {
        let rendered = "plugins { id(\"com.android.application\") }\n";
        let pinned = pin_compose_compiler(rendered);
        assert_eq!(pinned, rendered);
        assert!(matches!(pinned, std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn sanitizer_already_pinned_is_unchanged_in_content() {
        let rendered = "kotlinCompilerExtensionVersion = \"1.5.14\"";
        assert_eq!(pin_compose_compiler(rendered), rendered);
    }

    // ========================================================================
    // Render Context Tests
    // ========================================================================

    #[test]
    fn render_context_exposes_all_builtins() {
        let fragment = fallback_fragment("a screen");
        let ctx = RenderContext::for_project(&demo_config(), &fragment);

        assert_eq!(ctx.get("APP_NAME"), Some("DemoApp"));
        assert_eq!(ctx.get("PACKAGE_NAME"), Some("com.example.demo"));
        assert_eq!(ctx.get("PACKAGE_DIR"), Some("com/example/demo"));
        assert_eq!(ctx.get("DESCRIPTION"), Some("desc"));
        assert_eq!(ctx.get("MIN_SDK"), Some("24"));
        assert_eq!(ctx.get("TARGET_SDK"), Some("34"));
        assert_eq!(ctx.get("COMPOSE_CONTENT"), Some(fragment.as_str()));
    }

    #[test]
    fn render_context_custom_variables() {
        let ctx = RenderContext::empty().with_variable("AUTHOR", "Alice");
        assert_eq!(ctx.get("AUTHOR"), Some("Alice"));
        assert!(!ctx.contains("UNKNOWN"));
    }

    // ========================================================================
    // Template Mapping Tests
    // ========================================================================

    #[test]
    fn standard_mapping_has_fourteen_entries() {
        assert_eq!(TemplateMapping::standard().len(), 14);
    }

    #[test]
    fn standard_mapping_order_is_stable() {
        let mapping = TemplateMapping::standard();
        let first = &mapping.entries()[0];
        let last = &mapping.entries()[13];
        assert_eq!(first.template.as_str(), "root/settings.gradle.kts");
        assert_eq!(first.output, "settings.gradle.kts");
        assert_eq!(
            last.output,
            "app/src/main/res/drawable/ic_launcher_foreground.xml"
        );
    }

    #[test]
    fn standard_mapping_contains_sanitized_template() {
        let mapping = TemplateMapping::standard();
        assert!(
            mapping
                .entries()
                .iter()
                .any(|e| e.template.as_str() == APP_BUILD_SCRIPT)
        );
    }

    #[test]
    fn activity_output_path_is_parameterized() {
        let mapping = TemplateMapping::standard();
        let activity = mapping
            .entries()
            .iter()
            .find(|e| e.template.as_str() == "app/src/main/java/MainActivity.kt")
            .unwrap();
        assert!(activity.output.contains("{{PACKAGE_DIR}}"));
    }

    // ========================================================================
    // Relative Path Tests
    // ========================================================================

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("app/build.gradle.kts").is_ok());
    }
}
