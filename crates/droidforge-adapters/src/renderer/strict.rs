//! Strict variable substitution renderer.
//!
//! Expands `{{VARIABLE}}` placeholders against a [`RenderContext`]. Unlike a
//! lenient renderer, a reference to an undefined variable is a hard error:
//! silently rendering empty text would let template/context drift ship
//! broken projects.

use once_cell::sync::Lazy;
use regex::Regex;

use droidforge_core::{
    application::ports::TemplateRenderer,
    domain::{DomainError, RenderContext, Template},
    error::{DroidforgeError, DroidforgeResult},
};
use tracing::instrument;

/// Built-in variables are SCREAMING_SNAKE_CASE; anything else between double
/// braces is left untouched (it is template text, not a placeholder).
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("placeholder pattern is valid"));

/// Renderer that fails loudly on any undefined variable reference.
pub struct StrictRenderer;

impl StrictRenderer {
    /// Create a new strict renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StrictRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for StrictRenderer {
    #[instrument(skip_all, fields(template = %template.id))]
    fn render(&self, template: &Template, context: &RenderContext) -> DroidforgeResult<String> {
        // First pass: every referenced variable must be defined.
        for captures in PLACEHOLDER_RE.captures_iter(&template.content) {
            let variable = &captures[1];
            if !context.contains(variable) {
                return Err(DroidforgeError::Domain(DomainError::UndefinedVariable {
                    template: template.id.to_string(),
                    variable: variable.to_string(),
                }));
            }
        }

        // Second pass: substitute. Lookups cannot fail after the check above.
        let rendered = PLACEHOLDER_RE.replace_all(&template.content, |caps: &regex::Captures| {
            context.get(&caps[1]).unwrap_or_default().to_string()
        });

        Ok(rendered.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidforge_core::domain::TemplateId;

    fn ctx() -> RenderContext {
        RenderContext::empty()
            .with_variable("APP_NAME", "DemoApp")
            .with_variable("MIN_SDK", "24")
    }

    fn template(content: &str) -> Template {
        Template::new(TemplateId::new("test/template"), content)
    }

    #[test]
    fn substitutes_defined_variables() {
        let out = StrictRenderer::new()
            .render(&template("name={{APP_NAME}} sdk={{MIN_SDK}}"), &ctx())
            .unwrap();
        assert_eq!(out, "name=DemoApp sdk=24");
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let out = StrictRenderer::new()
            .render(&template("{{APP_NAME}}/{{APP_NAME}}"), &ctx())
            .unwrap();
        assert_eq!(out, "DemoApp/DemoApp");
    }

    #[test]
    fn undefined_variable_fails_loudly() {
        let err = StrictRenderer::new()
            .render(&template("hello {{NOT_DEFINED}}"), &ctx())
            .unwrap_err();
        assert!(matches!(
            err,
            DroidforgeError::Domain(DomainError::UndefinedVariable { ref variable, .. })
                if variable == "NOT_DEFINED"
        ));
    }

    #[test]
    fn content_without_placeholders_passes_through() {
        let literal = ".gradle\n/build\nlocal.properties\n";
        let out = StrictRenderer::new().render(&template(literal), &ctx()).unwrap();
        assert_eq!(out, literal);
    }

    #[test]
    fn lowercase_braces_are_not_placeholders() {
        // Kotlin/Gradle braces and non-screaming identifiers stay untouched.
        let content = "Button(onClick = { }) {{not_a_var}}";
        let out = StrictRenderer::new().render(&template(content), &ctx()).unwrap();
        assert_eq!(out, content);
    }
}
