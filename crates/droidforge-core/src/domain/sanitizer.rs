//! Post-expansion sanitization of the application build script.
//!
//! Template content can be mutated out-of-band by the template-repair
//! assistant, which may introduce a Compose compiler version incompatible
//! with the pinned Kotlin toolchain. This pass forces the version back to the
//! known-good value after every expansion, unconditionally.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// The only Compose compiler extension version generated projects may carry.
pub const COMPOSE_COMPILER_VERSION: &str = "1.5.14";

static COMPILER_VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(kotlinCompilerExtensionVersion\s*=\s*")([^"]+)(")"#)
        .expect("compiler-version pattern is valid")
});

/// Rewrite any `kotlinCompilerExtensionVersion = "..."` assignment to the
/// pinned [`COMPOSE_COMPILER_VERSION`], leaving all other content untouched.
///
/// Pure string transform: no filesystem, no state. Content without the
/// assignment is returned borrowed and byte-identical.
pub fn pin_compose_compiler(content: &str) -> Cow<'_, str> {
    COMPILER_VERSION_RE.replace_all(content, format!("${{1}}{COMPOSE_COMPILER_VERSION}${{3}}"))
}
