//! UI fragments and the deterministic local fallback.
//!
//! A [`Fragment`] is the Compose snippet inserted into the single
//! `{{COMPOSE_CONTENT}}` template slot. It is opaque text: the only
//! processing ever applied is code-fence stripping of provider responses.

use std::fmt;

/// Maximum number of characters of the prompt used as the fallback title.
pub const FALLBACK_TITLE_MAX: usize = 80;

/// System instruction sent to every content provider.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert Android developer using Jetpack Compose. \
     Given a user prompt, you output ONLY the Kotlin code for a Composable function body \
     (inside setContent) that renders the requested UI. Avoid imports, package lines, and \
     avoid the @Composable declaration itself.";

/// The plain-text Compose code fragment for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Deterministic fallback fragment: a pure function of the prompt.
///
/// The prompt, truncated to [`FALLBACK_TITLE_MAX`] characters with newlines
/// flattened to spaces, appears verbatim as the screen title. Same prompt in,
/// byte-identical fragment out - this is both the guaranteed last resort of
/// the provider chain and a test fixture.
pub fn fallback_fragment(prompt: &str) -> Fragment {
    let title: String = prompt
        .chars()
        .take(FALLBACK_TITLE_MAX)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    Fragment(format!(
        "Column(modifier = Modifier.fillMaxSize().padding(16.dp), \
         verticalArrangement = Arrangement.spacedBy(12.dp)) {{\n  \
         Text(\"{title}\", style = MaterialTheme.typography.headlineMedium)\n  \
         Text(\"This screen was generated without an external provider (fallback).\", \
         style = MaterialTheme.typography.bodyMedium)\n  \
         Button(onClick = {{ }}) {{ Text(\"Action\") }}\n}}"
    ))
}

/// Remove code-fence markup from a provider response.
///
/// Rule: if the text contains a fenced block, keep the first block's
/// interior, drop an optional leading language-tag line, and trim
/// surrounding whitespace. Text without a complete fence pair is returned
/// trimmed but otherwise unchanged.
pub fn strip_code_fences(text: &str) -> String {
    let parts: Vec<&str> = text.split("```").collect();
    if parts.len() < 3 {
        return text.trim().to_string();
    }

    let block = parts[1];
    let interior = match block.split_once('\n') {
        Some((first_line, rest)) if is_language_tag(first_line.trim()) => rest,
        _ => block,
    };
    interior.trim().to_string()
}

/// A language tag is a single short alphanumeric word (`kotlin`, `json`, ...).
fn is_language_tag(s: &str) -> bool {
    !s.is_empty() && s.len() <= 16 && s.chars().all(|c| c.is_ascii_alphanumeric())
}
