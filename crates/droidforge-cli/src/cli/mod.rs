//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "droidforge",
    bin_name = "droidforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f916} Prompt-to-project Android scaffolding",
    long_about = "Droidforge turns a natural-language description into a \
                  buildable Android project skeleton (Gradle + Jetpack \
                  Compose), packaged as a zip.",
    after_help = "EXAMPLES:\n\
        \x20 droidforge gen -n DemoApp -p com.example.demo --prompt \"Todo list with an add button\"\n\
        \x20 droidforge gen -n Shop -p io.acme.shop --provider fallback -o shop.zip\n\
        \x20 droidforge templates\n\
        \x20 droidforge completions bash > /usr/share/bash-completion/completions/droidforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an Android project zip from a prompt.
    #[command(
        visible_alias = "g",
        about = "Generate an Android project",
        after_help = "EXAMPLES:\n\
            \x20 droidforge gen -n DemoApp -p com.example.demo --prompt \"Simple screen with a title and a button\"\n\
            \x20 droidforge gen -n News -p com.example.news --min-sdk 26 --target-sdk 34 --prompt \"Article list\"\n\
            \x20 droidforge gen -n Lab -p com.example.lab --templates-dir ./templates --prompt \"Login form\""
    )]
    Gen(GenArgs),

    /// List the files the generator produces.
    #[command(
        visible_alias = "ls",
        about = "List the template set",
        after_help = "EXAMPLES:\n\
            \x20 droidforge templates"
    )]
    Templates(TemplatesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 droidforge completions bash > ~/.local/share/bash-completion/completions/droidforge\n\
            \x20 droidforge completions zsh  > ~/.zfunc/_droidforge\n\
            \x20 droidforge completions fish > ~/.config/fish/completions/droidforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `droidforge gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Application display/directory name.
    #[arg(
        short = 'n',
        long = "app-name",
        value_name = "NAME",
        help = "Application name"
    )]
    pub app_name: String,

    /// Android package name.
    #[arg(
        short = 'p',
        long = "package-name",
        value_name = "PACKAGE",
        help = "Android package name, e.g. com.example.app"
    )]
    pub package_name: String,

    /// Natural-language description of the UI/behavior.
    #[arg(
        long = "prompt",
        value_name = "TEXT",
        help = "What the generated screen should do"
    )]
    pub prompt: String,

    /// Short project description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        default_value = "",
        help = "Project description"
    )]
    pub description: String,

    /// Minimum Android SDK level.
    #[arg(long = "min-sdk", value_name = "LEVEL", default_value_t = 24)]
    pub min_sdk: u32,

    /// Target Android SDK level.
    #[arg(long = "target-sdk", value_name = "LEVEL", default_value_t = 34)]
    pub target_sdk: u32,

    /// Output zip path.  Defaults to `<app-name>.zip` in the current
    /// directory.
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output zip path")]
    pub out: Option<PathBuf>,

    /// Content provider to prefer.
    #[arg(
        long = "provider",
        value_enum,
        default_value = "auto",
        help = "Content provider selection"
    )]
    pub provider: ProviderChoice,

    /// Load templates from a directory instead of the built-in set.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory holding the template set"
    )]
    pub templates_dir: Option<PathBuf>,
}

/// Provider selection exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProviderChoice {
    /// First configured provider wins.
    Auto,
    Gemini,
    OpenAi,
    /// Deterministic local fragment, no remote calls.
    Fallback,
}

impl std::fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Gemini => write!(f, "gemini"),
            Self::OpenAi => write!(f, "openai"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `droidforge templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Inspect a template directory instead of the built-in set.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory holding the template set"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `droidforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
