//! Implementation of the `droidforge gen` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, wire up
//! the adapters, call the core generate service, and write the resulting zip.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use droidforge_adapters::{
    DirectoryStore, InMemoryStore, LocalFilesystem, ProviderSelector, StrictRenderer, ZipArchiver,
    build_chain,
};
use droidforge_core::{
    application::{FragmentService, GenerateService, ports::TemplateStore},
    domain::ProjectConfig,
};

use crate::{
    cli::{GenArgs, ProviderChoice, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `droidforge gen` command.
///
/// Dispatch sequence:
/// 1. Build and validate the `ProjectConfig` from CLI args
/// 2. Resolve the provider chain from config + `--provider`
/// 3. Select the template store (built-in or `--templates-dir`)
/// 4. Run the generate service
/// 5. Write the zip and report
#[instrument(skip_all, fields(app = %args.app_name))]
pub fn execute(
    args: GenArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Domain config (validation happens in the builder)
    let project = ProjectConfig::builder()
        .app_name(&args.app_name)
        .package_name(&args.package_name)
        .description(&args.description)
        .min_sdk(args.min_sdk)
        .target_sdk(args.target_sdk)
        .prompt(&args.prompt)
        .build()
        .map_err(|e| CliError::Core(e.into()))?;

    // 2. Provider chain
    let settings = config.provider_settings();
    let selector = convert_provider(args.provider);
    let chain = build_chain(selector, &settings);
    debug!(selector = %selector, strategies = chain.len(), "provider chain ready");

    // 3. Template store
    let store = select_store(args.templates_dir.or(config.templates.dir.clone()))?;

    // 4. Generate
    let service = GenerateService::new(
        store,
        Box::new(StrictRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ZipArchiver::new()),
        FragmentService::new(chain),
    );

    output.header(&format!("Generating '{}'...", project.app_name()))?;
    info!(app = %project.app_name(), "Generation started");

    let bytes = service.generate(&project).map_err(CliError::Core)?;

    // 5. Write the archive
    let out_path = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.zip", project.app_name())));
    std::fs::write(&out_path, &bytes)?;

    info!(path = %out_path.display(), bytes = bytes.len(), "Generation completed");
    output.success(&format!(
        "Wrote {} ({} bytes)",
        out_path.display(),
        bytes.len()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  unzip {}", out_path.display()))?;
        output.print(&format!("  cd {}", project.app_name()))?;
        output.print("  ./gradlew assembleDebug  # or open in Android Studio")?;
    }

    Ok(())
}

/// Pick the template store: a directory if one was requested, built-ins
/// otherwise.
fn select_store(dir: Option<PathBuf>) -> CliResult<Box<dyn TemplateStore>> {
    match dir {
        Some(path) => {
            let store = DirectoryStore::new(&path).map_err(|e| CliError::TemplateDirError {
                path,
                source: Box::new(e),
            })?;
            Ok(Box::new(store))
        }
        None => {
            let store = InMemoryStore::with_builtin().map_err(CliError::Core)?;
            Ok(Box::new(store))
        }
    }
}

// ── Type conversions CLI → adapters ───────────────────────────────────────────

fn convert_provider(choice: ProviderChoice) -> ProviderSelector {
    match choice {
        ProviderChoice::Auto => ProviderSelector::Auto,
        ProviderChoice::Gemini => ProviderSelector::Gemini,
        ProviderChoice::OpenAi => ProviderSelector::OpenAi,
        ProviderChoice::Fallback => ProviderSelector::Fallback,
    }
}
