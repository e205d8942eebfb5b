//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Obtain the UI fragment (provider chain with fallback)
//! 2. Expand every mapped template into a project tree
//! 3. Package the tree as a zip byte stream
//!
//! It owns the scoped lifecycle of the per-request temporary directory:
//! created fresh, removed on every exit path.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ports::{Archiver, Filesystem, TemplateRenderer, TemplateStore},
        services::FragmentService,
    },
    domain::{
        APP_BUILD_SCRIPT, DomainValidator as validator, ProjectConfig, RelativePath,
        RenderContext, Template, TemplateMapping, pin_compose_compiler,
    },
    error::{DroidforgeError, DroidforgeResult},
};

/// Main generation service.
///
/// Orchestrates fragment retrieval, template expansion, and archive assembly.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    archiver: Box<dyn Archiver>,
    fragments: FragmentService,
    mapping: TemplateMapping,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use droidforge_core::application::{FragmentService, GenerateService};
    ///
    /// let service = GenerateService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    ///     archiver,   // impl Archiver
    ///     FragmentService::new(providers),
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        archiver: Box<dyn Archiver>,
        fragments: FragmentService,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            archiver,
            fragments,
            mapping: TemplateMapping::standard(),
        }
    }

    /// The mapping this service renders.
    pub fn mapping(&self) -> &TemplateMapping {
        &self.mapping
    }

    /// Generate a complete project and return it as zip bytes.
    ///
    /// This is the main use case. The temporary directory is removed on every
    /// exit path - success, rendering error, or archive error - via an RAII
    /// guard, so a panicking caller cannot leak it either.
    #[instrument(
        skip_all,
        fields(
            app = %config.app_name(),
            package = %config.package_name(),
            request_id = %Uuid::new_v4()
        )
    )]
    pub fn generate(&self, config: &ProjectConfig) -> DroidforgeResult<Vec<u8>> {
        validator::validate_config(config).map_err(DroidforgeError::Domain)?;
        info!("Generating Android project");

        let tmp_root = self.filesystem.create_temp_dir("droidforge_")?;
        let _cleanup = TempDirGuard::new(self.filesystem.as_ref(), tmp_root.clone());

        let project_dir = tmp_root.join(config.app_name());
        self.render(config, &project_dir)?;

        let bytes = self.archiver.archive(&project_dir)?;
        info!(bytes = bytes.len(), "Archive assembled");
        Ok(bytes)
    }

    /// Expand every mapped template into `output_dir`.
    ///
    /// On return the directory contains the fully rendered project tree.
    /// Fails on invalid configuration, a missing template, an undefined
    /// variable reference, or a filesystem write error. Provider failures
    /// never surface here - the fragment chain absorbs them.
    #[instrument(skip_all, fields(output = %output_dir.display()))]
    pub fn render(&self, config: &ProjectConfig, output_dir: &Path) -> DroidforgeResult<()> {
        validator::validate_config(config).map_err(DroidforgeError::Domain)?;

        // The single outbound call of the pipeline.
        let fragment = self.fragments.fetch(config.prompt());

        let context = RenderContext::for_project(config, &fragment);

        for entry in self.mapping.entries() {
            let template = self.store.get(&entry.template)?;
            let mut content = self.renderer.render(&template, &context)?;

            // Defense-in-depth: the application build script is pinned to the
            // known-good Compose compiler version regardless of what the
            // template (or an out-of-band template edit) produced.
            if entry.template.as_str() == APP_BUILD_SCRIPT {
                content = pin_compose_compiler(&content).into_owned();
            }

            let out_rel = self
                .renderer
                .render(&Template::new(entry.template.clone(), entry.output), &context)?;
            let out_rel = RelativePath::try_new(out_rel).map_err(DroidforgeError::Domain)?;

            let out_path = output_dir.join(out_rel.as_path());
            if let Some(parent) = out_path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&out_path, &content)?;
        }

        info!(files = self.mapping.len(), "Project tree rendered");
        Ok(())
    }
}

/// Removes a temporary directory when dropped.
///
/// Scoped-resource contract: the directory disappears on success, on error,
/// and on unwind. Removal failure is logged, never propagated - cleanup must
/// not mask the original outcome.
struct TempDirGuard<'a> {
    filesystem: &'a dyn Filesystem,
    path: PathBuf,
}

impl<'a> TempDirGuard<'a> {
    fn new(filesystem: &'a dyn Filesystem, path: PathBuf) -> Self {
        Self { filesystem, path }
    }
}

impl Drop for TempDirGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.filesystem.remove_dir_all(&self.path) {
            warn!(
                error = %e,
                path = %self.path.display(),
                "Temporary directory cleanup failed"
            );
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
