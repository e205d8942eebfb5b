//! Directory-backed template store.
//!
//! Serves templates from a flat directory tree where each file's path
//! relative to the root is its logical id (`app/build.gradle.kts`,
//! `root/gitignore`, ...). This is the store users point `--templates-dir`
//! at, and the directory the external template-repair assistant edits -
//! which is exactly why rendered build scripts still go through the
//! sanitization pass afterwards.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use droidforge_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, Template, TemplateId},
    error::{DroidforgeError, DroidforgeResult},
};

/// Template store reading from a directory root.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store over `root`. The directory must exist.
    pub fn new(root: impl Into<PathBuf>) -> DroidforgeResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: root,
                reason: "template directory does not exist".into(),
            }
            .into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an id to a file path, refusing anything that could escape
    /// the root.
    fn resolve(&self, id: &TemplateId) -> DroidforgeResult<PathBuf> {
        let rel = Path::new(id.as_str());
        let escapes = rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
        if escapes {
            return Err(ApplicationError::TemplateMissing { id: id.to_string() }.into());
        }
        Ok(self.root.join(rel))
    }
}

impl TemplateStore for DirectoryStore {
    #[instrument(skip(self))]
    fn get(&self, id: &TemplateId) -> DroidforgeResult<Template> {
        let path = self.resolve(id)?;
        debug!(path = %path.display(), "loading template");

        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DroidforgeError::from(ApplicationError::TemplateMissing { id: id.to_string() })
            } else {
                ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to read template: {e}"),
                }
                .into()
            }
        })?;

        let template = Template::new(id.clone(), content);
        validator::validate_template(&template).map_err(DroidforgeError::Domain)?;
        Ok(template)
    }

    fn list(&self) -> DroidforgeResult<Vec<TemplateId>> {
        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("Failed to walk template directory: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .expect("walkdir yields paths under its root");
            if let Some(rel) = rel.to_str() {
                ids.push(TemplateId::new(rel.replace('\\', "/")));
            }
        }
        Ok(ids)
    }

    fn insert(&self, template: Template) -> DroidforgeResult<()> {
        validator::validate_template(&template).map_err(DroidforgeError::Domain)?;
        let path = self.resolve(&template.id)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ApplicationError::FilesystemError {
                path: parent.to_path_buf(),
                reason: format!("Failed to create template directory: {e}"),
            })?;
        }
        std::fs::write(&path, &template.content).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to write template: {e}"),
            }
            .into()
        })
    }
}
