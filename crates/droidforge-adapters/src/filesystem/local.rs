//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use droidforge_core::{application::ports::Filesystem, error::DroidforgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DroidforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DroidforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> DroidforgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn create_temp_dir(&self, prefix: &str) -> DroidforgeResult<PathBuf> {
        // `tempfile` guarantees a unique name even across concurrent
        // requests. `keep()` detaches the handle: lifetime management is the
        // caller's scoped-cleanup contract, not drop-based.
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| map_io_error(Path::new(prefix), e, "create temp directory"))?;
        Ok(dir.keep())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> droidforge_core::error::DroidforgeError {
    use droidforge_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
