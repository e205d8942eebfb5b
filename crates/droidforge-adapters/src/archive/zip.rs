//! Zip archive builder.
//!
//! Walks a rendered project tree and packages every file into a single
//! deflate-compressed zip held in memory. Entry names are paths relative to
//! the tree root with forward slashes - the temporary root's absolute path
//! never leaks into the archive.

use std::io::{Cursor, Write};
use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use droidforge_core::{
    application::{ApplicationError, ports::Archiver},
    error::{DroidforgeError, DroidforgeResult},
};

/// Deflate-compressed in-memory zip builder.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ZipArchiver {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn archive(&self, root: &Path) -> DroidforgeResult<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        // Sorted traversal keeps entry order deterministic across platforms.
        let mut count = 0usize;
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| archive_err(format!("walk failed: {e}")))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| archive_err(format!("path outside root: {e}")))?;
            let name = rel
                .to_str()
                .ok_or_else(|| archive_err(format!("non-UTF-8 path: {rel:?}")))?
                .replace('\\', "/");

            writer
                .start_file(name.clone(), options)
                .map_err(|e| archive_err(format!("start entry '{name}': {e}")))?;
            let bytes = std::fs::read(entry.path())
                .map_err(|e| archive_err(format!("read '{name}': {e}")))?;
            writer
                .write_all(&bytes)
                .map_err(|e| archive_err(format!("write entry '{name}': {e}")))?;
            count += 1;
        }

        let cursor = writer
            .finish()
            .map_err(|e| archive_err(format!("finalize archive: {e}")))?;
        debug!(entries = count, bytes = cursor.get_ref().len(), "archive built");
        Ok(cursor.into_inner())
    }
}

fn archive_err(reason: String) -> DroidforgeError {
    ApplicationError::ArchiveFailed { reason }.into()
}
