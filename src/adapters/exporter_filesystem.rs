//! Filesystem export of a generated File Set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, FileSet};

/// Writes generated artifacts to a target directory.
///
/// Content is written byte-for-byte as returned by the completion endpoint;
/// no transformation happens between model output and exported bytes.
#[derive(Debug, Clone)]
pub struct FilesystemExporter {
    out_dir: PathBuf,
}

impl FilesystemExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Export every non-failed entry; failed entries are skipped on disk.
    ///
    /// Returns the paths written, in plan order. The caller is responsible
    /// for reporting the skipped failures to the user.
    pub fn export(&self, files: &FileSet) -> Result<Vec<PathBuf>, AppError> {
        fs::create_dir_all(&self.out_dir)?;

        let mut written = Vec::new();
        for (key, outcome) in files.iter() {
            let Some(content) = outcome.content() else {
                continue;
            };

            let path = self.out_dir.join(key.file_name());
            fs::write(&path, content.as_bytes())?;
            written.push(path);
        }

        Ok(written)
    }
}
