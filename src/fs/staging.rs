//! Scoped staging of stdin templates.
//!
//! A template read from stdin has no directory of its own, so when search
//! directories are in play it is written to a fresh temporary directory that
//! is placed first on the loader's search path. The staged file and its
//! directory are removed when the [`StagedTemplate`] is dropped, which covers
//! every exit path of the render, including early returns on error.

use crate::error::{Result, TwigcError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name of a staged template; also the name the loader resolves.
pub const STAGED_TEMPLATE_NAME: &str = "-";

/// A template written to a private temporary directory.
#[derive(Debug)]
pub struct StagedTemplate {
    dir: Option<TempDir>,
    file: PathBuf,
}

impl StagedTemplate {
    /// Write `source` to `<root>/.twigc.<random>/-`.
    pub fn create(root: &Path, source: &str) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(".twigc.")
            .tempdir_in(root)
            .map_err(|e| {
                TwigcError::IoError(format!(
                    "failed to create temporary directory in '{}': {}",
                    root.display(),
                    e
                ))
            })?;

        let file = dir.path().join(STAGED_TEMPLATE_NAME);
        let staged = Self {
            dir: Some(dir),
            file,
        };
        staged.write(source)?;

        tracing::debug!(path = %staged.file.display(), "staged stdin template");
        Ok(staged)
    }

    fn write(&self, source: &str) -> Result<()> {
        let mut file = File::create(&self.file).map_err(|e| {
            TwigcError::IoError(format!(
                "failed to create staged template '{}': {}",
                self.file.display(),
                e
            ))
        })?;

        file.write_all(source.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| TwigcError::IoError(format!("failed to write staged template: {}", e)))
    }

    /// Directory holding the staged template.
    pub fn dir(&self) -> &Path {
        self.file.parent().unwrap_or(Path::new("."))
    }

    /// Full path of the staged template file.
    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.file
    }
}

impl Drop for StagedTemplate {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.file) {
            tracing::warn!(path = %self.file.display(), error = %e, "failed to remove staged template");
        }
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove staging directory");
            }
        }
    }
}
