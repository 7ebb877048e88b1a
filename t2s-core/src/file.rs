use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A generated source file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content, e.g. with the output of a formatter.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            path: self.path,
            content: content.into(),
        }
    }

    /// Write the file under `base`, creating directories as needed.
    pub fn write(&self, base: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        let path = base.join(&self.path);

        if overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }

        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace whatever is on disk
    #[default]
    Always,
    /// Leave existing files alone
    IfMissing,
}
