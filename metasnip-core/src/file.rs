use std::path::{Path, PathBuf};

use eyre::Result;

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
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

/// A file with an explicit path and content
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}
