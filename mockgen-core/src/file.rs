use std::path::{Path, PathBuf};

use crate::{Content, Encoding, Result, WriteMode, write_content};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Build the file content
    fn content(&self) -> Content;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<()> {
        let rules = self.rules();
        write_content(
            &self.path(base),
            self.content(),
            rules.mode,
            rules.encoding,
        )
    }
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: Content,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: atomic UTF-8)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Content>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the rules used to write this file
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn rules(&self) -> FileRules {
        self.rules
    }

    /// Write the file according to its rules, consuming it
    pub fn write(self) -> Result<()> {
        write_content(
            &self.path,
            self.content,
            self.rules.mode,
            self.rules.encoding,
        )
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileRules {
    pub mode: WriteMode,
    pub encoding: Encoding,
}

impl FileRules {
    /// Rules for an in-place, non-atomic write.
    pub fn direct() -> Self {
        Self {
            mode: WriteMode::Direct,
            ..Self::default()
        }
    }
}
