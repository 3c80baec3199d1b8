//! Import line collection.

use std::collections::BTreeSet;

use mockgen_core::{Content, Group};

/// Tracks import lines and deduplicates them.
///
/// Lines are kept sorted so the generated header is identical across runs,
/// whatever order the imports were added in.
///
/// # Example
///
/// ```
/// use mockgen_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("import XCTest");
/// imports.add("import Foundation");
/// imports.add("import XCTest");
///
/// let lines: Vec<&str> = imports.iter().collect();
/// assert_eq!(lines, ["import Foundation", "import XCTest"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    lines: BTreeSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import line. Surrounding whitespace is trimmed and blank
    /// lines are ignored.
    pub fn add(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref().trim();
        if !line.is_empty() {
            self.lines.insert(line.to_string());
        }
    }

    /// Iterate over the import lines in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// One leaf per line, joined by newlines.
    pub fn to_content(&self) -> Group {
        self.lines
            .iter()
            .map(|line| Content::leaf(line.clone()))
            .collect::<Group>()
            .separator("\n")
    }
}

impl<S: AsRef<str>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.add(line);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
