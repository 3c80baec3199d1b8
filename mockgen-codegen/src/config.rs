//! Generator configuration, usually read from `mockgen.toml`.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use eyre::{Context, Result};
use mockgen_core::{Encoding, FileRules, WriteMode};
use serde::Deserialize;

use crate::document::{DEFAULT_OUTPUT_FILENAME, FileHeader};

/// Kind of declaration a type descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Protocol,
}

/// A type to generate a mock for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    /// Member declarations to stub, verbatim.
    #[serde(default)]
    pub members: Vec<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            members: Vec::new(),
        }
    }

    /// Add a member declaration.
    pub fn member(mut self, declaration: impl Into<String>) -> Self {
        self.members.push(declaration.into());
        self
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the module whose types are mocked.
    pub module: String,
    /// Destination file.
    pub output: PathBuf,
    /// Extra import lines.
    pub imports: BTreeSet<String>,
    /// Add `@testable import <module>`.
    pub import_module: bool,
    /// Module providing the mock runtime.
    pub runtime: String,
    /// Conditional compilation expression wrapping the whole file.
    pub condition: Option<String>,
    /// Mock protocols only, skipping classes.
    pub only_protocols: bool,
    /// Disable the linter for the generated file.
    pub disable_lint: bool,
    /// Replace the destination atomically.
    pub atomic: bool,
    pub encoding: Encoding,
    /// Worker count; defaults to the number of logical cores.
    pub jobs: Option<usize>,
    pub types: Vec<TypeDescriptor>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            module: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            imports: BTreeSet::new(),
            import_module: true,
            runtime: "MockgenRuntime".to_string(),
            condition: None,
            only_protocols: false,
            disable_lint: false,
            atomic: true,
            encoding: Encoding::default(),
            jobs: None,
            types: Vec::new(),
        }
    }
}

impl FromStr for GeneratorConfig {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).wrap_err("invalid generator configuration")?;
        config.validate()?;
        Ok(config)
    }
}

impl GeneratorConfig {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        content
            .parse::<Self>()
            .wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.module.trim().is_empty() {
            eyre::bail!("`module` must be set");
        }
        if self.jobs == Some(0) {
            eyre::bail!("`jobs` must be at least 1");
        }
        let mut seen = BTreeSet::new();
        for ty in &self.types {
            if !seen.insert(ty.name.as_str()) {
                eyre::bail!("type `{}` is declared more than once", ty.name);
            }
        }
        Ok(())
    }

    /// File name shown in the generated banner.
    pub fn output_filename(&self) -> String {
        self.output.file_name().map_or_else(
            || DEFAULT_OUTPUT_FILENAME.to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::Direct
        }
    }

    pub fn file_rules(&self) -> FileRules {
        FileRules {
            mode: self.write_mode(),
            encoding: self.encoding,
        }
    }

    /// All import lines: configured ones plus those every mock file needs.
    pub fn import_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.imports.iter().cloned().collect();
        lines.push("import Foundation".to_string());
        lines.push(format!("@testable import {}", self.runtime));
        if self.import_module {
            lines.push(format!("@testable import {}", self.module));
        }
        lines
    }

    /// The header for this configuration.
    pub fn header(&self) -> FileHeader {
        FileHeader::new(self.output_filename(), &self.module)
            .imports(self.import_lines())
            .disable_lint(self.disable_lint)
            .condition(self.condition.as_deref())
    }
}
