//! File header: banner comment, directives and imports.

use mockgen_core::{Content, Group};

use super::ImportSet;

/// Default file name echoed in the banner when the output path has none.
pub const DEFAULT_OUTPUT_FILENAME: &str = "Mocks.generated.swift";

const TOOL_NAME: &str = "mockgen";

/// Header of a generated mock file.
///
/// Renders as:
///
/// ```text
/// //
/// //  <output filename>
/// //  <module>
/// //
/// //  Generated by mockgen v<version>.
/// //  DO NOT EDIT
/// //
/// [lint directive]
/// [#if <condition>]
///
/// <sorted imports>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    output_filename: String,
    module: String,
    version: String,
    imports: ImportSet,
    disable_lint: bool,
    condition: Option<String>,
}

impl FileHeader {
    /// Create a header for `module` written to `output_filename`.
    pub fn new(output_filename: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            output_filename: output_filename.into(),
            module: module.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            imports: ImportSet::new(),
            disable_lint: false,
            condition: None,
        }
    }

    /// Override the generator version shown in the banner.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add import lines.
    pub fn imports<S: AsRef<str>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.imports.extend(lines);
        self
    }

    /// Emit a directive disabling the linter for the whole file.
    pub fn disable_lint(mut self, disable: bool) -> Self {
        self.disable_lint = disable;
        self
    }

    /// Open a conditional compilation block after the banner.
    ///
    /// The matching `#endif` is emitted by the document footer.
    pub fn condition(mut self, expression: Option<impl Into<String>>) -> Self {
        self.condition = expression.map(Into::into);
        self
    }

    /// The conditional compilation expression, if any.
    pub fn guard(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn to_content(&self) -> Content {
        let banner = format!(
            "//\n//  {}\n//  {}\n//\n//  Generated by {TOOL_NAME} v{}.\n//  DO NOT EDIT\n//\n",
            self.output_filename, self.module, self.version
        );

        let mut header = Group::new([Content::leaf(banner)]);
        if self.disable_lint {
            header.push(Content::leaf("\n// swiftlint:disable all\n"));
        }
        if let Some(expression) = &self.condition {
            header.push(Content::leaf(format!("\n#if {expression}\n")));
        }
        header.push(Content::leaf("\n"));
        header.push(self.imports.to_content().into());
        header.footer("\n").into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "//\n//  Mocks.swift\n//  App\n//\n//  Generated by mockgen v1.2.3.\n//  DO NOT EDIT\n//\n";

    fn header() -> FileHeader {
        FileHeader::new("Mocks.swift", "App")
            .version("1.2.3")
            .imports(["import XCTest", "import Foundation"])
    }

    #[test]
    fn test_plain_header() {
        let text = header().to_content().to_string();
        assert_eq!(
            text,
            format!("{BANNER}\nimport Foundation\nimport XCTest\n")
        );
    }

    #[test]
    fn test_header_with_lint_and_condition() {
        let text = header()
            .disable_lint(true)
            .condition(Some("DEBUG"))
            .to_content()
            .to_string();

        assert_eq!(
            text,
            format!(
                "{BANNER}\n// swiftlint:disable all\n\n#if DEBUG\n\nimport Foundation\nimport XCTest\n"
            )
        );
    }

    #[test]
    fn test_guard_reflects_condition() {
        assert_eq!(header().guard(), None);
        assert_eq!(header().condition(Some("TESTING")).guard(), Some("TESTING"));
        assert_eq!(header().condition(None::<String>).guard(), None);
    }

    #[test]
    fn test_default_version_is_crate_version() {
        let text = FileHeader::new("Out.swift", "Lib").to_content().to_string();
        assert!(text.contains(concat!("Generated by mockgen v", env!("CARGO_PKG_VERSION"), ".")));
    }
}
