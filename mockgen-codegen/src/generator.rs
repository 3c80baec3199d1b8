//! End-to-end generation of a mock file.

use std::path::PathBuf;

use mockgen_core::{Content, File, Result, WriteMode};

use crate::{
    DocumentAssembler, GeneratorConfig, MockRenderer, OrderedExecutor, TypeDescriptor, TypeKind,
    document::support,
};

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Destination file.
    pub output: PathBuf,
    /// Number of mocks rendered.
    pub rendered: usize,
    /// Number of descriptors filtered out.
    pub skipped: usize,
    /// Size of the written document in bytes.
    pub bytes: usize,
    pub mode: WriteMode,
}

/// An assembled, not yet written, document.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: Content,
    pub rendered: usize,
    pub skipped: usize,
}

/// Renders every configured type and writes the resulting mock file.
///
/// # Example
///
/// ```
/// use mockgen_codegen::{Generator, GeneratorConfig, TemplateRenderer};
///
/// let config: GeneratorConfig = r#"
///     module = "App"
///     [[types]]
///     name = "Clock"
///     kind = "protocol"
/// "#
/// .parse()
/// .unwrap();
///
/// let renderer = TemplateRenderer::new(&config.runtime);
/// let text = Generator::new(config, renderer).preview().unwrap();
/// assert!(text.contains("public final class ClockMock"));
/// ```
pub struct Generator<R> {
    config: GeneratorConfig,
    renderer: R,
    executor: OrderedExecutor,
}

impl<R: MockRenderer> Generator<R> {
    pub fn new(config: GeneratorConfig, renderer: R) -> Self {
        let executor = config
            .jobs
            .map_or_else(OrderedExecutor::new, OrderedExecutor::with_workers);
        Self {
            config,
            renderer,
            executor,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Descriptors that will be rendered, sorted by name.
    pub fn units(&self) -> Vec<&TypeDescriptor> {
        let mut units: Vec<&TypeDescriptor> = self
            .config
            .types
            .iter()
            .filter(|ty| !self.config.only_protocols || ty.kind == TypeKind::Protocol)
            .collect();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        units
    }

    /// Render all units and assemble the document tree.
    pub fn assemble(&self) -> Result<Document> {
        let units = self.units();
        let skipped = self.config.types.len() - units.len();
        tracing::debug!(units = units.len(), skipped, "rendering mocks");

        let results = self
            .executor
            .execute(&units, |ty| self.renderer.render(ty))?;
        let rendered = results.len();

        let header = self.config.header();
        let content = DocumentAssembler::new(header.to_content())
            .support(support::leaves(&self.config.runtime))
            .close_guard(header.guard().is_some())
            .assemble(results);

        Ok(Document {
            content,
            rendered,
            skipped,
        })
    }

    /// Generate the document as a string without writing it.
    pub fn preview(&self) -> Result<String> {
        Ok(self.assemble()?.content.to_string())
    }

    /// Generate the document and write it to the configured output.
    pub fn generate(&self) -> Result<GenerationReport> {
        let document = self.assemble()?;
        let bytes = document.content.len();
        let rules = self.config.file_rules();

        File::new(&self.config.output, document.content)
            .with_rules(rules)
            .write()?;

        tracing::info!(
            output = %self.config.output.display(),
            rendered = document.rendered,
            bytes,
            "generated mocks"
        );

        Ok(GenerationReport {
            output: self.config.output.clone(),
            rendered: document.rendered,
            skipped: document.skipped,
            bytes,
            mode: rules.mode,
        })
    }
}
