//! Mock rendering and document assembly for the mockgen generator.
//!
//! # Module Organization
//!
//! - [`executor`] - Ordered parallel rendering (OrderedExecutor, RenderResult)
//! - [`document`] - Document structure (ImportSet, FileHeader, DocumentAssembler)
//! - [`config`] - Generator configuration and type descriptors
//! - [`render`] - Renderer abstraction and the default template renderer
//! - [`generator`] - End-to-end orchestration (Generator, GenerationReport)
//! - [`testing`] - Test utilities (feature-gated)

pub mod config;
pub mod document;
pub mod executor;
pub mod generator;
pub mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{GeneratorConfig, TypeDescriptor, TypeKind};
pub use document::{DocumentAssembler, FileHeader, ImportSet};
pub use executor::{OrderedExecutor, RenderResult};
pub use generator::{GenerationReport, Generator};
pub use render::{MockRenderer, TemplateRenderer};
