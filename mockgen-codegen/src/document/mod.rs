//! Structure of a generated mock file.
//!
//! This module builds the [`Content`](mockgen_core::Content) tree for one file:
//! - [`ImportSet`] - Import line deduplication and sorting
//! - [`FileHeader`] - Preamble, directives and imports
//! - [`DocumentAssembler`] - Header, body and footer composition
//! - [`support`] - Support declarations emitted ahead of the mocks

mod assembler;
mod header;
mod imports;
pub mod support;

pub use assembler::DocumentAssembler;
pub use header::{DEFAULT_OUTPUT_FILENAME, FileHeader};
pub use imports::ImportSet;
