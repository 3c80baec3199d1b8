//! Core types for the mockgen generator.
//!
//! This crate provides the hierarchical [`Content`] tree that generated
//! documents are assembled into, and the streaming writer that persists
//! such a tree to disk without first flattening it into one buffer.

mod content;
mod error;
mod file;
mod writer;

// Document representation
pub use content::{Content, Group};
// Errors
pub use error::{BoxError, Error, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile};
pub use writer::{Encoding, WriteMode, emit, write_content};
