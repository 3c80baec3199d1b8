use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Encoding;

/// Result type for content writing and rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause of a render failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    /// The destination, or its temporary sibling, could not be opened.
    #[error("unable to create output sink at '{}'", path.display())]
    SinkCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A fragment contains bytes the output encoding cannot represent.
    #[error("unable to encode fragment as {encoding}: byte {offset} is not representable")]
    EncodingFailed { encoding: Encoding, offset: usize },

    /// The sink rejected a write or did not accept the full buffer.
    #[error("failed to write to output sink")]
    SinkWriteFailed(#[source] io::Error),

    /// Moving the finished temporary file over the destination failed.
    /// The destination is left as it was.
    #[error("failed to replace '{}' with the generated file", path.display())]
    ReplaceFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A renderer failed (or panicked) for the unit at `position`.
    #[error("failed to render unit at position {position}")]
    RenderFailed {
        position: usize,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Create a render failure for the unit at `position`.
    pub fn render(position: usize, source: impl Into<BoxError>) -> Self {
        Self::RenderFailed {
            position,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_render_error_keeps_cause() {
        let err = Error::render(3, "template missing");
        assert_eq!(err.to_string(), "failed to render unit at position 3");
        assert_eq!(err.source().unwrap().to_string(), "template missing");
    }

    #[test]
    fn test_encoding_error_message() {
        let err = Error::EncodingFailed {
            encoding: Encoding::Ascii,
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "unable to encode fragment as ascii: byte 7 is not representable"
        );
    }

    #[test]
    fn test_sink_creation_error_names_path() {
        let err = Error::SinkCreationFailed {
            path: PathBuf::from("out/Mocks.swift"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("out/Mocks.swift"));
    }
}
