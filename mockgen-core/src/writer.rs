//! Streaming serialization of [`Content`] trees to disk.
//!
//! The tree is walked depth-first and each fragment is written to the sink as
//! raw bytes as soon as it is reached, so memory use is bounded by the largest
//! fragment rather than by the whole document.

use std::{
    fmt, fs,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Deserialize;

use crate::{Content, Error, Result};

/// How the destination file is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Write to a temporary sibling of the destination, then rename it over
    /// the destination. Readers see either the old or the new file, never a
    /// partial one.
    #[default]
    Atomic,
    /// Truncate and write the destination in place. A failed write may leave
    /// a partial file.
    Direct,
}

/// Byte encoding of the written output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    /// 7-bit ASCII. Fragments containing other characters fail to encode.
    Ascii,
}

impl Encoding {
    /// Encode `text` as raw bytes.
    ///
    /// Strings are already UTF-8, so this borrows the underlying bytes; the
    /// only check performed is the ASCII range check for [`Encoding::Ascii`].
    pub fn encode(self, text: &str) -> Result<&[u8]> {
        let bytes = text.as_bytes();
        if self == Encoding::Ascii {
            if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                return Err(Error::EncodingFailed {
                    encoding: self,
                    offset,
                });
            }
        }
        Ok(bytes)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf-8"),
            Encoding::Ascii => f.write_str("ascii"),
        }
    }
}

/// Write `content` depth-first into `sink`.
pub fn emit<W: Write>(content: &Content, sink: &mut W, encoding: Encoding) -> Result<()> {
    content.walk(&mut |text: &str| {
        let bytes = encoding.encode(text)?;
        sink.write_all(bytes).map_err(Error::SinkWriteFailed)
    })
}

/// Serialize `content` to `path`.
///
/// Parent directories are created as needed. In [`WriteMode::Atomic`] an
/// existing destination is overwritten in a single rename, and is left
/// untouched if anything fails before that point.
pub fn write_content(
    path: &Path,
    content: Content,
    mode: WriteMode,
    encoding: Encoding,
) -> Result<()> {
    tracing::debug!(
        path = %path.display(),
        ?mode,
        %encoding,
        bytes = content.len(),
        "writing content"
    );

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| Error::SinkCreationFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    match mode {
        WriteMode::Direct => write_direct(path, &content, encoding),
        WriteMode::Atomic => write_atomic(dir, path, &content, encoding),
    }
}

fn write_direct(path: &Path, content: &Content, encoding: Encoding) -> Result<()> {
    let file = fs::File::create(path).map_err(|source| Error::SinkCreationFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sink = BufWriter::new(file);
    emit(content, &mut sink, encoding)?;
    sink.flush().map_err(Error::SinkWriteFailed)
}

fn write_atomic(dir: &Path, path: &Path, content: &Content, encoding: Encoding) -> Result<()> {
    // The temporary file lives next to the destination so the final step is
    // a rename on the same volume.
    let prefix = match path.file_name() {
        Some(name) => format!(".{}.", name.to_string_lossy()),
        None => ".mockgen.".to_string(),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");
    // Created like `File::create` would, so the umask decides the mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder
        .tempfile_in(dir)
        .map_err(|source| Error::SinkCreationFailed {
            path: dir.to_path_buf(),
            source,
        })?;
    tracing::trace!(tmp = %tmp.path().display(), "created temporary file");

    // Dropping the temporary file on any early return removes it.
    let mut sink = BufWriter::new(tmp);
    emit(content, &mut sink, encoding)?;
    let tmp = sink
        .into_inner()
        .map_err(|err| Error::SinkWriteFailed(err.into_error()))?;
    // A replaced file keeps its mode.
    if let Some(metadata) = fs::metadata(path).ok().filter(|m| m.is_file()) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(Error::SinkWriteFailed)?;
    }
    tmp.as_file().sync_all().map_err(Error::SinkWriteFailed)?;

    tmp.persist(path).map_err(|err| Error::ReplaceFailed {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    tracing::debug!(path = %path.display(), "replaced destination");
    Ok(())
}
