//! Named, sentinel-terminated source buffer.
//!
//! The buffer stores the source text followed by [`SENTINEL_LEN`] `0x00`
//! bytes, so the cursor can look at the current byte and the one after it
//! without checking bounds. The first sentinel sits at `len()`.
//!
//! Interior null bytes are legal source content: the cursor tells them
//! apart from the sentinel by comparing its position with the source length.

use std::path::{Path, PathBuf};

use crate::Cursor;

/// Number of `0x00` bytes appended after the source.
///
/// Two bytes cover `current()` and `peek()` at the last source position.
const SENTINEL_LEN: usize = 2;

/// Failure to load a source from disk.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// A named source container.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// File path or a label such as `<input>` for in-memory sources.
    name: String,
    /// Source text followed by the sentinel bytes.
    buf: String,
    /// Length of the actual source content (excludes sentinels).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a buffer over in-memory source text.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `len()`; the scanner
    /// stops there.
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        let mut buf = String::with_capacity(source.len() + SENTINEL_LEN);
        buf.push_str(source);
        for _ in 0..SENTINEL_LEN {
            buf.push('\0');
        }

        Self {
            name: name.into(),
            buf,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    /// Read a source file, naming the buffer after its path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(path.display().to_string(), &text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source text, without sentinels.
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinels).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
