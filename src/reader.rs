//! Content file reading, polymorphic over encoding.
//!
//! A [`ContentReader`] is bound to one file (content root + relative path)
//! and exposes its text two ways: the whole string, and a line-split view.
//! Readers are picked by the [`reader_for`] factory from an enumerated
//! [`Encoding`] tag — an unrecognized tag is a configuration mistake and
//! fails before any file is touched. Adding an encoding means adding an
//! `Encoding` variant; the factory's match is exhaustive, so the compiler
//! points at every place that needs updating.
//!
//! ## Line convention
//!
//! [`ContentReader::lines`] splits on `\n` exactly, with no carriage-return
//! normalization — CRLF files keep their `\r` at the end of each line.
//! Downstream title extraction trims whitespace, which absorbs it.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    /// The encoding tag is outside the recognized set. This is a
    /// configuration error, not a data error — no reader is constructed.
    #[error("unsupported encoding tag: '{0}'")]
    UnsupportedEncoding(String),
    /// The file vanished or became unreadable between discovery and read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The recognized set of content encodings.
///
/// Kept deliberately closed: config files name encodings by tag, and an
/// enumerated set turns a typo into a load-time error instead of a silently
/// empty index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
}

impl Encoding {
    /// Parse an encoding tag. Accepts `"utf-8"` and `"utf8"`.
    pub fn from_tag(tag: &str) -> Result<Self, ReadError> {
        match tag {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            other => Err(ReadError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// Read access to one content file's text.
pub trait ContentReader: std::fmt::Debug {
    /// The file's full contents as a single string.
    fn contents(&self) -> Result<String, ReadError>;

    /// The file's contents split on `\n`. An empty file yields one empty line.
    fn lines(&self) -> Result<Vec<String>, ReadError> {
        Ok(self.contents()?.split('\n').map(String::from).collect())
    }
}

/// Construct the reader for `encoding`, bound to `root`/`rel_path`.
///
/// Use [`reader_for`] when starting from a raw tag string.
pub fn reader_for_encoding(
    encoding: Encoding,
    root: &Path,
    rel_path: &Path,
) -> Box<dyn ContentReader> {
    match encoding {
        Encoding::Utf8 => Box::new(Utf8Reader::new(root, rel_path)),
    }
}

/// Construct a reader from a raw encoding tag.
///
/// Fails with [`ReadError::UnsupportedEncoding`] for tags outside the
/// recognized set; nothing is read from disk on failure.
pub fn reader_for(
    tag: &str,
    root: &Path,
    rel_path: &Path,
) -> Result<Box<dyn ContentReader>, ReadError> {
    let encoding = Encoding::from_tag(tag)?;
    Ok(reader_for_encoding(encoding, root, rel_path))
}

/// UTF-8 content reader. Invalid UTF-8 in the file is an I/O error.
#[derive(Debug)]
pub struct Utf8Reader {
    root: PathBuf,
    rel_path: PathBuf,
}

impl Utf8Reader {
    pub fn new(root: &Path, rel_path: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            rel_path: rel_path.to_path_buf(),
        }
    }

    fn absolute_path(&self) -> PathBuf {
        self.root.join(&self.rel_path)
    }
}

impl ContentReader for Utf8Reader {
    fn contents(&self) -> Result<String, ReadError> {
        std::fs::read_to_string(self.absolute_path()).map_err(|source| ReadError::Io {
            path: self.rel_path.clone(),
            source,
        })
    }
}
