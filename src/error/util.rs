//! Utility functions for error handling
//!
//! File access at the two I/O boundaries of an export, with errors already mapped
//! onto the load/write failure taxonomy.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::{DocumentKind, ExportError, LoadError, Result};

/// Read a whole input document into memory
///
/// # Arguments
/// * `path` - The path to the document
/// * `document` - Which document is being read (for error context)
pub fn read_document(
    path: &Path,
    document: DocumentKind,
) -> std::result::Result<String, LoadError> {
    let io_err = |source: io::Error| LoadError::Io {
        document,
        path: path.to_path_buf(),
        source,
    };

    if !path.exists() {
        return Err(io_err(io::Error::new(io::ErrorKind::NotFound, "file not found")));
    }

    if !path.is_file() {
        return Err(io_err(io::Error::new(io::ErrorKind::InvalidInput, "path is not a file")));
    }

    fs::read_to_string(path).map_err(io_err)
}

/// Parse a JSON document into the expected shape
///
/// A top-level structure that does not match `T` is a load failure, not a
/// partially-read document.
pub fn parse_document<T: DeserializeOwned>(
    raw: &str,
    path: &Path,
    document: DocumentKind,
) -> std::result::Result<T, LoadError> {
    serde_json::from_str(raw).map_err(|source| LoadError::Malformed {
        document,
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path` atomically
///
/// The data goes to a temporary file in the destination directory and is renamed
/// over `path` only once fully flushed. On failure the destination is untouched.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| ExportError::write(path, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ExportError::write(path, e))?;
    tmp.write_all(contents.as_bytes()).map_err(|e| ExportError::write(path, e))?;
    tmp.as_file().sync_all().map_err(|e| ExportError::write(path, e))?;
    tmp.persist(path).map_err(|e| ExportError::write(path, e.error))?;

    Ok(())
}
