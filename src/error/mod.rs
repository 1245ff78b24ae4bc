//! Error handling for the GEDCOM exporter.
//!
//! Only two conditions are fatal to an export: the input documents could not be
//! loaded, or the output document could not be written. Everything else (malformed
//! nodes, dangling links, unparseable dates) degrades inside the pipeline.

pub mod util;

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The three input documents supplied by a raw data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Tree nodes with parent and partner links
    Tree,
    /// User-entered annotations
    Annotations,
    /// Relatives list
    Relatives,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree => write!(f, "tree"),
            Self::Annotations => write!(f, "annotations"),
            Self::Relatives => write!(f, "relatives"),
        }
    }
}

/// Failure to obtain the input documents
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document could not be read
    #[error("failed to read {document} document {}: {source}", path.display())]
    Io {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document was read but its structure is not what we expect
    #[error("malformed {document} document {}: {source}", path.display())]
    Malformed {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A custom provider failed for its own reasons
    #[error("raw data provider failed: {0}")]
    Provider(String),
}

/// Specialized error type for an export run
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Input could not be loaded; nothing was written
    #[error("load failure: {0}")]
    Load(#[from] LoadError),

    /// Output could not be written
    #[error("write failure for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// Create a write failure for the given output path
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    #[must_use]
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
