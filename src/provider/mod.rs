//! Raw data providers
//!
//! The exporter never fetches data itself. A `RawDataProvider` hands it the three
//! input documents in one piece; any failure there aborts the export before a single
//! GEDCOM line is produced.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::Value;

use crate::config::ExportConfig;
use crate::error::util::{parse_document, read_document};
use crate::error::{DocumentKind, LoadError};
use crate::models::{Annotation, RawNode};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// The three input documents of one export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocuments {
    /// Tree nodes, in document order
    pub tree: Vec<RawNode>,
    /// Annotations, in document order
    pub annotations: Vec<Annotation>,
    /// Relatives list; carried along but not transformed
    pub relatives: Vec<Value>,
}

impl RawDocuments {
    #[must_use]
    pub fn new(tree: Vec<RawNode>, annotations: Vec<Annotation>) -> Self {
        Self {
            tree,
            annotations,
            relatives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_relatives(mut self, relatives: Vec<Value>) -> Self {
        self.relatives = relatives;
        self
    }
}

/// Source of the raw input documents
pub trait RawDataProvider {
    /// Load all three documents, or fail the whole load
    fn load(&self) -> Result<RawDocuments, LoadError>;
}

/// Documents already in memory act as their own provider
impl RawDataProvider for RawDocuments {
    fn load(&self) -> Result<RawDocuments, LoadError> {
        Ok(self.clone())
    }
}

/// Provider reading the three JSON documents from one directory
#[derive(Debug, Clone)]
pub struct JsonDirectoryProvider {
    tree_path: PathBuf,
    annotations_path: PathBuf,
    relatives_path: PathBuf,
}

impl JsonDirectoryProvider {
    /// Use the default file names inside `dir`
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self::from_config(&ExportConfig::default().with_data_dir(dir))
    }

    #[must_use]
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            tree_path: config.tree_path(),
            annotations_path: config.annotations_path(),
            relatives_path: config.relatives_path(),
        }
    }

    fn load_array<T: serde::de::DeserializeOwned>(
        path: &Path,
        document: DocumentKind,
    ) -> Result<Vec<T>, LoadError> {
        let start = Instant::now();
        log_operation_start(&format!("Loading {document} document from"), path);

        let raw = read_document(path, document)?;
        let records: Vec<T> = parse_document(&raw, path, document)?;

        log_operation_complete("loaded", path, records.len(), Some(start.elapsed()));
        Ok(records)
    }
}

impl RawDataProvider for JsonDirectoryProvider {
    fn load(&self) -> Result<RawDocuments, LoadError> {
        Ok(RawDocuments {
            tree: Self::load_array(&self.tree_path, DocumentKind::Tree)?,
            annotations: Self::load_array(&self.annotations_path, DocumentKind::Annotations)?,
            relatives: Self::load_array(&self.relatives_path, DocumentKind::Relatives)?,
        })
    }
}
