//! A Rust library for exporting a family tree and its user annotations as a
//! GEDCOM 5.5.1 lineage-linked document.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod export;
pub mod gedcom;
pub mod models;
pub mod provider;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ExportConfig, SourceInfo};
pub use error::{ExportError, LoadError, Result};
pub use export::{ExportSummary, GedcomExporter};

// Input
pub use models::{Annotation, Occurrence, RawNode};
pub use provider::{JsonDirectoryProvider, RawDataProvider, RawDocuments};

// Output
pub use gedcom::{GedcomDocument, GedcomLine};
