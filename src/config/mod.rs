//! Configuration for the GEDCOM exporter.

use std::fmt;
use std::path::{Path, PathBuf};

/// Product metadata written into the `HEAD` record's `SOUR` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// Approved system identifier (`1 SOUR <id>`)
    pub product_id: String,
    /// Product version (`2 VERS <version>`)
    pub version: String,
    /// Human readable product name (`2 NAME <name>`)
    pub name: String,
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            product_id: "TreeGedcom".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: "Family Tree GEDCOM Exporter".to_string(),
        }
    }
}

/// Configuration for an export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory holding the three input documents
    pub data_dir: PathBuf,
    /// File name of the tree node document
    pub tree_file: String,
    /// File name of the annotations document
    pub annotations_file: String,
    /// File name of the relatives document
    pub relatives_file: String,
    /// Where the GEDCOM file is written
    pub output_path: PathBuf,
    /// Header metadata
    pub source: SourceInfo,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            tree_file: "tree.json".to_string(),
            annotations_file: "annotations.json".to_string(),
            relatives_file: "relatives_10.json".to_string(),
            output_path: PathBuf::from("output").join("export.ged"),
            source: SourceInfo::default(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    #[must_use]
    pub fn with_tree_file(mut self, tree_file: impl Into<String>) -> Self {
        self.tree_file = tree_file.into();
        self
    }

    #[must_use]
    pub fn with_annotations_file(mut self, annotations_file: impl Into<String>) -> Self {
        self.annotations_file = annotations_file.into();
        self
    }

    #[must_use]
    pub fn with_relatives_file(mut self, relatives_file: impl Into<String>) -> Self {
        self.relatives_file = relatives_file.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = source;
        self
    }

    /// Full path of the tree node document
    #[must_use]
    pub fn tree_path(&self) -> PathBuf {
        self.data_dir.join(&self.tree_file)
    }

    /// Full path of the annotations document
    #[must_use]
    pub fn annotations_path(&self) -> PathBuf {
        self.data_dir.join(&self.annotations_file)
    }

    /// Full path of the relatives document
    #[must_use]
    pub fn relatives_path(&self) -> PathBuf {
        self.data_dir.join(&self.relatives_file)
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl fmt::Display for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Export Configuration:")?;
        writeln!(f, "  Data Directory: {}", self.data_dir.display())?;
        writeln!(f, "  Tree: {}", self.tree_file)?;
        writeln!(f, "  Annotations: {}", self.annotations_file)?;
        writeln!(f, "  Relatives: {}", self.relatives_file)?;
        writeln!(f, "  Output: {}", self.output_path.display())?;
        writeln!(
            f,
            "  Source: {} {} ({})",
            self.source.product_id, self.source.version, self.source.name
        )
    }
}
