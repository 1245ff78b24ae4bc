//! Export pipeline
//!
//! `GedcomExporter` ties the stages together for one export:
//!
//! 1. load the raw documents from the provider
//! 2. normalize identities and index annotations
//! 3. reconstruct families, allocating symbols as records are built
//! 4. build `FAM` then `INDI` records and frame them with `HEAD`/`TRLR`
//!
//! All state lives for a single call; nothing is shared between exports.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use crate::algorithm::{
    AnnotationIndex, FamilyMembership, FamilyReconstructor, IdAllocator, NormalizedTree,
};
use crate::config::{ExportConfig, SourceInfo};
use crate::error::Result;
use crate::gedcom::{GedcomDocument, IndividualRecordBuilder, family_record};
use crate::provider::{JsonDirectoryProvider, RawDataProvider};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Counts describing one finished export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// `INDI` records written, including parents known only from links
    pub individuals: usize,
    /// `FAM` records written
    pub families: usize,
    /// Tree nodes skipped for having no identifier
    pub dropped_nodes: usize,
    /// Entries in the relatives document
    pub relatives: usize,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} individuals and {} families.",
            self.individuals, self.families
        )
    }
}

/// Turns the documents of one raw data provider into GEDCOM
pub struct GedcomExporter<P> {
    provider: P,
    source: SourceInfo,
}

impl GedcomExporter<JsonDirectoryProvider> {
    /// Exporter reading the JSON documents named by `config`
    #[must_use]
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(JsonDirectoryProvider::from_config(config)).with_source(config.source.clone())
    }
}

impl<P: RawDataProvider> GedcomExporter<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            source: SourceInfo::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = source;
        self
    }

    /// Build the complete document without writing it
    pub fn generate(&self) -> Result<GedcomDocument> {
        self.generate_with_summary().map(|(document, _)| document)
    }

    /// Build the document and write it to `path`
    ///
    /// The file is replaced atomically; on failure no partial output is left behind.
    pub fn export(&self, path: &Path) -> Result<ExportSummary> {
        let (document, summary) = self.generate_with_summary()?;

        let start = Instant::now();
        log_operation_start("Writing GEDCOM document to", path);
        document.write_to(path)?;
        log_operation_complete("wrote", path, document.lines().len(), Some(start.elapsed()));

        log::info!("{summary}");
        Ok(summary)
    }

    fn generate_with_summary(&self) -> Result<(GedcomDocument, ExportSummary)> {
        let raw = self.provider.load()?;

        let tree = NormalizedTree::from_nodes(&raw.tree);
        let annotations = AnnotationIndex::build(&raw.annotations, &tree);
        log::debug!("{} individuals, {} annotations", tree.len(), annotations.len());

        let mut ids = IdAllocator::new();
        let families = FamilyReconstructor::new(&tree, &annotations).reconstruct(&mut ids);

        let family_block: Vec<_> = families
            .iter()
            .flat_map(|family| family_record(family, &mut ids))
            .collect();

        let membership = FamilyMembership::from_families(&families);
        let mut builder = IndividualRecordBuilder::new(&annotations, &membership);
        let mut individual_block = Vec::new();
        for individual in tree.iter() {
            individual_block.extend(builder.build(individual, &mut ids));
        }

        // parents referenced by a family but absent from the tree still need a record
        let dangling = families
            .iter()
            .flat_map(|family| [family.husband.as_str(), family.wife.as_str()])
            .filter(|key| !tree.contains(key));
        for key in dangling {
            let lines = builder.build_unresolved(key, &mut ids);
            if !lines.is_empty() {
                log::debug!("Family parent {key} has no tree node");
            }
            individual_block.extend(lines);
        }

        log::debug!(
            "Allocated {} individual and {} family symbols",
            ids.individual_count(),
            ids.family_count()
        );

        let document = GedcomDocument::assemble(&self.source, family_block, individual_block);
        let summary = ExportSummary {
            individuals: document.record_count("INDI"),
            families: ids.family_count(),
            dropped_nodes: tree.dropped(),
            relatives: raw.relatives.len(),
        };
        Ok((document, summary))
    }
}
