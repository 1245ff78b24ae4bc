//! GEDCOM document assembly
//!
//! A document is always `HEAD`, every `FAM` record, every `INDI` record, `TRLR`, in
//! that order. The serializer only frames and joins lines; it trusts the builders.

use std::fmt;
use std::path::Path;

use super::line::GedcomLine;
use crate::config::SourceInfo;
use crate::error::Result;
use crate::error::util::write_atomically;

/// GEDCOM version declared in the header
pub const GEDCOM_VERSION: &str = "5.5.1";

/// Lines of the `HEAD` record
#[must_use]
pub fn header(source: &SourceInfo) -> Vec<GedcomLine> {
    vec![
        GedcomLine::new(0, "HEAD"),
        GedcomLine::with_value(1, "SOUR", &source.product_id),
        GedcomLine::with_value(2, "VERS", &source.version),
        GedcomLine::with_value(2, "NAME", &source.name),
        GedcomLine::with_value(1, "CHAR", "UTF-8"),
        GedcomLine::new(1, "GEDC"),
        GedcomLine::with_value(2, "VERS", GEDCOM_VERSION),
        GedcomLine::with_value(2, "FORM", "LINEAGE-LINKED"),
    ]
}

/// Line of the `TRLR` record
#[must_use]
pub fn trailer() -> GedcomLine {
    GedcomLine::new(0, "TRLR")
}

/// A complete, ordered GEDCOM document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomDocument {
    lines: Vec<GedcomLine>,
}

impl GedcomDocument {
    /// Frame family and individual blocks with header and trailer
    #[must_use]
    pub fn assemble(
        source: &SourceInfo,
        family_block: Vec<GedcomLine>,
        individual_block: Vec<GedcomLine>,
    ) -> Self {
        let mut lines = header(source);
        lines.reserve(family_block.len() + individual_block.len() + 1);
        lines.extend(family_block);
        lines.extend(individual_block);
        lines.push(trailer());
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[GedcomLine] {
        &self.lines
    }

    /// Number of level-0 lines with the given tag
    #[must_use]
    pub fn record_count(&self, tag: &str) -> usize {
        self.lines
            .iter()
            .filter(|line| line.level == 0 && line.tag == tag)
            .count()
    }

    /// Write the document to `path` atomically
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_atomically(path, &self.to_string())
    }
}

/// Lines joined by `\n`, without a trailing newline
impl fmt::Display for GedcomDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
