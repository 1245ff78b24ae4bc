//! GEDCOM line model
//!
//! Every GEDCOM line is `<level> [<xref>] <tag> [<value>]`. Level 0 opens a record,
//! level 1 is an attribute of that record, level 2 an attribute of the preceding
//! level-1 line.

use std::fmt;

/// One line of a GEDCOM document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine {
    pub level: u8,
    pub xref: Option<String>,
    pub tag: &'static str,
    pub value: Option<String>,
}

impl GedcomLine {
    /// A line without a value
    #[must_use]
    pub fn new(level: u8, tag: &'static str) -> Self {
        Self {
            level,
            xref: None,
            tag,
            value: None,
        }
    }

    /// A level-0 record line carrying a cross-reference id
    #[must_use]
    pub fn record(xref: impl fmt::Display, tag: &'static str) -> Self {
        Self {
            level: 0,
            xref: Some(xref.to_string()),
            tag,
            value: None,
        }
    }

    /// A line with a value
    #[must_use]
    pub fn with_value(level: u8, tag: &'static str, value: impl fmt::Display) -> Self {
        Self {
            level,
            xref: None,
            tag,
            value: Some(value.to_string()),
        }
    }
}

impl fmt::Display for GedcomLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(xref) = &self.xref {
            write!(f, " {xref}")?;
        }
        write!(f, " {}", self.tag)?;
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}
