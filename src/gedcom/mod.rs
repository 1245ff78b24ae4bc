//! GEDCOM 5.5.1 output
//!
//! Line model, event date/place formatting, record builders and the document
//! serializer.

pub mod date;
pub mod line;
pub mod records;
pub mod serializer;

pub use date::{format_date, format_place};
pub use line::GedcomLine;
pub use records::{IndividualRecordBuilder, family_record};
pub use serializer::{GEDCOM_VERSION, GedcomDocument};
