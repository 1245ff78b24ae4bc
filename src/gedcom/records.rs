//! GEDCOM record builders
//!
//! `family_record` renders one reconstructed family; `IndividualRecordBuilder`
//! renders each person with annotation precedence applied and family
//! back-references attached.

use rustc_hash::FxHashSet;

use super::date::{format_date, format_place};
use super::line::GedcomLine;
use crate::algorithm::{
    AnnotationIndex, FamilyMembership, IdAllocator, resolved_gender, resolved_name,
};
use crate::models::{Family, Individual, IndividualXref, Occurrence};

/// Lines of one `FAM` record
pub fn family_record(family: &Family, ids: &mut IdAllocator) -> Vec<GedcomLine> {
    let mut lines = Vec::with_capacity(3 + family.children.len());
    lines.push(GedcomLine::record(family.xref, "FAM"));
    lines.push(GedcomLine::with_value(1, "HUSB", ids.individual(&family.husband)));
    lines.push(GedcomLine::with_value(1, "WIFE", ids.individual(&family.wife)));
    for child in &family.children {
        lines.push(GedcomLine::with_value(1, "CHIL", ids.individual(child)));
    }
    lines
}

/// Which life events an individual record may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Birth,
    Death,
    Residence,
}

impl EventKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Birth => "BIRT",
            Self::Death => "DEAT",
            Self::Residence => "RESI",
        }
    }

    /// Birth and death are only worth recording with at least a year; a residence
    /// is useful with a place alone.
    fn requires_date(self) -> bool {
        !matches!(self, Self::Residence)
    }
}

/// Append one event block if it has content
///
/// `RESI` is written with a date or a place alone. `BIRT` and `DEAT` are dated
/// events: without a usable year they are omitted even if a place is known.
fn event_lines(kind: EventKind, occurrence: Option<&Occurrence>, lines: &mut Vec<GedcomLine>) {
    let Some(occurrence) = occurrence else {
        return;
    };

    let date = format_date(occurrence);
    let place = format_place(occurrence);
    if date.is_none() && (kind.requires_date() || place.is_none()) {
        return;
    }

    lines.push(GedcomLine::new(1, kind.tag()));
    if let Some(date) = date {
        lines.push(GedcomLine::with_value(2, "DATE", date));
    }
    if let Some(place) = place {
        lines.push(GedcomLine::with_value(2, "PLAC", place));
    }
}

/// Builds `INDI` records for one export
pub struct IndividualRecordBuilder<'a> {
    annotations: &'a AnnotationIndex,
    membership: &'a FamilyMembership,
    emitted: FxHashSet<IndividualXref>,
}

impl<'a> IndividualRecordBuilder<'a> {
    #[must_use]
    pub fn new(annotations: &'a AnnotationIndex, membership: &'a FamilyMembership) -> Self {
        Self {
            annotations,
            membership,
            emitted: FxHashSet::default(),
        }
    }

    /// Lines of one `INDI` record
    ///
    /// Returns no lines if a record for the same symbol was already built.
    pub fn build(&mut self, individual: &Individual, ids: &mut IdAllocator) -> Vec<GedcomLine> {
        let xref = ids.individual(&individual.key);
        if !self.emitted.insert(xref) {
            log::debug!("Skipping repeated record for {}", individual.key);
            return Vec::new();
        }

        let annotation = self.annotations.get(&individual.key);
        let mut lines = vec![GedcomLine::record(xref, "INDI")];

        let (first, last) = resolved_name(individual, annotation);
        if first.is_some() || last.is_some() {
            let surname = last.unwrap_or_default();
            let name = match first {
                Some(given) => format!("{given} /{surname}/"),
                None => format!("/{surname}/"),
            };
            lines.push(GedcomLine::with_value(1, "NAME", name));
        }

        if let Some(code) = resolved_gender(individual, annotation).gedcom_code() {
            lines.push(GedcomLine::with_value(1, "SEX", code));
        }

        if let Some(annotation) = annotation {
            event_lines(EventKind::Birth, annotation.birth_occurrence.as_ref(), &mut lines);
            event_lines(EventKind::Death, annotation.death_occurrence.as_ref(), &mut lines);
            event_lines(
                EventKind::Residence,
                annotation.residence_occurrence.as_ref(),
                &mut lines,
            );
        }

        if let Some(image) = individual.image.as_deref() {
            lines.push(GedcomLine::new(1, "OBJE"));
            lines.push(GedcomLine::with_value(2, "FILE", image));
        }

        self.push_family_links(&individual.key, &mut lines);
        lines
    }

    /// Minimal record for a family parent that has no tree node of its own
    ///
    /// Such a key is only known from someone else's links, so the record carries
    /// nothing but its family back-references.
    pub fn build_unresolved(&mut self, key: &str, ids: &mut IdAllocator) -> Vec<GedcomLine> {
        let xref = ids.individual(key);
        if !self.emitted.insert(xref) {
            return Vec::new();
        }

        let mut lines = vec![GedcomLine::record(xref, "INDI")];
        self.push_family_links(key, &mut lines);
        lines
    }

    fn push_family_links(&self, key: &str, lines: &mut Vec<GedcomLine>) {
        for family in self.membership.child_of(key) {
            lines.push(GedcomLine::with_value(1, "FAMC", family));
        }
        for family in self.membership.spouse_in(key) {
            lines.push(GedcomLine::with_value(1, "FAMS", family));
        }
    }
}
