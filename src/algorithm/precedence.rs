//! Field precedence between annotations and raw tree data
//!
//! A user-entered annotation value wins whenever it is present and non-empty;
//! otherwise the raw tree value is used. Every overridable field goes through
//! `resolve`.

use crate::models::{Annotation, Gender, Individual};

/// Pick the annotation value if it is usable, else the raw value
///
/// Blank strings on either side count as absent.
#[must_use]
pub fn resolve<'a>(annotation: Option<&'a str>, raw: Option<&'a str>) -> Option<&'a str> {
    let usable = |v: Option<&'a str>| v.filter(|s| !s.trim().is_empty());
    usable(annotation).or_else(|| usable(raw))
}

/// First and last name after precedence
#[must_use]
pub fn resolved_name<'a>(
    individual: &'a Individual,
    annotation: Option<&'a Annotation>,
) -> (Option<&'a str>, Option<&'a str>) {
    let first = resolve(
        annotation.and_then(|a| a.first_name.as_deref()),
        individual.first_name.as_deref(),
    );
    let last = resolve(
        annotation.and_then(|a| a.last_name.as_deref()),
        individual.last_name.as_deref(),
    );
    (first, last)
}

/// Sex after precedence
#[must_use]
pub fn resolved_gender(individual: &Individual, annotation: Option<&Annotation>) -> Gender {
    match resolve(annotation.and_then(|a| a.sex.as_deref()), None) {
        Some(sex) => Gender::from(sex),
        None => individual.gender,
    }
}
