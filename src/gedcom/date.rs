//! Date and place formatting for life events
//!
//! Dates come in as loose day/month/year parts. The most precise valid GEDCOM date
//! is produced and anything that does not form a calendar date degrades to the bare
//! year. Without a year there is no date at all.

use chrono::NaiveDate;
use itertools::Itertools;

use crate::models::Occurrence;

/// GEDCOM month codes
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

fn month_code(month: i32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTHS.get(index).copied()
}

/// Format the date parts of an occurrence
///
/// - day, month and year: `03 MAY 1990`
/// - month and year: `MAY 1990`
/// - year only, or parts that are not a real date: `1990`
/// - no year: `None`
#[must_use]
pub fn format_date(occurrence: &Occurrence) -> Option<String> {
    let year = occurrence.year.filter(|&y| y > 0)?;

    let precise = match (occurrence.day, occurrence.month) {
        (Some(day), Some(month)) => {
            let valid = u32::try_from(month)
                .ok()
                .zip(u32::try_from(day).ok())
                .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d));
            valid.and_then(|_| Some(format!("{day:02} {} {year}", month_code(month)?)))
        }
        (None, Some(month)) => month_code(month).map(|code| format!("{code} {year}")),
        _ => None,
    };

    Some(precise.unwrap_or_else(|| year.to_string()))
}

/// Format the place parts of an occurrence as `city, county, state, country`
///
/// Empty parts are skipped; `None` if nothing is left.
#[must_use]
pub fn format_place(occurrence: &Occurrence) -> Option<String> {
    let place = [
        &occurrence.city,
        &occurrence.county,
        &occurrence.state,
        &occurrence.country,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref().map(str::trim))
    .filter(|part| !part.is_empty())
    .join(", ");

    (!place.is_empty()).then_some(place)
}
