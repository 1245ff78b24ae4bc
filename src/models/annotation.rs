//! User-entered annotation model
//!
//! Annotations override raw tree data for names and sex, and are the only source of
//! life events (birth, death, residence).

use serde::Deserialize;

use super::serde::{deserialize_lenient_number, deserialize_lenient_string};

/// A dated, located life event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Occurrence {
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub day: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub month: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub county: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub country: Option<String>,
}

impl Occurrence {
    /// Create an occurrence with only a year
    #[must_use]
    pub fn in_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_month(mut self, month: i32) -> Self {
        self.month = Some(month);
        self
    }

    #[must_use]
    pub fn with_day(mut self, day: i32) -> Self {
        self.day = Some(day);
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// One record of the annotations document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Annotation {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub profile_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub tree_node_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub sex: Option<String>,
    #[serde(default)]
    pub birth_occurrence: Option<Occurrence>,
    #[serde(default)]
    pub death_occurrence: Option<Occurrence>,
    #[serde(default)]
    pub residence_occurrence: Option<Occurrence>,
}

impl Annotation {
    /// Annotation attached to a profile id
    #[must_use]
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: Some(profile_id.into()),
            ..Self::default()
        }
    }

    /// Annotation attached to an internal tree node id
    #[must_use]
    pub fn for_tree_node(tree_node_id: impl Into<String>) -> Self {
        Self {
            tree_node_id: Some(tree_node_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    #[must_use]
    pub fn with_birth(mut self, birth: Occurrence) -> Self {
        self.birth_occurrence = Some(birth);
        self
    }

    #[must_use]
    pub fn with_death(mut self, death: Occurrence) -> Self {
        self.death_occurrence = Some(death);
        self
    }

    #[must_use]
    pub fn with_residence(mut self, residence: Occurrence) -> Self {
        self.residence_occurrence = Some(residence);
        self
    }

    /// Key as written in the document: profile id, else tree node id
    #[must_use]
    pub fn declared_key(&self) -> Option<&str> {
        non_empty(self.profile_id.as_deref()).or_else(|| non_empty(self.tree_node_id.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
