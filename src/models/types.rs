//! Common domain type definitions

use std::fmt;

/// Sex of an individual as recorded in the tree or an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl Gender {
    /// GEDCOM `SEX` value, if the sex is known
    #[must_use]
    pub fn gedcom_code(self) -> Option<&'static str> {
        match self {
            Self::Male => Some("M"),
            Self::Female => Some("F"),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn is_male(self) -> bool {
        self == Self::Male
    }

    #[must_use]
    pub fn is_female(self) -> bool {
        self == Self::Female
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "man" => Self::Male,
            "f" | "female" | "woman" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<Option<&str>> for Gender {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Self::Unknown, Self::from)
    }
}

/// Symbolic cross-reference of an individual record (`@I<n>@`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndividualXref(pub u32);

impl fmt::Display for IndividualXref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@I{}@", self.0)
    }
}

/// Symbolic cross-reference of a family record (`@F<n>@`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyXref(pub u32);

impl fmt::Display for FamilyXref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@F{}@", self.0)
    }
}
