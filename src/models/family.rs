//! Family unit representation
//!
//! A `Family` is a derived nuclear-family unit: two parents and the children they
//! share. Families are never read from input; they are reconstructed from parent and
//! partner links.

use super::types::FamilyXref;

/// Unordered pair of distinct parent keys
///
/// Members are stored sorted, so two pairs with the same members compare and hash
/// equal regardless of the order they were discovered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParentPair {
    low: String,
    high: String,
}

impl ParentPair {
    /// Create a pair; `None` if the members are equal or either is empty
    #[must_use]
    pub fn new(a: &str, b: &str) -> Option<Self> {
        if a == b || a.is_empty() || b.is_empty() {
            return None;
        }
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Some(Self {
            low: low.to_string(),
            high: high.to_string(),
        })
    }

    /// Both members in sorted order
    #[must_use]
    pub fn members(&self) -> [&str; 2] {
        [&self.low, &self.high]
    }
}

/// Which kind of link a family was discovered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discovery {
    /// An explicit partner link between the two parents
    PartnerLink,
    /// A child listing exactly these two parents
    ParentLinks,
}

/// A reconstructed nuclear-family unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Symbolic id allocated when the family was accepted
    pub xref: FamilyXref,
    /// Parent listed first (`HUSB`)
    pub husband: String,
    /// Parent listed second (`WIFE`)
    pub wife: String,
    /// Canonical keys of the children, in individual iteration order
    pub children: Vec<String>,
    /// How the family was found
    pub discovery: Discovery,
}
