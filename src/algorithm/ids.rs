//! Symbolic id allocation
//!
//! One `IdAllocator` lives for exactly one export. It is passed by reference to
//! family reconstruction and record building so both agree on every cross-reference.

use rustc_hash::FxHashMap;

use crate::models::{FamilyXref, IndividualXref};

/// Issues `@I<n>@` and `@F<n>@` symbols, both counting from 1
#[derive(Debug, Default)]
pub struct IdAllocator {
    individuals: FxHashMap<String, IndividualXref>,
    families: u32,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol for an individual key; the same key always gets the same symbol
    pub fn individual(&mut self, key: &str) -> IndividualXref {
        if let Some(&xref) = self.individuals.get(key) {
            return xref;
        }
        let xref = IndividualXref(self.next_individual());
        self.individuals.insert(key.to_string(), xref);
        xref
    }

    /// Symbol for a new family; never reused
    pub fn next_family(&mut self) -> FamilyXref {
        self.families += 1;
        FamilyXref(self.families)
    }

    /// Number of individual symbols issued so far
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of family symbols issued so far
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families as usize
    }

    fn next_individual(&self) -> u32 {
        u32::try_from(self.individuals.len()).map_or(u32::MAX, |n| n + 1)
    }
}
