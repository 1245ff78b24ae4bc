//! Family reconstruction
//!
//! The tree document has no family records. Couples are implied two ways: by partner
//! links between two people, and by a child that lists two parents. Both sources are
//! collected as parent-pair candidates, deduplicated on the unordered pair, and only
//! then turned into families with symbols.
//!
//! The two sources use different child rules:
//! - partner link: every individual whose parents include both partners
//! - parent links: every individual whose parents are exactly the pair

use rustc_hash::{FxHashMap, FxHashSet};

use super::annotations::AnnotationIndex;
use super::identity::NormalizedTree;
use super::ids::IdAllocator;
use super::precedence::resolved_gender;
use crate::models::{Discovery, Family, FamilyXref, Gender, ParentPair};

/// A couple found in the link graph, before deduplication
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    pair: ParentPair,
    /// Member seen first, used as husband when sex does not decide
    first: String,
    discovery: Discovery,
}

impl Candidate {
    fn second(&self) -> &str {
        let [low, high] = self.pair.members();
        if low == self.first { high } else { low }
    }
}

/// Derives nuclear-family units from a normalized tree
pub struct FamilyReconstructor<'a> {
    tree: &'a NormalizedTree,
    annotations: &'a AnnotationIndex,
}

impl<'a> FamilyReconstructor<'a> {
    #[must_use]
    pub fn new(tree: &'a NormalizedTree, annotations: &'a AnnotationIndex) -> Self {
        Self { tree, annotations }
    }

    /// Build all families, allocating one family symbol per accepted couple
    ///
    /// Families are returned in discovery order: partner-link couples first, in
    /// individual order, then couples only implied by parent links.
    pub fn reconstruct(&self, ids: &mut IdAllocator) -> Vec<Family> {
        let candidates = self.candidates();

        let families: Vec<Family> = candidates
            .into_iter()
            .map(|candidate| self.accept(candidate, ids.next_family()))
            .collect();

        log::debug!(
            "Reconstructed {} families ({} from partner links)",
            families.len(),
            families
                .iter()
                .filter(|f| f.discovery == Discovery::PartnerLink)
                .count()
        );

        families
    }

    /// Unique couples from both link sources, first discovery wins
    fn candidates(&self) -> Vec<Candidate> {
        let partner_links = self.tree.iter().flat_map(|individual| {
            individual.partner_keys.iter().filter_map(move |partner| {
                Some(Candidate {
                    pair: ParentPair::new(&individual.key, partner)?,
                    first: individual.key.clone(),
                    discovery: Discovery::PartnerLink,
                })
            })
        });

        let parent_links = self.tree.iter().filter_map(|individual| {
            let pair = individual.parent_pair()?;
            let [low, _] = pair.members();
            Some(Candidate {
                first: low.to_string(),
                pair,
                discovery: Discovery::ParentLinks,
            })
        });

        let mut seen: FxHashSet<ParentPair> = FxHashSet::default();
        partner_links
            .chain(parent_links)
            .filter(|candidate| seen.insert(candidate.pair.clone()))
            .collect()
    }

    fn accept(&self, candidate: Candidate, xref: FamilyXref) -> Family {
        let children = self
            .tree
            .iter()
            .filter(|individual| match candidate.discovery {
                Discovery::PartnerLink => individual.has_parents(&candidate.pair),
                Discovery::ParentLinks => individual.has_exact_parents(&candidate.pair),
            })
            .map(|individual| individual.key.clone())
            .collect();

        let (husband, wife) = self.assign_roles(&candidate.first, candidate.second());

        Family {
            xref,
            husband,
            wife,
            children,
            discovery: candidate.discovery,
        }
    }

    /// Order a couple as (`HUSB`, `WIFE`)
    ///
    /// A known male goes first and a known female second. When neither member's sex
    /// settles it, the first-seen member is listed as `HUSB`; this is only a
    /// deterministic tie-break.
    fn assign_roles(&self, first: &str, second: &str) -> (String, String) {
        let a = self.gender_of(first);
        let b = self.gender_of(second);

        let first_is_husband = if a.is_male() {
            true
        } else if b.is_male() {
            false
        } else {
            !a.is_female()
        };

        if first_is_husband {
            (first.to_string(), second.to_string())
        } else {
            (second.to_string(), first.to_string())
        }
    }

    fn gender_of(&self, key: &str) -> Gender {
        self.tree.get(key).map_or(Gender::Unknown, |individual| {
            resolved_gender(individual, self.annotations.get(key))
        })
    }
}

/// Family back-references per individual
#[derive(Debug, Clone, Default)]
pub struct FamilyMembership {
    child_of: FxHashMap<String, Vec<FamilyXref>>,
    spouse_in: FxHashMap<String, Vec<FamilyXref>>,
}

impl FamilyMembership {
    #[must_use]
    pub fn from_families(families: &[Family]) -> Self {
        let mut membership = Self::default();
        for family in families {
            for child in &family.children {
                membership
                    .child_of
                    .entry(child.clone())
                    .or_default()
                    .push(family.xref);
            }
            for parent in [&family.husband, &family.wife] {
                membership
                    .spouse_in
                    .entry(parent.clone())
                    .or_default()
                    .push(family.xref);
            }
        }
        membership
    }

    /// Families in which `key` is a child (`FAMC`)
    #[must_use]
    pub fn child_of(&self, key: &str) -> &[FamilyXref] {
        self.child_of.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Families in which `key` is a parent (`FAMS`)
    #[must_use]
    pub fn spouse_in(&self, key: &str) -> &[FamilyXref] {
        self.spouse_in.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}
