//! Individual entity model
//!
//! An `Individual` is a person after identity normalization: exactly one per
//! canonical key, with every relationship link rewritten to canonical keys.

use smallvec::SmallVec;

use super::family::ParentPair;
use super::node::RawNode;
use super::types::Gender;

/// Parent keys of one individual; two in the normal case
pub type ParentKeys = SmallVec<[String; 2]>;

/// A normalized person in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Canonical key (profile id if known, else the internal node id)
    pub key: String,
    /// Sex from the raw node
    pub gender: Gender,
    /// Raw first name
    pub first_name: Option<String>,
    /// Raw last name
    pub last_name: Option<String>,
    /// Image reference from the raw node
    pub image: Option<String>,
    /// Canonical keys of this person's parents, without duplicates
    pub parent_keys: ParentKeys,
    /// Canonical keys of this person's partners, without duplicates
    pub partner_keys: Vec<String>,
}

impl Individual {
    /// Create an individual with only a key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            gender: Gender::Unknown,
            first_name: None,
            last_name: None,
            image: None,
            parent_keys: ParentKeys::new(),
            partner_keys: Vec::new(),
        }
    }

    /// Build an individual from a raw node
    ///
    /// `resolve_link` maps every parent and partner link to its canonical form.
    /// Returns `None` when the node has no usable identifier.
    pub fn from_raw<F>(node: &RawNode, mut resolve_link: F) -> Option<Self>
    where
        F: FnMut(&str) -> String,
    {
        let key = node.canonical_key()?.to_string();

        let mut parent_keys = ParentKeys::new();
        for link in &node.parent_ids {
            let resolved = resolve_link(link.as_str());
            if !parent_keys.contains(&resolved) {
                parent_keys.push(resolved);
            }
        }

        let mut partner_keys: Vec<String> = Vec::with_capacity(node.partner_ids.len());
        for link in &node.partner_ids {
            let resolved = resolve_link(link.as_str());
            if !partner_keys.contains(&resolved) {
                partner_keys.push(resolved);
            }
        }

        Some(Self {
            key,
            gender: Gender::from(node.sex.as_deref()),
            first_name: node.first_name.clone(),
            last_name: node.last_name.clone(),
            image: node.image_reference().map(str::to_string),
            parent_keys,
            partner_keys,
        })
    }

    /// Whether both members of `pair` are among this individual's parents
    #[must_use]
    pub fn has_parents(&self, pair: &ParentPair) -> bool {
        pair.members()
            .iter()
            .all(|member| self.parent_keys.iter().any(|p| p == member))
    }

    /// Whether this individual's parent set is exactly `pair`
    #[must_use]
    pub fn has_exact_parents(&self, pair: &ParentPair) -> bool {
        self.parent_keys.len() == 2 && self.has_parents(pair)
    }

    /// The unordered pair formed by this individual's parents, if there are exactly two
    #[must_use]
    pub fn parent_pair(&self) -> Option<ParentPair> {
        match self.parent_keys.as_slice() {
            [a, b] => ParentPair::new(a, b),
            _ => None,
        }
    }
}
