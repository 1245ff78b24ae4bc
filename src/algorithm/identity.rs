//! Identity normalization
//!
//! A tree node can be known by an internal node id, an external profile id, or both,
//! and links between nodes use either form. Normalization picks one canonical key per
//! person (profile id over node id) and rewrites every link to that key.

use rustc_hash::FxHashMap;

use crate::models::{Individual, RawNode};
use crate::utils::logging::log_dropped_records;

/// Individuals keyed by canonical key, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct NormalizedTree {
    individuals: Vec<Individual>,
    index: FxHashMap<String, usize>,
    /// internal node id -> external profile id
    aliases: FxHashMap<String, String>,
    dropped: usize,
}

impl NormalizedTree {
    /// Normalize raw tree nodes
    ///
    /// Nodes without any identifier are dropped. When two nodes share a canonical key
    /// the later node replaces the earlier one but keeps its position, so iteration
    /// order is the order keys were first seen.
    #[must_use]
    pub fn from_nodes(nodes: &[RawNode]) -> Self {
        let aliases: FxHashMap<String, String> = nodes
            .iter()
            .filter_map(|node| {
                let internal = node.internal_id()?;
                let external = node.external_id()?;
                Some((internal.to_string(), external.to_string()))
            })
            .collect();

        let mut tree = Self {
            individuals: Vec::with_capacity(nodes.len()),
            index: FxHashMap::default(),
            aliases,
            dropped: 0,
        };

        for node in nodes {
            let aliases = &tree.aliases;
            let Some(individual) = Individual::from_raw(node, |link| resolve_alias(aliases, link))
            else {
                tree.dropped += 1;
                continue;
            };

            let existing = tree.index.get(&individual.key).copied();
            match existing {
                Some(position) => {
                    log::debug!(
                        "Duplicate tree node for key {}, keeping the later one",
                        individual.key
                    );
                    tree.individuals[position] = individual;
                }
                None => {
                    tree.index.insert(individual.key.clone(), tree.individuals.len());
                    tree.individuals.push(individual);
                }
            }
        }

        log_dropped_records("tree node", tree.dropped, "no id or profile_id");
        log::debug!(
            "Normalized {} tree nodes into {} individuals ({} aliases)",
            nodes.len(),
            tree.individuals.len(),
            tree.aliases.len()
        );

        tree
    }

    /// Canonical form of a link or key
    ///
    /// Internal ids with a known profile id are replaced; anything else (already
    /// canonical, or pointing outside this tree) is returned unchanged.
    #[must_use]
    pub fn canonical(&self, id: &str) -> String {
        resolve_alias(&self.aliases, id)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Individual> {
        self.index.get(key).map(|&i| &self.individuals[i])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Number of malformed nodes that were dropped
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

fn resolve_alias(aliases: &FxHashMap<String, String>, id: &str) -> String {
    aliases.get(id).cloned().unwrap_or_else(|| id.to_string())
}
