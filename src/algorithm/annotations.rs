//! Annotation lookup by canonical key

use rustc_hash::FxHashMap;

use super::identity::NormalizedTree;
use crate::models::Annotation;
use crate::utils::logging::log_dropped_records;

/// Annotations indexed by the canonical key of the individual they describe
#[derive(Debug, Clone, Default)]
pub struct AnnotationIndex {
    by_key: FxHashMap<String, Annotation>,
}

impl AnnotationIndex {
    /// Index annotations against a normalized tree
    ///
    /// An annotation keyed by an internal node id is moved to that node's profile id
    /// when one is known. Later annotations for the same key replace earlier ones.
    #[must_use]
    pub fn build(annotations: &[Annotation], tree: &NormalizedTree) -> Self {
        let mut by_key = FxHashMap::default();
        let mut dropped = 0;

        for annotation in annotations {
            match annotation.declared_key() {
                Some(key) => {
                    by_key.insert(tree.canonical(key), annotation.clone());
                }
                None => dropped += 1,
            }
        }

        log_dropped_records("annotation", dropped, "no profile_id or tree_node_id");
        Self { by_key }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Annotation> {
        self.by_key.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
