//! Four parallel key/value mappings kept in lockstep

use crate::model::{TrieValue, TrieVariant};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// One variant's mapping. Iteration follows insertion order; overwriting a
/// key keeps its original position.
pub type TrieMap = IndexMap<String, TrieValue>;

/// The session's dataset, held as one mapping per trie variant
///
/// The public API only exposes operations that touch all four mappings,
/// so a caller can never observe one variant holding a key another lacks.
#[derive(Clone, Debug, Default)]
pub struct MultiTrieStore {
    generic: TrieMap,
    storage: TrieMap,
    transaction: TrieMap,
    receipt: TrieMap,
}

impl MultiTrieStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // === Mutations ===

    /// Insert or overwrite `key` in every variant
    ///
    /// An empty key or value is ignored. Returns whether the insert was
    /// applied; there is no error path.
    pub fn insert(&mut self, key: &str, raw_value: &str) -> bool {
        if key.is_empty() || raw_value.is_empty() {
            trace!(key, raw_value, "ignoring insert with empty key or value");
            return false;
        }

        for variant in TrieVariant::ALL {
            self.map_mut(variant)
                .insert(key.to_string(), variant.wrap(raw_value));
        }

        debug!(key, raw_value, entries = self.len(), "inserted into all tries");
        true
    }

    /// Same as [`insert`](Self::insert). Reinserting is the update path;
    /// the key does not need to exist beforehand.
    pub fn modify(&mut self, key: &str, raw_value: &str) -> bool {
        self.insert(key, raw_value)
    }

    /// Remove `key` from every variant
    ///
    /// Deleting an absent key, or passing an empty key, does nothing.
    /// Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        if key.is_empty() {
            trace!("ignoring delete with empty key");
            return false;
        }

        let mut removed = false;
        for variant in TrieVariant::ALL {
            removed |= self.map_mut(variant).shift_remove(key).is_some();
        }

        if removed {
            debug!(key, entries = self.len(), "deleted from all tries");
        } else {
            trace!(key, "delete of absent key");
        }
        removed
    }

    /// Drop every entry from every variant
    pub fn clear(&mut self) {
        for variant in TrieVariant::ALL {
            self.map_mut(variant).clear();
        }
    }

    // === Reads ===

    /// The flat mapping for one variant, in insertion order
    pub fn entries(&self, variant: TrieVariant) -> &TrieMap {
        match variant {
            TrieVariant::Generic => &self.generic,
            TrieVariant::Storage => &self.storage,
            TrieVariant::Transaction => &self.transaction,
            TrieVariant::Receipt => &self.receipt,
        }
    }

    /// Look up one key in one variant
    pub fn get(&self, variant: TrieVariant, key: &str) -> Option<&TrieValue> {
        self.entries(variant).get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.generic.contains_key(key)
    }

    /// Keys in insertion order (shared by all variants)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.generic.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.generic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generic.is_empty()
    }

    fn map_mut(&mut self, variant: TrieVariant) -> &mut TrieMap {
        match variant {
            TrieVariant::Generic => &mut self.generic,
            TrieVariant::Storage => &mut self.storage,
            TrieVariant::Transaction => &mut self.transaction,
            TrieVariant::Receipt => &mut self.receipt,
        }
    }
}
