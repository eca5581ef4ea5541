//! Thread-safe handle around [`MultiTrieStore`]

use super::MultiTrieStore;
use crate::model::{Graph, TrieVariant};
use crate::viz::{format_hierarchy, project_graph};
use parking_lot::RwLock;
use std::sync::Arc;

/// A cloneable, lock-protected store for use across threads
///
/// Writers hold the write lock for the whole four-map mutation and
/// projections run under the read lock, so no reader ever sees a key
/// present in some variants and missing from others.
#[derive(Clone, Debug, Default)]
pub struct SharedTrieStore {
    inner: Arc<RwLock<MultiTrieStore>>,
}

impl SharedTrieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, raw_value: &str) -> bool {
        self.inner.write().insert(key, raw_value)
    }

    pub fn modify(&self, key: &str, raw_value: &str) -> bool {
        self.inner.write().modify(key, raw_value)
    }

    pub fn delete(&self, key: &str) -> bool {
        self.inner.write().delete(key)
    }

    /// Run `f` against a consistent view of the store
    pub fn read<R>(&self, f: impl FnOnce(&MultiTrieStore) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Clone the current state out from under the lock
    pub fn snapshot(&self) -> MultiTrieStore {
        self.inner.read().clone()
    }

    pub fn text_view(&self, variant: TrieVariant) -> String {
        self.read(|store| format_hierarchy(variant, store.entries(variant)))
    }

    pub fn graph_view(&self, variant: TrieVariant) -> Graph {
        self.read(|store| project_graph(variant, store.entries(variant)))
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<MultiTrieStore> for SharedTrieStore {
    fn from(store: MultiTrieStore) -> Self {
        SharedTrieStore {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let a = SharedTrieStore::new();
        let b = a.clone();

        a.insert("k", "v");
        assert_eq!(b.len(), 1);
        assert!(b.text_view(TrieVariant::Storage).contains("Storage: k => v"));
    }

    #[test]
    fn test_readers_never_see_partial_mutation() {
        let store = SharedTrieStore::new();

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = format!("k{}-{}", w, i % 17);
                        if i % 3 == 0 {
                            store.delete(&key);
                        } else {
                            store.insert(&key, &i.to_string());
                        }
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        store.read(|s| {
                            let generic: Vec<_> =
                                s.entries(TrieVariant::Generic).keys().collect();
                            for variant in TrieVariant::ALL {
                                let keys: Vec<_> = s.entries(variant).keys().collect();
                                assert_eq!(keys, generic);
                            }
                        });
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_graph_view_under_lock() {
        let store = SharedTrieStore::from(MultiTrieStore::new());
        store.insert("ab", "1");
        let graph = store.graph_view(TrieVariant::Generic);
        // root, a, b, value
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = SharedTrieStore::new();
        store.insert("a", "1");
        let snap = store.snapshot();
        store.delete("a");
        assert!(snap.contains_key("a"));
        assert!(store.is_empty());
    }
}
