//! Synchronized in-memory storage for the four trie variants
//!
//! Every mutation writes all four mappings or none of them, so the key
//! set is always identical across variants.

mod multi_trie;
mod shared;

pub use multi_trie::{MultiTrieStore, TrieMap};
pub use shared::SharedTrieStore;
