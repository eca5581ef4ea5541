//! Core data model types for trie_viz

mod edge;
mod graph;
mod hash;
mod node;
mod value;
mod variant;

pub use edge::GraphEdge;
pub use graph::Graph;
pub use hash::PLACEHOLDER_HASH;
pub use node::{GraphNode, Position};
pub use value::{ReceiptStatus, TrieValue};
pub use variant::TrieVariant;
