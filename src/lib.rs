//! # trie_viz
//!
//! One key/value dataset, kept as four parallel trie views and rendered
//! either as an indented text hierarchy or as a node/edge graph.
//!
//! ## Core Concepts
//!
//! - **Variants**: generic, storage, transaction and receipt tries over the
//!   same key set, differing only in how values are wrapped
//! - **Store**: every insert and delete lands in all four variants at once
//! - **Projections**: pure functions from one variant's mapping to text or
//!   to a prefix-sharing graph
//! - **Controller**: selected variant plus text/graph mode, keeping the
//!   graph current while it is displayed
//!
//! The "hash" shown in generic views is a fixed placeholder; nothing here
//! builds a real Merkle Patricia trie.
//!
//! ## Example
//!
//! ```
//! use trie_viz::{TrieVariant, ViewController, ViewMode};
//!
//! let mut view = ViewController::new();
//! view.insert("ca", "1");
//! view.insert("cb", "2");
//! assert!(view.text_view().contains("[c]"));
//!
//! view.set_mode(ViewMode::Graph);
//! assert_eq!(view.graph_view().node_count(), 6);
//!
//! view.select_variant(TrieVariant::Storage);
//! assert_eq!(view.text_view(), "Storage: ca => 1\nStorage: cb => 2\n");
//! ```

pub mod command;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod store;
pub mod viz;

mod error;

pub use command::{Command, Outcome};
pub use config::{Config, OutputFormat};
pub use controller::{ViewController, ViewMode};
pub use error::{Error, Result};
pub use model::{
    Graph, GraphEdge, GraphNode, Position, ReceiptStatus, TrieValue, TrieVariant,
    PLACEHOLDER_HASH,
};
pub use store::{MultiTrieStore, SharedTrieStore, TrieMap};
pub use viz::{format_hierarchy, project_graph, ViewExport};
