//! Directed edge between two projected nodes

use serde::{Deserialize, Serialize};

/// An edge connecting a parent node to a child node
///
/// The id is `source-target`, which doubles as the deduplication key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    /// Create the edge from `source` to `target`
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        GraphEdge {
            id: Self::id_for(&source, &target),
            source,
            target,
        }
    }

    /// Canonical id for an edge, without allocating the edge itself
    pub fn id_for(source: &str, target: &str) -> String {
        format!("{}-{}", source, target)
    }
}
