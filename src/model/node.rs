//! Graph node type produced by the graph projection

use serde::{Deserialize, Serialize};

/// Layout hint for a node, in renderer units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Position { x, y }
    }
}

/// A node in the projected graph
///
/// The id is the path from the root joined with `-`, so two keys sharing
/// a prefix resolve to the same node ids for that prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub position: Position,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
        GraphNode {
            id: id.into(),
            label: label.into(),
            position,
        }
    }

    /// Id of the child reached from this path by one character
    pub fn child_id(parent: &str, c: char) -> String {
        format!("{}-{}", parent, c)
    }

    /// Id of the terminal value node hanging off a path node
    pub fn value_id(parent: &str) -> String {
        format!("{}-value", parent)
    }
}
