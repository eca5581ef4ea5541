//! Node/edge lists handed to a graph renderer

use super::{GraphEdge, GraphNode};
use serde::{Deserialize, Serialize};

/// A projected graph, in construction order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Find a node by id
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find an edge by id
    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Edges leaving the given node
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    #[test]
    fn test_lookup() {
        let graph = Graph {
            nodes: vec![
                GraphNode::new("root", "Root", Position::new(250, 50)),
                GraphNode::new("root-a", "a", Position::new(250, 100)),
            ],
            edges: vec![GraphEdge::between("root", "root-a")],
        };

        assert!(graph.node("root-a").is_some());
        assert!(graph.node("root-b").is_none());
        assert!(graph.edge("root-root-a").is_some());
        assert_eq!(graph.outgoing("root").count(), 1);
        assert_eq!(graph.outgoing("root-a").count(), 0);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Graph::new().is_empty());
    }
}
