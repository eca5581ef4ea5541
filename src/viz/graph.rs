//! Prefix-sharing graph projection of a trie variant

use crate::model::{
    Graph, GraphEdge, GraphNode, Position, TrieValue, TrieVariant, PLACEHOLDER_HASH,
};
use crate::store::TrieMap;
use std::collections::HashSet;
use tracing::debug;

pub const ROOT_ID: &str = "root";
pub const ROOT_LABEL: &str = "Root";
pub const ROOT_POSITION: Position = Position::new(250, 50);

/// y of the first entry's band; each later entry sits one band lower
const BAND_ORIGIN_Y: i64 = 100;
const BAND_HEIGHT: i64 = 100;
/// x of a key's first character; each later character one column right
const PATH_ORIGIN_X: i64 = 250;
const COLUMN_WIDTH: i64 = 100;
const VALUE_NODE_X: i64 = 350;

/// Accumulates nodes and edges, keeping the first one seen for each id
struct GraphBuilder {
    graph: Graph,
    node_ids: HashSet<String>,
    edge_ids: HashSet<String>,
}

impl GraphBuilder {
    fn new() -> Self {
        GraphBuilder {
            graph: Graph::new(),
            node_ids: HashSet::new(),
            edge_ids: HashSet::new(),
        }
    }

    fn add_node(&mut self, id: &str, label: impl Into<String>, position: Position) {
        if self.node_ids.insert(id.to_string()) {
            self.graph.nodes.push(GraphNode::new(id, label, position));
        }
    }

    fn add_edge(&mut self, source: &str, target: &str) {
        if self.edge_ids.insert(GraphEdge::id_for(source, target)) {
            self.graph.edges.push(GraphEdge::between(source, target));
        }
    }

    fn finish(self) -> Graph {
        self.graph
    }
}

/// Project one variant's mapping into a node/edge graph
///
/// Every key becomes a path of one node per character under a shared
/// root, so keys with a common prefix share those nodes and edges. Each
/// path ends in a value node labeled per variant. Nodes and edges come
/// out in construction order.
pub fn project_graph(variant: TrieVariant, entries: &TrieMap) -> Graph {
    let mut builder = GraphBuilder::new();
    builder.add_node(ROOT_ID, ROOT_LABEL, ROOT_POSITION);

    for (index, (key, value)) in entries.iter().enumerate() {
        let y = BAND_ORIGIN_Y + index as i64 * BAND_HEIGHT;
        let mut current = ROOT_ID.to_string();

        for (i, c) in key.chars().enumerate() {
            let next = GraphNode::child_id(&current, c);
            let x = PATH_ORIGIN_X + i as i64 * COLUMN_WIDTH;
            builder.add_node(&next, c.to_string(), Position::new(x, y));
            builder.add_edge(&current, &next);
            current = next;
        }

        let value_node = GraphNode::value_id(&current);
        builder.add_node(
            &value_node,
            value_label(variant, value),
            Position::new(VALUE_NODE_X, y),
        );
        builder.add_edge(&current, &value_node);
    }

    let graph = builder.finish();
    debug!(
        variant = variant.as_str(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "projected graph"
    );
    graph
}

/// Label shown on a key's terminal value node
pub fn value_label(variant: TrieVariant, value: &TrieValue) -> String {
    match variant {
        TrieVariant::Generic => format!("Value: {}\nHash: {}", value, PLACEHOLDER_HASH),
        TrieVariant::Storage => format!("Storage: {}", value),
        TrieVariant::Transaction => format!("Transaction Data: {}", value.to_json()),
        TrieVariant::Receipt => format!("Receipt Data: {}", value.to_json()),
    }
}
