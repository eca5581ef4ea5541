//! Projections of a flat trie mapping into renderable structures
//!
//! Two pure functions turn one variant's mapping into output:
//! - [`format_hierarchy`] builds an indented text dump
//! - [`project_graph`] builds a prefix-sharing node/edge graph
//!
//! Both are recomputed from scratch on every call.

mod graph;
mod text;

pub use graph::{project_graph, value_label, ROOT_ID, ROOT_LABEL, ROOT_POSITION};
pub use text::format_hierarchy;

use crate::controller::ViewMode;
use crate::model::{Graph, GraphEdge, GraphNode, TrieVariant};
use serde::{Deserialize, Serialize};

/// Export format for a rendered view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewExport {
    /// Display name of the variant being shown
    pub variant: String,
    /// The mode the view was rendered in
    pub mode: ViewMode,
    /// Text dump (text mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Graph nodes (graph mode only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<GraphNode>,
    /// Graph edges (graph mode only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<GraphEdge>,
}

impl ViewExport {
    pub fn text(variant: TrieVariant, text: String) -> Self {
        ViewExport {
            variant: variant.display_name().to_string(),
            mode: ViewMode::Text,
            text: Some(text),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn graph(variant: TrieVariant, graph: Graph) -> Self {
        ViewExport {
            variant: variant.display_name().to_string(),
            mode: ViewMode::Graph,
            text: None,
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}
