//! Session-level view state over the trie store
//!
//! This module provides the main entry point for a rendering layer: it owns
//! the store, remembers which variant and which mode are selected, and keeps
//! the graph projection current while in graph mode.

use crate::config::Config;
use crate::model::{Graph, TrieVariant};
use crate::store::MultiTrieStore;
use crate::viz::{format_hierarchy, project_graph};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How the active variant is presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Text,
    Graph,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Text => ViewMode::Graph,
            ViewMode::Graph => ViewMode::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Text => "text",
            ViewMode::Graph => "graph",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ViewMode::Text),
            "graph" => Ok(ViewMode::Graph),
            other => Err(Error::InvalidCommand(format!("unknown view mode: {}", other))),
        }
    }
}

/// Owns the dataset and the presentation state for one session
///
/// Text is always formatted on demand. The graph is held and recomputed
/// after every change while in graph mode, including the moment graph mode
/// is entered, so it never reflects an older mutation.
#[derive(Debug, Default)]
pub struct ViewController {
    store: MultiTrieStore,
    selected: TrieVariant,
    mode: ViewMode,
    graph: Graph,
}

impl ViewController {
    /// Empty store, generic variant, text mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the configured variant and mode
    pub fn with_config(config: &Config) -> Self {
        let mut controller = ViewController {
            selected: config.default_variant,
            mode: if config.start_in_graph_mode {
                ViewMode::Graph
            } else {
                ViewMode::Text
            },
            ..Self::default()
        };
        controller.refresh();
        controller
    }

    /// Wrap an existing store
    pub fn with_store(store: MultiTrieStore) -> Self {
        ViewController {
            store,
            ..Self::default()
        }
    }

    // === Mutations ===

    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        let applied = self.store.insert(key, value);
        if applied {
            self.refresh();
        }
        applied
    }

    pub fn modify(&mut self, key: &str, value: &str) -> bool {
        let applied = self.store.modify(key, value);
        if applied {
            self.refresh();
        }
        applied
    }

    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.store.delete(key);
        if removed {
            self.refresh();
        }
        removed
    }

    // === View state ===

    pub fn select_variant(&mut self, variant: TrieVariant) {
        self.selected = variant;
        debug!(variant = variant.as_str(), "selected variant");
        self.refresh();
    }

    pub fn toggle_mode(&mut self) -> ViewMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        debug!(mode = mode.as_str(), "switched view mode");
        self.refresh();
    }

    pub fn selected(&self) -> TrieVariant {
        self.selected
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn store(&self) -> &MultiTrieStore {
        &self.store
    }

    // === Queries ===

    /// Text dump of the selected variant, computed now
    pub fn text_view(&self) -> String {
        format_hierarchy(self.selected, self.store.entries(self.selected))
    }

    /// The held graph. Current while in graph mode; in text mode it is
    /// whatever was last projected.
    pub fn graph_view(&self) -> &Graph {
        &self.graph
    }

    fn refresh(&mut self) {
        if self.mode == ViewMode::Graph {
            self.graph = project_graph(self.selected, self.store.entries(self.selected));
        }
    }
}
