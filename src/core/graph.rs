use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::{Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::rules::SourceUnit;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A scanned file, keyed by its root-relative path.
    File,
    /// A referenced identifier that no scanned file claimed as its path.
    Identifier,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// String key: relative file path or captured identifier. File paths and
    /// identifiers share one namespace, so an identifier that happens to
    /// equal another file's path collapses into that file's node.
    pub id: String,
    pub kind: NodeKind,
    /// Package label, present on file nodes only.
    pub package: Option<String>,
}

/// Directed "file depends on identifier" graph. Edges carry no weight.
pub type DependencyGraph = Graph<Node, (), Directed>;

pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Derive the whole graph from an extracted mapping: file nodes first so
    /// they win the shared namespace, then one edge per (file, dependency)
    /// pair. Per-file sets are already deduplicated, so the edge count equals
    /// the sum of the per-file set sizes.
    pub fn from_units(units: &[SourceUnit]) -> DependencyGraph {
        let mut builder = Self::new();
        for unit in units {
            builder.add_file(&unit.path, &unit.package);
        }
        for unit in units {
            for dependency in &unit.dependencies {
                builder.add_dependency(&unit.path, dependency);
            }
        }
        builder.build()
    }

    pub fn add_file(&mut self, path: &str, package: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(path) {
            return index;
        }
        let index = self.graph.add_node(Node {
            id: path.to_string(),
            kind: NodeKind::File,
            package: Some(package.to_string()),
        });
        self.node_map.insert(path.to_string(), index);
        index
    }

    /// Add one `file → identifier` edge, interning the identifier if unseen.
    /// Returns `None` when the source path was never added as a file node.
    pub fn add_dependency(&mut self, path: &str, identifier: &str) -> Option<EdgeIndex> {
        let source = *self.node_map.get(path)?;
        let target = self.intern_identifier(identifier);
        Some(self.graph.add_edge(source, target, ()))
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }

    fn intern_identifier(&mut self, identifier: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(identifier) {
            return index;
        }
        let index = self.graph.add_node(Node {
            id: identifier.to_string(),
            kind: NodeKind::Identifier,
            package: None,
        });
        self.node_map.insert(identifier.to_string(), index);
        index
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
