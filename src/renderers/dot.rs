use anyhow::Result;
use petgraph::visit::EdgeRef;
use std::fs;
use std::path::Path;

use crate::core::error::VertexmapError;
use crate::core::graph::DependencyGraph;

/// Graphviz renderer for the static-image path. Emits DOT source only;
/// layout and rasterization belong to Graphviz.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn to_dot(&self, graph: &DependencyGraph) -> String {
        let mut out = String::new();
        out.push_str("digraph dependencies {\n");
        out.push_str("    rankdir=LR;\n");
        out.push_str(
            "    node [shape=box, style=filled, fillcolor=skyblue, fontname=\"monospace\"];\n",
        );

        for index in graph.node_indices() {
            let node = &graph[index];
            let label = match node.package.as_deref() {
                Some(package) if !package.is_empty() => {
                    format!("{}\\n{}", escape(&node.id), escape(package))
                }
                _ => escape(&node.id),
            };
            out.push_str(&format!("    n{} [label=\"{}\"];\n", index.index(), label));
        }

        for edge in graph.edge_references() {
            out.push_str(&format!(
                "    n{} -> n{};\n",
                edge.source().index(),
                edge.target().index()
            ));
        }

        out.push_str("}\n");
        out
    }

    pub fn render_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let document = self.to_dot(graph);
        fs::write(output_path, document).map_err(|source| VertexmapError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
