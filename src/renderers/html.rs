use anyhow::Result;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::error::VertexmapError;
use crate::core::graph::DependencyGraph;

#[derive(Serialize)]
struct VisNode<'a> {
    id: usize,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    shape: &'static str,
}

#[derive(Serialize)]
struct VisEdge {
    from: usize,
    to: usize,
}

/// Interactive-page renderer: one self-contained HTML document embedding the
/// node/edge sets as JSON and delegating layout to vis-network in the
/// browser. Every call builds a fresh document; nothing is shared between
/// exports.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn to_html(&self, graph: &DependencyGraph) -> Result<String> {
        let nodes: Vec<VisNode> = graph
            .node_indices()
            .map(|index| {
                let node = &graph[index];
                VisNode {
                    id: index.index(),
                    label: &node.id,
                    title: node.package.as_deref().filter(|p| !p.is_empty()),
                    shape: "dot",
                }
            })
            .collect();

        let edges: Vec<VisEdge> = graph
            .edge_references()
            .map(|edge| VisEdge {
                from: edge.source().index(),
                to: edge.target().index(),
            })
            .collect();

        // Splice the data arrays between fixed template sections; labels are
        // arbitrary captured text, so placeholder substitution over the whole
        // document would not be safe.
        let nodes_json = serde_json::to_string(&nodes)?;
        let edges_json = serde_json::to_string(&edges)?;
        let mut page = String::with_capacity(
            PAGE_PREFIX.len()
                + nodes_json.len()
                + PAGE_MIDDLE.len()
                + edges_json.len()
                + PAGE_SUFFIX.len(),
        );
        page.push_str(PAGE_PREFIX);
        page.push_str(&nodes_json);
        page.push_str(PAGE_MIDDLE);
        page.push_str(&edges_json);
        page.push_str(PAGE_SUFFIX);
        Ok(page)
    }

    pub fn render_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let document = self.to_html(graph)?;
        fs::write(output_path, document).map_err(|source| VertexmapError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_PREFIX: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Dependency Graph</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>
  html, body { margin: 0; background: #1e1e1e; }
  #graph { width: 100%; height: 900px; }
</style>
</head>
<body>
<div id="graph"></div>
<script>
  const nodes = new vis.DataSet("#;

const PAGE_MIDDLE: &str = r#");
  const edges = new vis.DataSet("#;

const PAGE_SUFFIX: &str = r#");
  const container = document.getElementById("graph");
  const options = {
    nodes: { font: { color: "white" } },
    edges: { arrows: "to" },
    physics: { solver: "barnesHut" }
  };
  new vis.Network(container, { nodes: nodes, edges: edges }, options);
</script>
</body>
</html>
"#;
