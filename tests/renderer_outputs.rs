use std::collections::BTreeSet;
use vertexmap::core::graph::GraphBuilder;
use vertexmap::core::VertexmapError;
use vertexmap::renderers::{DotRenderer, HtmlRenderer};
use vertexmap::rules::SourceUnit;

fn sample_graph() -> vertexmap::core::graph::DependencyGraph {
    let units = vec![SourceUnit {
        path: "com/a/Foo.java".to_string(),
        package: "com.a".to_string(),
        dependencies: ["Bar", "com.b.Bar"]
            .iter()
            .map(|d| d.to_string())
            .collect::<BTreeSet<_>>(),
    }];
    GraphBuilder::from_units(&units)
}

#[test]
fn dot_output_is_a_digraph_with_one_statement_per_edge() {
    let graph = sample_graph();
    let dot = DotRenderer::new().to_dot(&graph);

    assert!(dot.starts_with("digraph dependencies {"));
    assert!(dot.trim_end().ends_with('}'));
    assert_eq!(dot.matches(" -> ").count(), graph.edge_count());
    assert!(dot.contains("com/a/Foo.java"));
    assert!(dot.contains("com.a"));
}

#[test]
fn dot_labels_escape_quotes() {
    let units = vec![SourceUnit {
        path: "We\"ird.java".to_string(),
        package: String::new(),
        dependencies: BTreeSet::new(),
    }];
    let graph = GraphBuilder::from_units(&units);
    let dot = DotRenderer::new().to_dot(&graph);
    assert!(dot.contains("We\\\"ird.java"));
}

#[test]
fn html_page_embeds_nodes_and_edges_for_vis_network() {
    let graph = sample_graph();
    let html = HtmlRenderer::new().to_html(&graph).unwrap();

    assert!(html.contains("vis-network"));
    assert!(html.contains("new vis.DataSet("));
    assert!(html.contains("\"label\":\"com/a/Foo.java\""));
    assert!(html.contains("\"title\":\"com.a\""));
    assert!(html.contains("\"label\":\"Bar\""));
    assert!(!html.contains("__NODES__"));
    assert!(!html.contains("__EDGES__"));
}

#[test]
fn html_page_survives_labels_that_look_like_template_text() {
    // "import __EDGES__;" is a legal capture, so node labels can contain any
    // text that also appears in the page template.
    let units = vec![SourceUnit {
        path: "A.java".to_string(),
        package: String::new(),
        dependencies: ["__EDGES__", "__NODES__"]
            .iter()
            .map(|d| d.to_string())
            .collect::<BTreeSet<_>>(),
    }];
    let graph = GraphBuilder::from_units(&units);
    let html = HtmlRenderer::new().to_html(&graph).unwrap();

    assert!(html.contains("\"label\":\"__EDGES__\""));
    assert!(html.contains("\"label\":\"__NODES__\""));
    // Both DataSet arrays are intact: one nodes array, one edges array
    assert_eq!(html.matches("new vis.DataSet([").count(), 2);
    assert!(html.contains("{\"from\":"));
}

#[test]
fn failed_render_write_is_a_fatal_output_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/graph.dot");
    let graph = sample_graph();

    let err = DotRenderer::new()
        .render_to_file(&graph, &path)
        .unwrap_err();
    let err = err.downcast::<VertexmapError>().unwrap();
    assert!(matches!(err, VertexmapError::OutputWrite { .. }));
}

#[test]
fn renderers_write_their_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let graph = sample_graph();

    let dot_path = dir.path().join("graph.dot");
    DotRenderer::new().render_to_file(&graph, &dot_path).unwrap();
    assert!(dot_path.is_file());

    let html_path = dir.path().join("graph.html");
    HtmlRenderer::new().render_to_file(&graph, &html_path).unwrap();
    assert!(std::fs::read_to_string(&html_path)
        .unwrap()
        .starts_with("<!DOCTYPE html>"));
}
