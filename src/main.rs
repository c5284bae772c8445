use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use dialoguer::Input;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod renderers;
mod rules;

use crate::core::error::VertexmapError;
use crate::core::graph::GraphBuilder;
use crate::core::SourceAnalyzer;
use crate::renderers::{DotRenderer, HtmlRenderer, MappingExporter};

const BANNER: &str = r"
 __   _____ _ __| |_ _____  ___ __ ___   __ _ _ __
 \ \ / / _ \ '__| __/ _ \ \/ / '_ ` _ \ / _` | '_ \
  \ V /  __/ |  | ||  __/>  <| | | | | | (_| | |_) |
   \_/ \___|_|   \__\___/_/\_\_| |_| |_|\__,_| .__/
                                             |_|
";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "vertexmap",
    version = "0.1.0",
    author = "vertexmap developers",
    about = "Pattern-based dependency graph extraction for Java source trees"
)]
struct Cli {
    /// Root directory of the Java sources; prompts when omitted
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Directory for the generated artifacts
    #[arg(short, long, value_name = "DIR", default_value = "vertex_mapping")]
    output_dir: PathBuf,

    /// Graph rendering backend: dot, html, both, none
    #[arg(short, long, value_name = "BACKEND", value_enum, default_value_t = RenderBackend::Html)]
    render: RenderBackend,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum RenderBackend {
    Dot,
    Html,
    Both,
    None,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    println!("{}", style(BANNER).cyan());
    println!(
        "{}",
        style("VERTEXMAP - Java dependency mapping").bold()
    );

    let input = match cli.input {
        Some(path) => path,
        None => PathBuf::from(
            Input::<String>::new()
                .with_prompt("Java source directory")
                .default("./app/src/main/java".to_string())
                .interact_text()?,
        ),
    };

    let start_time = Instant::now();

    let analyzer = SourceAnalyzer::new()?;
    let report = analyzer.analyze(&input)?;
    println!(
        "Scanned {} files under {} ({} unreadable)",
        report.units.len() + report.failures.len(),
        input.display(),
        report.failures.len()
    );
    for failure in &report.failures {
        eprintln!(
            "{} {}: {}",
            style("Warning:").yellow(),
            failure.relative,
            failure.error
        );
    }

    fs::create_dir_all(&cli.output_dir).map_err(|source| VertexmapError::OutputWrite {
        path: cli.output_dir.clone(),
        source,
    })?;

    let mapping_path = cli.output_dir.join("dependencies.json");
    MappingExporter::new().export_to_file(&report.units, &mapping_path)?;
    println!("Mapping: {}", style(mapping_path.display()).green());

    let graph = GraphBuilder::from_units(&report.units);
    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if matches!(cli.render, RenderBackend::Dot | RenderBackend::Both) {
        let dot_path = cli.output_dir.join("graph.dot");
        DotRenderer::new().render_to_file(&graph, &dot_path)?;
        println!("DOT:     {}", style(dot_path.display()).green());
    }
    if matches!(cli.render, RenderBackend::Html | RenderBackend::Both) {
        let html_path = cli.output_dir.join("graph.html");
        HtmlRenderer::new().render_to_file(&graph, &html_path)?;
        println!("HTML:    {}", style(html_path.display()).green());
    }

    println!(
        "Done in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
