//! # VERTEXMAP
//!
//! Lightweight file-level dependency graph extraction for Java source trees.
//!
//! vertexmap scans each `.java` file's raw text for package, import,
//! instantiation, inheritance and interface-implementation patterns and
//! aggregates the discovered identifiers into a per-file dependency relation,
//! then derives a directed graph from the complete mapping. No real parser,
//! no AST, no symbol resolution.
//!
//! ## Output Artifacts
//!
//! - **JSON mapping**: canonical `{path: {package, dependencies}}` document
//! - **DOT**: Graphviz source for a static rendering
//! - **HTML**: self-contained interactive page (vis-network)

pub mod core;
pub mod renderers;
pub mod rules;

pub use crate::core::{DependencyGraph, GraphBuilder, Node, NodeKind};
pub use crate::core::{FileInfo, FileScanner};
pub use crate::core::{ScanFailure, ScanReport, SourceAnalyzer, VertexmapError};
pub use crate::rules::{DependencyExtractor, SourceUnit};
