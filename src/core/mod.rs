pub mod analyzer;
pub mod error;
pub mod graph;
pub mod scanner;

pub use analyzer::{ScanFailure, ScanReport, SourceAnalyzer};
pub use error::VertexmapError;
pub use graph::{DependencyGraph, GraphBuilder, Node, NodeKind};
pub use scanner::{FileInfo, FileScanner};
