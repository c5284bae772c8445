use anyhow::Result;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

use crate::core::error::VertexmapError;
use crate::rules::SourceUnit;

/// Canonical exporter: `{path: {package, dependencies}}`, 2-space indent.
///
/// Top-level keys keep the discovery order of the input list; dependency
/// arrays are already sorted inside each `SourceUnit`. Re-running against an
/// unchanged tree therefore reproduces the document byte for byte.
pub struct MappingExporter;

impl MappingExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_json(&self, units: &[SourceUnit]) -> Result<String> {
        let mut mapping = Map::new();
        for unit in units {
            mapping.insert(
                unit.path.clone(),
                json!({
                    "package": &unit.package,
                    "dependencies": &unit.dependencies,
                }),
            );
        }
        Ok(serde_json::to_string_pretty(&Value::Object(mapping))?)
    }

    /// A failed write is fatal: no partial canonical export is valid.
    pub fn export_to_file(&self, units: &[SourceUnit], output_path: &Path) -> Result<()> {
        let document = self.to_json(units)?;
        fs::write(output_path, document).map_err(|source| VertexmapError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

impl Default for MappingExporter {
    fn default() -> Self {
        Self::new()
    }
}
