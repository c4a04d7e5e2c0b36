//! Generated module output

use std::path::Path;

use super::mapping::OutputMapping;
use crate::core::error::Result;

/// Render `mapping` as `export const {name} = {json};` with 2-space indent
pub fn render_module(export_name: &str, mapping: &OutputMapping) -> Result<String> {
    let json = serde_json::to_string_pretty(mapping)?;
    Ok(format!("export const {} = {};\n", export_name, json))
}

/// Write the generated module, creating parent directories as needed
pub fn write_module(path: &Path, export_name: &str, mapping: &OutputMapping) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let module = render_module(export_name, mapping)?;
    std::fs::write(path, module)?;
    Ok(())
}
