//! Wraps vendored front-end data scripts as ES modules
//!
//! The vendored files declare top-level constants without exporting them.
//! Each is copied into the generated directory with an export statement
//! appended.

use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// A vendored file and the export statement appended to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleFile {
    pub file: &'static str,
    pub export: &'static str,
}

/// Files wrapped by default
pub const DEFAULT_BUNDLE: [BundleFile; 3] = [
    BundleFile {
        file: "units.js",
        export: "export { units };",
    },
    BundleFile {
        file: "presets.js",
        export: "export { presets };",
    },
    BundleFile {
        file: "scenarios.js",
        export: "export { scenarios, featuredScenarios };",
    },
];

/// Copy each file from `vendor_dir` to `out_dir` with its export appended
///
/// Output depends only on the vendored content, so re-running is a no-op.
pub fn bundle_vendor_files(
    vendor_dir: &Path,
    out_dir: &Path,
    files: &[BundleFile],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for entry in files {
        let content = std::fs::read_to_string(vendor_dir.join(entry.file))?;
        let target = out_dir.join(entry.file);
        std::fs::write(&target, format!("{}\n{}\n", content, entry.export))?;
        tracing::info!("gen-data: wrote generated/{}", entry.file);
        written.push(target);
    }
    Ok(written)
}
