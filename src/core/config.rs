//! Export configuration
//!
//! Every path the conversion touches is collected here. Defaults are rooted
//! at the crate directory so the binary behaves the same regardless of the
//! working directory it is launched from.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::{ExportError, Result};

/// Configuration for a conversion run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Root of the vendored analyzer checkout
    ///
    /// Its `extraction/extracted_data` directory is the fallback data source
    /// when no committed snapshot exists.
    pub vendor_dir: PathBuf,

    /// Committed extracted-data snapshot
    ///
    /// Preferred over the vendor directory when present, so the conversion
    /// can run without regenerating data from the original game files.
    pub snapshot_dir: PathBuf,

    /// Destination of the generated module
    pub output_path: PathBuf,

    /// Name of the exported constant in the generated module
    pub export_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}

impl ExportConfig {
    /// Default layout relative to an arbitrary root directory
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            vendor_dir: root.join("vendor").join("aoe2-unit-analyzer"),
            snapshot_dir: root.join("data").join("extracted_data"),
            output_path: root.join("generated").join("units_v2.js"),
            export_name: "units".to_string(),
        }
    }

    /// Load overrides from a TOML file
    ///
    /// Keys missing from the file keep their defaults. Relative paths are
    /// resolved against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: ExportConfig = toml::from_str(&contents)?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        config.validate()?;
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        for path in [
            &mut self.vendor_dir,
            &mut self.snapshot_dir,
            &mut self.output_path,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Default data directory inside the vendored analyzer
    pub fn vendor_data_dir(&self) -> PathBuf {
        self.vendor_dir.join("extraction").join("extracted_data")
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let name = &self.export_name;
        let valid_start = name
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            .unwrap_or(false);
        let valid_rest = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
        if !valid_start || !valid_rest {
            return Err(ExportError::InvalidConfig(format!(
                "export_name ({:?}) is not a valid identifier",
                name
            )));
        }

        if self.output_path.file_name().is_none() {
            return Err(ExportError::InvalidConfig(format!(
                "output_path ({}) has no file name",
                self.output_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.export_name, "units");
        assert!(config.output_path.ends_with("generated/units_v2.js"));
    }

    #[test]
    fn test_vendor_data_dir() {
        let config = ExportConfig::rooted_at(Path::new("/repo"));
        assert_eq!(
            config.vendor_data_dir(),
            PathBuf::from("/repo/vendor/aoe2-unit-analyzer/extraction/extracted_data")
        );
    }

    #[test]
    fn test_invalid_export_name() {
        let mut config = ExportConfig::default();
        config.export_name = "2units".into();
        assert!(config.validate().is_err());
        config.export_name = "my-units".into();
        assert!(config.validate().is_err());
        config.export_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file_rebases_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.toml");
        std::fs::write(
            &path,
            "output_path = \"out/units.js\"\nexport_name = \"unitData\"\n",
        )
        .unwrap();

        let config = ExportConfig::load(&path).unwrap();
        assert_eq!(config.output_path, dir.path().join("out/units.js"));
        assert_eq!(config.export_name, "unitData");
        // untouched keys keep their defaults
        assert!(config.snapshot_dir.ends_with("data/extracted_data"));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.toml");
        std::fs::write(&path, "export_name = [").unwrap();
        assert!(matches!(
            ExportConfig::load(&path),
            Err(ExportError::TomlError(_))
        ));
    }
}
