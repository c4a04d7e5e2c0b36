use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Analyzer unavailable: {reason} (vendor path: {})", vendor_path.display())]
    AnalyzerUnavailable { vendor_path: PathBuf, reason: String },

    #[error("Snapshot load failed: {reason} (data path: {})", data_dir.display())]
    SnapshotLoad { data_dir: PathBuf, reason: String },

    #[error("Analyzer error: {0}")]
    Analyzer(String),

    #[error("Unknown unit id: {0:?}")]
    UnknownUnit(UnitId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Exit status for any failed run
pub const FAILURE_EXIT_CODE: u8 = 1;

impl ExportError {
    /// True when the analyzer could not be set up at all
    pub fn is_setup_failure(&self) -> bool {
        matches!(
            self,
            ExportError::AnalyzerUnavailable { .. } | ExportError::SnapshotLoad { .. }
        )
    }

    /// Diagnostic text and exit code for a run that ended with this error
    ///
    /// Setup failures name the path that was tried on a second line.
    pub fn report(&self) -> (String, u8) {
        let message = match self {
            ExportError::AnalyzerUnavailable {
                vendor_path,
                reason,
            } => format!(
                "Error loading analyzer: {}\nVendor path: {}",
                reason,
                vendor_path.display()
            ),
            ExportError::SnapshotLoad { data_dir, reason } => format!(
                "Error loading analyzer: {}\nData path: {}",
                reason,
                data_dir.display()
            ),
            other => format!("Conversion failed: {}", other),
        };
        (message, FAILURE_EXIT_CODE)
    }
}
