pub mod config;
pub mod error;
pub mod types;

pub use config::ExportConfig;
pub use error::{ExportError, Result, FAILURE_EXIT_CODE};
pub use types::{Age, ClassCode, Stat, UnitId, PIERCE_CLASS};
