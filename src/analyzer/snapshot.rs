//! Analyzer backed by a committed extracted-data snapshot
//!
//! The snapshot is a directory holding the analyzer's precomputed output:
//!
//! ```text
//! data_dir/
//! ├── civs.json      civilization list, in processing order
//! ├── units.json     raw unit records keyed by unit id
//! ├── catalog.toml   unit categories per age and unique units per civ
//! └── stats.json     stat query results per (civ, unit, age, elite)
//! ```
//!
//! Queries with no entry in `stats.json` report that the civilization lacks
//! the unit.

use ahash::AHashMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::{
    Analyzer, Civilization, RawUnit, StatsBundle, UniqueUnitConfig, UnitCatalog, UnitConfig,
    UnitLookup,
};
use crate::core::config::ExportConfig;
use crate::core::error::{ExportError, Result};
use crate::core::types::{Age, UnitId};

const CIVS_FILE: &str = "civs.json";
const UNITS_FILE: &str = "units.json";
const CATALOG_FILE: &str = "catalog.toml";
const STATS_FILE: &str = "stats.json";

/// Pick the data directory the analyzer should read from
///
/// The committed snapshot wins when it exists; otherwise the vendored
/// analyzer's own extraction output is used.
pub fn resolve_data_dir(config: &ExportConfig) -> Result<PathBuf> {
    if config.snapshot_dir.is_dir() {
        tracing::debug!(path = %config.snapshot_dir.display(), "Using committed snapshot");
        return Ok(config.snapshot_dir.clone());
    }

    let vendor_data = config.vendor_data_dir();
    if vendor_data.is_dir() {
        tracing::debug!(path = %vendor_data.display(), "Using vendor extraction output");
        return Ok(vendor_data);
    }

    Err(ExportError::AnalyzerUnavailable {
        vendor_path: config.vendor_dir.clone(),
        reason: format!(
            "no extracted data at {} or {}",
            config.snapshot_dir.display(),
            vendor_data.display()
        ),
    })
}

/// Resolve the data directory for `config` and open the analyzer on it
///
/// Load failures are reported against the configured vendor path; the
/// directory that was actually read is named in the reason.
pub fn open_for_config(config: &ExportConfig) -> Result<SnapshotAnalyzer> {
    let data_dir = resolve_data_dir(config)?;
    SnapshotAnalyzer::open(data_dir.clone()).map_err(|err| match err {
        ExportError::SnapshotLoad { reason, .. } => ExportError::AnalyzerUnavailable {
            vendor_path: config.vendor_dir.clone(),
            reason: format!("{} in {}", reason, data_dir.display()),
        },
        other => other,
    })
}

#[derive(Debug, Deserialize)]
struct StatsEntry {
    civ: String,
    /// Standard unit key or unique unit display name
    unit: String,
    age: Age,
    #[serde(default)]
    elite: bool,
    has_unit: bool,
    #[serde(default)]
    unit_name: String,
    #[serde(default)]
    unit_id: Option<UnitId>,
    #[serde(default)]
    stats: Option<StatsBundle>,
    #[serde(default)]
    applied_bonuses: Vec<serde_json::Value>,
}

impl StatsEntry {
    fn split(self) -> (StatsKey, UnitLookup) {
        let lookup = UnitLookup {
            has_unit: self.has_unit,
            unit_name: self.unit_name,
            unit_id: self.unit_id,
            stats: self.stats,
            applied_bonuses: self.applied_bonuses,
        };
        ((self.civ, self.unit, self.age, self.elite), lookup)
    }
}

type StatsKey = (String, String, Age, bool);

/// Snapshot-backed [`Analyzer`]
pub struct SnapshotAnalyzer {
    civs: Vec<Civilization>,
    catalog: UnitCatalog,
    units: AHashMap<UnitId, RawUnit>,
    stats: AHashMap<StatsKey, UnitLookup>,
}

impl SnapshotAnalyzer {
    /// Load every snapshot file from `data_dir`
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        let civs: Vec<Civilization> = read_json(&data_dir, CIVS_FILE)?;
        let units: AHashMap<UnitId, RawUnit> = read_json(&data_dir, UNITS_FILE)?;
        let entries: Vec<StatsEntry> = read_json(&data_dir, STATS_FILE)?;

        let catalog_path = data_dir.join(CATALOG_FILE);
        let catalog_text =
            std::fs::read_to_string(&catalog_path).map_err(|e| load_error(&data_dir, CATALOG_FILE, e))?;
        let catalog: UnitCatalog =
            toml::from_str(&catalog_text).map_err(|e| load_error(&data_dir, CATALOG_FILE, e))?;

        let mut stats = AHashMap::with_capacity(entries.len());
        for entry in entries {
            let (key, lookup) = entry.split();
            if stats.insert(key.clone(), lookup).is_some() {
                tracing::warn!(civ = %key.0, unit = %key.1, age = %key.2, "Duplicate stats entry, keeping last");
            }
        }

        tracing::info!(
            civs = civs.len(),
            units = units.len(),
            stats = stats.len(),
            "Loaded analyzer snapshot from {}",
            data_dir.display()
        );

        Ok(Self {
            civs,
            catalog,
            units,
            stats,
        })
    }

    fn lookup(&self, civ: &str, unit: &str, age: Age, elite: bool) -> UnitLookup {
        self.stats
            .get(&(civ.to_string(), unit.to_string(), age, elite))
            .cloned()
            .unwrap_or_else(UnitLookup::missing)
    }
}

impl Analyzer for SnapshotAnalyzer {
    fn civilizations(&self) -> &[Civilization] {
        &self.civs
    }

    fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    fn calculate_unit_stats_for_civ(
        &self,
        civ: &str,
        unit: &UnitConfig,
        age: Age,
    ) -> Result<UnitLookup> {
        Ok(self.lookup(civ, &unit.key, age, false))
    }

    fn calculate_unique_unit_stats(
        &self,
        civ: &str,
        unit: &UniqueUnitConfig,
        age: Age,
        elite: bool,
    ) -> Result<UnitLookup> {
        Ok(self.lookup(civ, &unit.display_name, age, elite))
    }

    fn get_unit(&self, id: UnitId) -> Result<RawUnit> {
        self.units
            .get(&id)
            .cloned()
            .ok_or(ExportError::UnknownUnit(id))
    }
}

fn read_json<T: DeserializeOwned>(data_dir: &Path, file: &str) -> Result<T> {
    let contents =
        std::fs::read_to_string(data_dir.join(file)).map_err(|e| load_error(data_dir, file, e))?;
    serde_json::from_str(&contents).map_err(|e| load_error(data_dir, file, e))
}

fn load_error(data_dir: &Path, file: &str, err: impl std::fmt::Display) -> ExportError {
    ExportError::SnapshotLoad {
        data_dir: data_dir.to_path_buf(),
        reason: format!("failed to load {}: {}", file, err),
    }
}
