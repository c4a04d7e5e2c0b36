//! Analyzer capability
//!
//! The analyzer owns the unit database, stat computation and civilization
//! bonus application. The exporter only ever talks to it through the
//! [`Analyzer`] trait, so any backend (the committed snapshot, a test stub)
//! can be plugged in.

pub mod catalog;
pub mod snapshot;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::Result;
use crate::core::types::{Age, ClassCode, Stat, UnitId};

pub use catalog::{UniqueUnitConfig, UnitCatalog, UnitConfig};
pub use snapshot::SnapshotAnalyzer;

/// Per-class breakdown of attack or armor values
///
/// Values are analyzer-defined and passed through untouched.
pub type ClassTable = BTreeMap<ClassCode, serde_json::Value>;

/// A playable civilization as listed by the analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Civilization {
    pub name: String,
}

impl Civilization {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Computed stats for one (civilization, unit, age) query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsBundle {
    pub hp: Stat,
    pub attack: Stat,
    #[serde(default)]
    pub attacks: ClassTable,
    #[serde(default)]
    pub armors: ClassTable,
    pub melee_armor: Stat,
    pub pierce_armor: Stat,
    #[serde(default)]
    pub range: Stat,
    pub reload_time: Stat,
    pub speed: Stat,
    #[serde(default)]
    pub cost_food: Stat,
    #[serde(default)]
    pub cost_wood: Stat,
    #[serde(default)]
    pub cost_gold: Stat,
    #[serde(default)]
    pub cost_stone: Stat,
    pub train_time: Stat,
    #[serde(default)]
    pub accuracy: Stat,
    #[serde(default)]
    pub attack_delay: Stat,
}

impl StatsBundle {
    /// True when the bundle carries a pierce attack component
    pub fn is_pierce(&self) -> bool {
        self.attacks.contains_key(&crate::core::types::PIERCE_CLASS)
    }
}

/// Analyzer answer to a stat query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitLookup {
    pub has_unit: bool,
    #[serde(default)]
    pub unit_name: String,
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    #[serde(default)]
    pub stats: Option<StatsBundle>,
    /// Bonuses applied during the calculation; schema owned by the analyzer
    #[serde(default)]
    pub applied_bonuses: Vec<serde_json::Value>,
}

impl UnitLookup {
    /// Lookup result for a civilization that lacks the unit
    pub fn missing() -> Self {
        Self::default()
    }

    /// Unit id and stats, when the lookup produced something usable
    pub fn found(&self) -> Option<(Option<UnitId>, &StatsBundle)> {
        if !self.has_unit {
            return None;
        }
        self.stats.as_ref().map(|stats| (self.unit_id, stats))
    }
}

/// Raw unit record from the analyzer's unit database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUnit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub blast_width: Option<Stat>,
    #[serde(default)]
    pub blast_damage: Option<Stat>,
    #[serde(default)]
    pub blast_attack_level: Option<Stat>,
}

impl RawUnit {
    pub fn blast_width(&self) -> Stat {
        self.blast_width.clone().unwrap_or_default()
    }

    pub fn blast_damage(&self) -> Stat {
        self.blast_damage.clone().unwrap_or_default()
    }

    pub fn blast_level(&self) -> Stat {
        self.blast_attack_level.clone().unwrap_or_default()
    }
}

/// Stat-computation capability the exporter is driven by
pub trait Analyzer {
    /// Civilizations in processing order
    fn civilizations(&self) -> &[Civilization];

    /// Unit categories per age tier and per-civilization unique units
    fn catalog(&self) -> &UnitCatalog;

    /// Stats of a standard unit for a civilization at an age
    fn calculate_unit_stats_for_civ(
        &self,
        civ: &str,
        unit: &UnitConfig,
        age: Age,
    ) -> Result<UnitLookup>;

    /// Stats of a civilization's unique unit
    fn calculate_unique_unit_stats(
        &self,
        civ: &str,
        unit: &UniqueUnitConfig,
        age: Age,
        elite: bool,
    ) -> Result<UnitLookup>;

    /// Raw unit record by id
    fn get_unit(&self, id: UnitId) -> Result<RawUnit>;
}
