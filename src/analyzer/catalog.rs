//! Unit category configuration
//!
//! Which standard units are queried at each age and which unique units each
//! civilization owns. Entries keep the order they are declared in, since
//! that order decides first-writer-wins ties in the early age passes.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::Age;

/// Descriptor of a standard unit archetype
///
/// `settings` is owned by the analyzer and never interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitConfig {
    pub key: String,
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl UnitConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            settings: serde_json::Map::new(),
        }
    }
}

/// Descriptor of a civilization-specific unique unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniqueUnitConfig {
    pub display_name: String,
    /// Overrides the derived "Elite {display_name}" label
    #[serde(default)]
    pub elite_name: Option<String>,
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl UniqueUnitConfig {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    pub fn with_elite_name(mut self, elite_name: impl Into<String>) -> Self {
        self.elite_name = Some(elite_name.into());
        self
    }

    /// Display name of the elite form
    pub fn elite_display_name(&self) -> String {
        match &self.elite_name {
            Some(name) => name.clone(),
            None => format!("Elite {}", self.display_name),
        }
    }
}

/// All unit categories known to the analyzer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitCatalog {
    pub feudal: Vec<UnitConfig>,
    pub castle: Vec<UnitConfig>,
    pub imperial: Vec<UnitConfig>,
    /// Unique units keyed by civilization display name
    pub unique: AHashMap<String, Vec<UniqueUnitConfig>>,
}

impl UnitCatalog {
    /// Standard units queried at an age
    pub fn standard(&self, age: Age) -> &[UnitConfig] {
        match age {
            Age::Feudal => &self.feudal,
            Age::Castle => &self.castle,
            Age::Imperial => &self.imperial,
        }
    }

    /// Unique units of a civilization, empty when it has none configured
    pub fn unique_for(&self, civ: &str) -> &[UniqueUnitConfig] {
        self.unique.get(civ).map(Vec::as_slice).unwrap_or(&[])
    }
}
