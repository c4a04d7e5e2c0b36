//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Analyzer-assigned unit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attack/armor class code as used in per-type breakdowns
pub type ClassCode = u16;

/// Attack class code marking a pierce attack
pub const PIERCE_CLASS: ClassCode = 3;

/// Numeric stat as reported by the analyzer
///
/// Keeps the analyzer's integer/float distinction, so whole values are
/// written back without a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stat(serde_json::Number);

impl Stat {
    pub fn int(value: i64) -> Self {
        Stat(value.into())
    }

    /// Non-finite values collapse to 0
    pub fn float(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Stat)
            .unwrap_or_default()
    }

    pub fn zero() -> Self {
        Self::int(0)
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }
}

impl Default for Stat {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age tier governing which upgrade level of a unit is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Age {
    Feudal,
    Castle,
    Imperial,
}

impl Age {
    /// Highest tier; unique units are always computed here
    pub const TOP: Age = Age::Imperial;

    pub fn name(&self) -> &'static str {
        match self {
            Age::Feudal => "feudal",
            Age::Castle => "castle",
            Age::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
