//! Conversion loop: civilizations × unit categories into one mapping
//!
//! Each civilization is processed in four passes. Feudal and Castle records
//! only fill keys nobody has claimed yet, so a unit seen in several early
//! categories keeps its first record. Imperial records replace anything
//! earlier so a unit reports its most upgraded standard form, and elite
//! unique units replace everything.

use std::fmt;

use super::mapping::{MergeOutcome, MergePolicy, OutputMapping};
use super::record::{build_unique_record, build_unit_record, KeyedRecord};
use crate::analyzer::Analyzer;
use crate::core::error::Result;
use crate::core::types::Age;

/// One of the four ordered merge passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Feudal,
    Castle,
    Imperial,
    Unique,
}

impl Pass {
    pub const ALL: [Pass; 4] = [Pass::Feudal, Pass::Castle, Pass::Imperial, Pass::Unique];

    pub fn policy(&self) -> MergePolicy {
        match self {
            Pass::Feudal | Pass::Castle => MergePolicy::InsertIfAbsent,
            Pass::Imperial | Pass::Unique => MergePolicy::Overwrite,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pass::Feudal => "feudal",
            Pass::Castle => "castle",
            Pass::Imperial => "imperial",
            Pass::Unique => "unique",
        };
        f.write_str(name)
    }
}

/// Per-pass merge counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub inserted: usize,
    pub kept: usize,
    pub replaced: usize,
    /// Queries where the civilization lacked the unit or had no stats
    pub absent: usize,
}

impl PassStats {
    fn record(&mut self, outcome: Option<MergeOutcome>) {
        match outcome {
            Some(MergeOutcome::Inserted) => self.inserted += 1,
            Some(MergeOutcome::Kept) => self.kept += 1,
            Some(MergeOutcome::Replaced) => self.replaced += 1,
            None => self.absent += 1,
        }
    }
}

/// Counters for a whole conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub civilizations: usize,
    passes: [PassStats; 4],
}

impl ConversionSummary {
    pub fn pass(&self, pass: Pass) -> &PassStats {
        &self.passes[pass.index()]
    }
}

/// Result of a conversion run
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub mapping: OutputMapping,
    pub summary: ConversionSummary,
}

impl Conversion {
    fn apply(&mut self, pass: Pass, entry: Option<KeyedRecord>) {
        let outcome = entry.map(|(key, record)| self.mapping.merge(key, record, pass.policy()));
        self.summary.passes[pass.index()].record(outcome);
    }
}

/// Run every civilization through the four passes
///
/// Any analyzer error aborts the run; absent units are skipped.
pub fn convert<A: Analyzer + ?Sized>(analyzer: &A) -> Result<Conversion> {
    let civs = analyzer.civilizations();
    tracing::info!("Processing {} civilizations...", civs.len());

    let catalog = analyzer.catalog();
    let mut conversion = Conversion::default();

    for civ in civs {
        let civ_name = civ.name.as_str();
        let before = conversion.mapping.len();

        for (pass, age) in [
            (Pass::Feudal, Age::Feudal),
            (Pass::Castle, Age::Castle),
            (Pass::Imperial, Age::Imperial),
        ] {
            for unit in catalog.standard(age) {
                let entry = build_unit_record(analyzer, civ_name, unit, age)?;
                conversion.apply(pass, entry);
            }
        }

        for unit in catalog.unique_for(civ_name) {
            let entry = build_unique_record(analyzer, civ_name, unit)?;
            conversion.apply(Pass::Unique, entry);
        }

        conversion.summary.civilizations += 1;
        tracing::debug!(
            civ = civ_name,
            new_keys = conversion.mapping.len() - before,
            "Civilization processed"
        );
    }

    for pass in Pass::ALL {
        let stats = conversion.summary.pass(pass);
        tracing::debug!(
            %pass,
            inserted = stats.inserted,
            kept = stats.kept,
            replaced = stats.replaced,
            absent = stats.absent,
            "Pass summary"
        );
    }

    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_policies() {
        assert_eq!(Pass::Feudal.policy(), MergePolicy::InsertIfAbsent);
        assert_eq!(Pass::Castle.policy(), MergePolicy::InsertIfAbsent);
        assert_eq!(Pass::Imperial.policy(), MergePolicy::Overwrite);
        assert_eq!(Pass::Unique.policy(), MergePolicy::Overwrite);
    }

    #[test]
    fn test_pass_stats_counting() {
        let mut stats = PassStats::default();
        stats.record(Some(MergeOutcome::Inserted));
        stats.record(Some(MergeOutcome::Kept));
        stats.record(None);
        stats.record(None);
        assert_eq!(
            stats,
            PassStats {
                inserted: 1,
                kept: 1,
                replaced: 0,
                absent: 2
            }
        );
    }
}
