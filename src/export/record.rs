//! Flat unit records consumed by the front-end

use serde::{Deserialize, Serialize};

use super::slug::unit_key;
use crate::analyzer::{Analyzer, ClassTable, RawUnit, StatsBundle, UniqueUnitConfig, UnitConfig, UnitLookup};
use crate::core::error::Result;
use crate::core::types::{Age, Stat};

/// Resource cost of a unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub food: Stat,
    pub wood: Stat,
    pub gold: Stat,
    pub stone: Stat,
}

/// One unit as written to the generated module
///
/// Exactly one of `matk`/`patk` carries the attack value; the other is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub name: String,
    pub hp: Stat,
    pub matk: Stat,
    pub patk: Stat,
    pub marm: Stat,
    pub parm: Stat,
    pub range: Stat,
    pub reload: Stat,
    pub speed: Stat,
    pub attacks: ClassTable,
    pub armors: ClassTable,
    pub cost: Cost,
    pub train_time: Stat,
    pub accuracy: Stat,
    pub frame_delay: Stat,
    pub bonuses: Vec<serde_json::Value>,
    pub blast_width: Stat,
    pub blast_damage: Stat,
    pub blast_level: Stat,
}

impl OutputRecord {
    pub(crate) fn from_stats(
        name: String,
        stats: &StatsBundle,
        bonuses: &[serde_json::Value],
        raw: &RawUnit,
    ) -> Self {
        let (matk, patk) = if stats.is_pierce() {
            (Stat::zero(), stats.attack.clone())
        } else {
            (stats.attack.clone(), Stat::zero())
        };

        Self {
            name,
            hp: stats.hp.clone(),
            matk,
            patk,
            marm: stats.melee_armor.clone(),
            parm: stats.pierce_armor.clone(),
            range: stats.range.clone(),
            reload: stats.reload_time.clone(),
            speed: stats.speed.clone(),
            attacks: stats.attacks.clone(),
            armors: stats.armors.clone(),
            cost: Cost {
                food: stats.cost_food.clone(),
                wood: stats.cost_wood.clone(),
                gold: stats.cost_gold.clone(),
                stone: stats.cost_stone.clone(),
            },
            train_time: stats.train_time.clone(),
            accuracy: stats.accuracy.clone(),
            frame_delay: stats.attack_delay.clone(),
            bonuses: bonuses.to_vec(),
            blast_width: raw.blast_width(),
            blast_damage: raw.blast_damage(),
            blast_level: raw.blast_level(),
        }
    }
}

/// A record together with its mapping key
pub type KeyedRecord = (String, OutputRecord);

/// Build the record for a standard unit of `civ` at `age`
///
/// Returns `Ok(None)` when the civilization lacks the unit or the analyzer
/// has no stats for it.
pub fn build_unit_record<A: Analyzer + ?Sized>(
    analyzer: &A,
    civ: &str,
    unit: &UnitConfig,
    age: Age,
) -> Result<Option<KeyedRecord>> {
    let lookup = analyzer.calculate_unit_stats_for_civ(civ, unit, age)?;
    assemble(analyzer, civ, &lookup.unit_name, &lookup)
}

/// Build the record for the elite form of a unique unit
///
/// Always computed at the top age; named after the configured elite name,
/// or "Elite {display name}" when none is set.
pub fn build_unique_record<A: Analyzer + ?Sized>(
    analyzer: &A,
    civ: &str,
    unit: &UniqueUnitConfig,
) -> Result<Option<KeyedRecord>> {
    let lookup = analyzer.calculate_unique_unit_stats(civ, unit, Age::TOP, true)?;
    assemble(analyzer, civ, &unit.elite_display_name(), &lookup)
}

fn assemble<A: Analyzer + ?Sized>(
    analyzer: &A,
    civ: &str,
    unit_name: &str,
    lookup: &UnitLookup,
) -> Result<Option<KeyedRecord>> {
    let Some((unit_id, stats)) = lookup.found() else {
        return Ok(None);
    };

    let raw = match unit_id {
        Some(id) => analyzer.get_unit(id)?,
        None => RawUnit::default(),
    };

    let record = OutputRecord::from_stats(
        format!("{} {}", civ, unit_name),
        stats,
        &lookup.applied_bonuses,
        &raw,
    );
    Ok(Some((unit_key(civ, unit_name), record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn archer_stats() -> StatsBundle {
        let mut stats = StatsBundle {
            hp: Stat::int(30),
            attack: Stat::int(4),
            range: Stat::int(4),
            reload_time: Stat::float(2.0),
            speed: Stat::float(0.96),
            cost_wood: Stat::int(25),
            cost_gold: Stat::int(45),
            train_time: Stat::int(35),
            accuracy: Stat::int(80),
            attack_delay: Stat::float(0.35),
            ..Default::default()
        };
        stats.attacks.insert(3, json!(4));
        stats.armors.insert(15, json!(0));
        stats
    }

    #[test]
    fn test_pierce_attack_routes_to_patk() {
        let raw = RawUnit::default();
        let record = OutputRecord::from_stats("Britons Archer".into(), &archer_stats(), &[], &raw);
        assert_eq!(record.patk, Stat::int(4));
        assert!(record.matk.is_zero());
        assert_eq!(record.reload, Stat::float(2.0));
        assert_eq!(record.frame_delay, Stat::float(0.35));
        assert_eq!(
            record.cost,
            Cost {
                food: Stat::zero(),
                wood: Stat::int(25),
                gold: Stat::int(45),
                stone: Stat::zero(),
            }
        );
    }

    #[test]
    fn test_melee_attack_routes_to_matk() {
        let mut stats = archer_stats();
        stats.attacks.clear();
        stats.attacks.insert(4, json!(9));
        stats.attack = Stat::int(9);

        let record = OutputRecord::from_stats("Franks Knight".into(), &stats, &[], &RawUnit::default());
        assert_eq!(record.matk, Stat::int(9));
        assert!(record.patk.is_zero());
    }

    #[test]
    fn test_blast_fields_copied_from_raw_unit() {
        let raw = RawUnit {
            blast_width: Some(Stat::float(0.5)),
            blast_damage: Some(Stat::int(1)),
            ..Default::default()
        };
        let record = OutputRecord::from_stats("x".into(), &archer_stats(), &[], &raw);
        assert_eq!(record.blast_width, Stat::float(0.5));
        assert_eq!(record.blast_damage, Stat::int(1));
        assert!(record.blast_level.is_zero());
    }

    #[test]
    fn test_whole_stats_serialize_without_fraction() {
        let record =
            OutputRecord::from_stats("Britons Archer".into(), &archer_stats(), &[], &RawUnit::default());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"hp\":30,"));
        assert!(json.contains("\"matk\":0,"));
        assert!(json.contains("\"patk\":4,"));
        assert!(json.contains("\"reload\":2.0,"));
        assert!(json.contains("\"speed\":0.96,"));
        assert!(json.contains("\"blastLevel\":0}"));
    }

    #[test]
    fn test_serialized_field_names() {
        let bonuses = vec![json!({"type": "hp", "value": 0.1})];
        let record =
            OutputRecord::from_stats("Britons Archer".into(), &archer_stats(), &bonuses, &RawUnit::default());
        let value = serde_json::to_value(&record).unwrap();

        for field in [
            "name", "hp", "matk", "patk", "marm", "parm", "range", "reload", "speed", "attacks",
            "armors", "cost", "trainTime", "accuracy", "frameDelay", "bonuses", "blastWidth",
            "blastDamage", "blastLevel",
        ] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(value["attacks"]["3"], json!(4));
        assert_eq!(value["cost"]["gold"], json!(45));
        assert_eq!(value["bonuses"][0]["type"], json!("hp"));
    }
}
