//! Snapshot-to-module integration tests

use civ_unit_export::analyzer::snapshot::{resolve_data_dir, SnapshotAnalyzer};
use civ_unit_export::core::ExportConfig;
use civ_unit_export::export::{convert, write_module};
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[feudal]]
key = "militia_line"

[[castle]]
key = "archer_line"

[[imperial]]
key = "archer_line"

[[unique.Britons]]
display_name = "Longbowman"
"#;

const STATS: &str = r#"[
  {"civ": "Britons", "unit": "militia_line", "age": "feudal",
   "has_unit": true, "unit_name": "Man-at-Arms", "unit_id": 75,
   "stats": {"hp": 45, "attack": 6, "attacks": {"4": 6},
             "melee_armor": 0, "pierce_armor": 1, "reload_time": 2.0,
             "speed": 0.9, "cost_food": 60, "cost_gold": 20, "train_time": 21},
   "applied_bonuses": []},
  {"civ": "Britons", "unit": "archer_line", "age": "castle",
   "has_unit": true, "unit_name": "Crossbowman", "unit_id": 24,
   "stats": {"hp": 35, "attack": 5, "attacks": {"3": 5},
             "melee_armor": 0, "pierce_armor": 0, "range": 6, "reload_time": 2.0,
             "speed": 0.96, "cost_wood": 25, "cost_gold": 45, "train_time": 27},
   "applied_bonuses": [{"description": "Foot archers +1 range"}]},
  {"civ": "Britons", "unit": "archer_line", "age": "imperial",
   "has_unit": true, "unit_name": "Arbalester", "unit_id": 492,
   "stats": {"hp": 40, "attack": 6, "attacks": {"3": 6},
             "melee_armor": 0, "pierce_armor": 0, "range": 7, "reload_time": 2.0,
             "speed": 0.96, "cost_wood": 25, "cost_gold": 45, "train_time": 27},
   "applied_bonuses": []},
  {"civ": "Britons", "unit": "Longbowman", "age": "imperial", "elite": true,
   "has_unit": true, "unit_name": "Elite Longbowman", "unit_id": 530,
   "stats": {"hp": 40, "attack": 7, "attacks": {"3": 7},
             "melee_armor": 1, "pierce_armor": 1, "range": 7, "reload_time": 2.0,
             "speed": 0.96, "cost_wood": 35, "cost_gold": 40, "train_time": 18},
   "applied_bonuses": []},
  {"civ": "Franks", "unit": "militia_line", "age": "feudal", "has_unit": false}
]"#;

const UNITS: &str = r#"{
  "75": {"name": "Man-at-Arms"},
  "24": {"name": "Crossbowman"},
  "492": {"name": "Arbalester"},
  "530": {"name": "Elite Longbowman", "blast_width": 0}
}"#;

fn write_snapshot(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("civs.json"), r#"[{"name": "Britons"}, {"name": "Franks"}]"#).unwrap();
    std::fs::write(dir.join("catalog.toml"), CATALOG).unwrap();
    std::fs::write(dir.join("stats.json"), STATS).unwrap();
    std::fs::write(dir.join("units.json"), UNITS).unwrap();
}

#[test]
fn test_snapshot_to_generated_module() {
    let root = TempDir::new().unwrap();
    let config = ExportConfig::rooted_at(root.path());
    write_snapshot(&config.snapshot_dir);

    let data_dir = resolve_data_dir(&config).unwrap();
    let analyzer = SnapshotAnalyzer::open(data_dir).unwrap();
    let conversion = convert(&analyzer).unwrap();
    write_module(&config.output_path, &config.export_name, &conversion.mapping).unwrap();

    let contents = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(contents.starts_with("export const units = {\n"));
    assert!(contents.ends_with("};\n"));
    // whole numbers stay integers, floats keep their fraction
    assert!(contents.contains("\"hp\": 45,\n"));
    assert!(contents.contains("\"speed\": 0.9,\n"));
    assert!(contents.contains("\"reload\": 2.0,\n"));

    let json = &contents["export const units = ".len()..contents.len() - ";\n".len()];
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    let units = value.as_object().unwrap();

    // castle and imperial archer-line units have different names, so both survive
    let keys: Vec<_> = units.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 4);
    for key in [
        "britons_man_at_arms",
        "britons_crossbowman",
        "britons_arbalester",
        "britons_elite_longbowman",
    ] {
        assert!(units.contains_key(key), "missing {}", key);
    }

    let crossbow = &units["britons_crossbowman"];
    let arbalester = &units["britons_arbalester"];
    assert!(crossbow["hp"].as_f64() < arbalester["hp"].as_f64());
    assert_eq!(crossbow["bonuses"][0]["description"], "Foot archers +1 range");
    assert_eq!(units["britons_man_at_arms"]["matk"].as_f64(), Some(6.0));
    assert_eq!(units["britons_man_at_arms"]["cost"]["food"].as_f64(), Some(60.0));
    assert_eq!(units["britons_elite_longbowman"]["name"], "Britons Elite Longbowman");
}

#[test]
fn test_vendor_extraction_used_without_snapshot() {
    let root = TempDir::new().unwrap();
    let config = ExportConfig::rooted_at(root.path());
    write_snapshot(&config.vendor_data_dir());

    let data_dir = resolve_data_dir(&config).unwrap();
    assert_eq!(data_dir, config.vendor_data_dir());
    let analyzer = SnapshotAnalyzer::open(data_dir).unwrap();
    assert_eq!(convert(&analyzer).unwrap().mapping.len(), 4);
}
