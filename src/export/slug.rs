//! Canonical identifiers for civilization and unit names

/// Lowercase `text`, replacing spaces and hyphens with underscores
pub fn slugify(text: &str) -> String {
    text.to_lowercase().replace([' ', '-'], "_")
}

/// Mapping key for a unit of a civilization
pub fn unit_key(civ: &str, unit_name: &str) -> String {
    format!("{}_{}", slugify(civ), slugify(unit_name))
}
