//! Insertion-ordered output mapping and its merge policy

use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::record::OutputRecord;

/// How a record is merged when its key may already be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// First writer wins
    InsertIfAbsent,
    /// Later writer wins
    Overwrite,
}

/// What a merge did to the mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    /// Key already present, existing record kept
    Kept,
    /// Key already present, existing record replaced
    Replaced,
}

/// Slug-keyed records in the order their keys were first inserted
///
/// Replacing a record keeps its key at the original position.
#[derive(Debug, Clone, Default)]
pub struct OutputMapping {
    entries: Vec<(String, OutputRecord)>,
    index: AHashMap<String, usize>,
}

impl OutputMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, key: String, record: OutputRecord, policy: MergePolicy) -> MergeOutcome {
        match self.index.get(&key) {
            Some(&slot) => match policy {
                MergePolicy::InsertIfAbsent => MergeOutcome::Kept,
                MergePolicy::Overwrite => {
                    self.entries[slot].1 = record;
                    MergeOutcome::Replaced
                }
            },
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
                MergeOutcome::Inserted
            }
        }
    }

    pub fn insert_if_absent(&mut self, key: String, record: OutputRecord) -> MergeOutcome {
        self.merge(key, record, MergePolicy::InsertIfAbsent)
    }

    pub fn overwrite(&mut self, key: String, record: OutputRecord) -> MergeOutcome {
        self.merge(key, record, MergePolicy::Overwrite)
    }

    pub fn get(&self, key: &str) -> Option<&OutputRecord> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }
}

impl Serialize for OutputMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}
