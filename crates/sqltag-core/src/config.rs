use crate::extract::Separators;

use serde::{Deserialize, Serialize};

/// Tag names and separators used when walking records.
///
/// Passed explicitly to every walk. Deserializable so it can be loaded
/// from a configuration file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tags read by selects, highest priority first
    pub select_tags: Vec<String>,

    /// Tags read by inserts, highest priority first
    pub insert_tags: Vec<String>,

    /// Tags read by updates, highest priority first
    pub update_tags: Vec<String>,

    pub separators: Separators,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            select_tags: tags(&["db_select", "dbselect", "db"]),
            insert_tags: tags(&["db_insert", "dbinsert", "insert", "db"]),
            update_tags: tags(&["db_update", "dbupdate", "update", "db"]),
            separators: Separators::default(),
        }
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
