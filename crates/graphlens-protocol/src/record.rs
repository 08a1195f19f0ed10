//! Result records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of a query result
///
/// Field values are kept exactly as the driver produced them. Field order is
/// preserved, since it decides the first-seen order of nodes within a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Builder: append a field
    pub fn with<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
