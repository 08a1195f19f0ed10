//! Execution results
//!
//! A [`QueryOutcome`] is the only value a successful execution returns. It is
//! built once, after the record stream is drained, and never mutated again.

use crate::types::GraphData;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The non-graph fields of one record, in record field order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScalarRow {
    inner: Map<String, Value>,
}

impl ScalarRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self { inner: Map::new() }
    }

    /// Set a column value
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        self.inner.insert(key.into(), value);
    }

    /// Get a column value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Column names in field order
    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Iterate over columns in field order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    /// Convert to the underlying map
    pub fn into_inner(self) -> Map<String, Value> {
        self.inner
    }
}

impl FromIterator<(String, Value)> for ScalarRow {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl From<Map<String, Value>> for ScalarRow {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

/// Execution summary reported alongside the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    /// The query text exactly as submitted
    pub query: String,

    /// Wall time from submission to the end of the record stream
    pub execution_time_ms: u64,

    pub node_count: usize,

    pub relationship_count: usize,

    /// Number of tabular rows collected
    pub row_count: usize,
}

/// Result of one successful execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    graph: GraphData,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<ScalarRow>>,

    summary: ExecutionSummary,
}

impl QueryOutcome {
    /// Assemble an outcome; the summary counts are derived from `graph` and `rows`
    pub fn new(
        query: impl Into<String>,
        graph: GraphData,
        rows: Option<Vec<ScalarRow>>,
        execution_time_ms: u64,
    ) -> Self {
        let summary = ExecutionSummary {
            query: query.into(),
            execution_time_ms,
            node_count: graph.nodes.len(),
            relationship_count: graph.relationships.len(),
            row_count: rows.as_ref().map_or(0, Vec::len),
        };

        Self {
            graph,
            rows,
            summary,
        }
    }

    /// The canonical graph
    pub fn graph(&self) -> &GraphData {
        &self.graph
    }

    /// Tabular rows, absent when the execution produced none
    pub fn rows(&self) -> Option<&[ScalarRow]> {
        self.rows.as_deref()
    }

    pub fn summary(&self) -> &ExecutionSummary {
        &self.summary
    }

    /// Serialize for the rendering collaborator
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
