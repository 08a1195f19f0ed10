//! Canonical graph types for graphlens
//!
//! Defines the renderer-facing graph model: nodes, relationships and the
//! ordered collection of both produced by one query execution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property map of a node or relationship
pub type Properties = Map<String, Value>;

/// A node in the canonical graph model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Database identity rendered as a string
    pub id: String,

    /// Primary label (first label of the node, empty when it has none)
    pub label: String,

    /// Every label in the order the database returned them
    #[serde(default)]
    pub labels: Vec<String>,

    /// Properties of this node
    #[serde(default)]
    pub properties: Properties,
}

impl GraphNode {
    /// Create a node with the given ID and no labels
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            labels: Vec::new(),
            properties: Properties::new(),
        }
    }

    /// Create a node with labels; the first one becomes the primary label
    pub fn with_labels<S, I, L>(id: S, labels: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self {
            id: id.into(),
            label: labels.first().cloned().unwrap_or_default(),
            labels,
            properties: Properties::new(),
        }
    }

    /// Builder: replace the properties
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Check if node has a label by name
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Get a property
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// A relationship in the canonical graph model
///
/// `source` and `target` are node ids. They are not required to be present in
/// the node set when the relationship is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRelationship {
    /// Database identity rendered as a string
    pub id: String,

    /// Source node ID
    pub source: String,

    /// Target node ID
    pub target: String,

    /// The relationship type
    #[serde(rename = "type")]
    pub rel_type: String,

    /// Properties of this relationship
    #[serde(default)]
    pub properties: Properties,
}

impl GraphRelationship {
    /// Create a new relationship without properties
    pub fn new<I, S, T, R>(id: I, source: S, target: T, rel_type: R) -> Self
    where
        I: Into<String>,
        S: Into<String>,
        T: Into<String>,
        R: Into<String>,
    {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            rel_type: rel_type.into(),
            properties: Properties::new(),
        }
    }

    /// Builder: replace the properties
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Check if this relationship connects to a node
    pub fn connects(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Nodes in first-seen order and relationships in append order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<GraphRelationship>,
}

impl GraphData {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the graph holds neither nodes nor relationships
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }

    /// Find a node by ID
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Relationships that point at a node missing from the node set
    pub fn dangling_relationships(&self) -> impl Iterator<Item = &GraphRelationship> + '_ {
        self.relationships
            .iter()
            .filter(|r| self.node(&r.source).is_none() || self.node(&r.target).is_none())
    }
}
