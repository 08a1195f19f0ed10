//! Graph accumulation for one execution
//!
//! Nodes are deduplicated by id with first-write-wins semantics; relationships
//! are appended as they arrive, without deduplication. The same relationship
//! reached through two records (or two path expansions) is therefore listed
//! twice.

use crate::classify::PathSegment;
use graphlens_core::{GraphData, GraphNode, GraphRelationship};
use std::collections::HashMap;

/// In-progress canonical graph
///
/// `index` maps a node id to its position in `graph.nodes`. Both are only
/// written by [`GraphAccumulator::add_node`].
#[derive(Debug, Default)]
pub struct GraphAccumulator {
    index: HashMap<String, usize>,
    graph: GraphData,
}

impl GraphAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless its id was already seen
    ///
    /// Returns true if the node was inserted. A later occurrence never merges
    /// labels or properties into the first one.
    pub fn add_node(&mut self, node: GraphNode) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }

        self.index.insert(node.id.clone(), self.graph.nodes.len());
        self.graph.nodes.push(node);
        true
    }

    /// Append a relationship
    pub fn add_relationship(&mut self, rel: GraphRelationship) {
        self.graph.relationships.push(rel);
    }

    /// Add every segment of a path, in segment order
    pub fn add_path(&mut self, segments: Vec<PathSegment>) {
        for segment in segments {
            self.add_node(segment.start);
            self.add_node(segment.end);
            self.add_relationship(segment.relationship);
        }
    }

    /// Look up an accumulated node
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&pos| &self.graph.nodes[pos])
    }

    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.graph.relationships.len()
    }

    /// Current graph; may be called at any point during accumulation
    pub fn snapshot(&self) -> &GraphData {
        &self.graph
    }

    pub fn into_graph(self) -> GraphData {
        self.graph
    }
}
