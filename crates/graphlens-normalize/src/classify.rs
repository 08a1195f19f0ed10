//! Entity classification
//!
//! Each raw field value is decided once, by a fixed chain of shape checks, into
//! a closed [`Entity`] union. The order is node, relationship, path, and
//! anything that matches none of them (including malformed graph-looking
//! values) is a scalar. Classification never fails.
//!
//! Shapes follow the driver's serialized form:
//!
//! ```text
//! Node          {"identity": 4, "labels": ["Person"], "properties": {...}}
//! Relationship  {"identity": 9, "start": 1, "end": 2, "type": "KNOWS", "properties": {...}}
//! Path          {"start": Node, "end": Node, "segments": [{"start": Node, "relationship": Relationship, "end": Node}, ...]}
//! ```
//!
//! Identities may be plain integers, boxed `{low, high}` integers or strings.
//! Drivers that only expose element ids (`elementId`, `startNodeElementId`,
//! `endNodeElementId`) are accepted too.

use crate::coerce::boxed_integer;
use graphlens_core::{GraphNode, GraphRelationship, Properties};
use serde_json::{Map, Value};

/// Shape tag of a classified value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Node,
    Relationship,
    Path,
    Scalar,
}

/// One step of a path: `start -[relationship]-> end`
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub start: GraphNode,
    pub relationship: GraphRelationship,
    pub end: GraphNode,
}

/// A classified field value
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Node(GraphNode),
    Relationship(GraphRelationship),
    Path(Vec<PathSegment>),
    Scalar(Value),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Node(_) => EntityKind::Node,
            Entity::Relationship(_) => EntityKind::Relationship,
            Entity::Path(_) => EntityKind::Path,
            Entity::Scalar(_) => EntityKind::Scalar,
        }
    }

    /// Returns true for nodes, relationships and paths
    pub fn is_graph(&self) -> bool {
        !matches!(self, Entity::Scalar(_))
    }
}

/// Classify one raw field value
pub fn classify(value: Value) -> Entity {
    if let Some(node) = as_node(&value) {
        return Entity::Node(node);
    }
    if let Some(rel) = as_relationship(&value) {
        return Entity::Relationship(rel);
    }
    if let Some(segments) = as_path(&value) {
        return Entity::Path(segments);
    }
    Entity::Scalar(value)
}

fn as_node(value: &Value) -> Option<GraphNode> {
    let obj = value.as_object()?;
    if ["start", "end", "startNodeElementId", "endNodeElementId"]
        .iter()
        .any(|key| obj.contains_key(*key))
    {
        return None;
    }

    let labels = obj
        .get("labels")?
        .as_array()?
        .iter()
        .map(|label| label.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;
    let properties = obj.get("properties")?.as_object()?;
    let id = identity(obj, "identity", "elementId")?;

    Some(GraphNode::with_labels(id, labels).with_properties(properties.clone()))
}

fn as_relationship(value: &Value) -> Option<GraphRelationship> {
    let obj = value.as_object()?;
    let rel_type = obj.get("type")?.as_str()?;
    let id = identity(obj, "identity", "elementId")?;
    let source = identity(obj, "start", "startNodeElementId")?;
    let target = identity(obj, "end", "endNodeElementId")?;

    let properties = match obj.get("properties") {
        Some(Value::Object(props)) => props.clone(),
        Some(_) => return None,
        None => Properties::new(),
    };

    Some(GraphRelationship::new(id, source, target, rel_type).with_properties(properties))
}

fn as_path(value: &Value) -> Option<Vec<PathSegment>> {
    value
        .as_object()?
        .get("segments")?
        .as_array()?
        .iter()
        .map(as_segment)
        .collect()
}

fn as_segment(value: &Value) -> Option<PathSegment> {
    let obj = value.as_object()?;
    Some(PathSegment {
        start: as_node(obj.get("start")?)?,
        relationship: as_relationship(obj.get("relationship")?)?,
        end: as_node(obj.get("end")?)?,
    })
}

/// Render an identity field, falling back to its element-id form
fn identity(obj: &Map<String, Value>, key: &str, element_key: &str) -> Option<String> {
    obj.get(key)
        .and_then(render_id)
        .or_else(|| obj.get(element_key)?.as_str().map(str::to_string))
}

fn render_id(value: &Value) -> Option<String> {
    if let Some(n) = boxed_integer(value) {
        return Some(n.to_string());
    }
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: i64, labels: &[&str]) -> Value {
        json!({"identity": id, "labels": labels, "properties": {}})
    }

    fn rel(id: i64, start: i64, end: i64, rel_type: &str) -> Value {
        json!({"identity": id, "start": start, "end": end, "type": rel_type, "properties": {}})
    }

    #[test]
    fn test_classify_node() {
        let value = json!({
            "identity": {"low": 4, "high": 0},
            "labels": ["Person", "Employee"],
            "properties": {"name": "Ann"}
        });

        match classify(value) {
            Entity::Node(node) => {
                assert_eq!(node.id, "4");
                assert_eq!(node.label, "Person");
                assert_eq!(node.labels, vec!["Person", "Employee"]);
                assert_eq!(node.get_property("name"), Some(&json!("Ann")));
            }
            other => panic!("expected node, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_relationship() {
        match classify(rel(9, 1, 2, "KNOWS")) {
            Entity::Relationship(r) => {
                assert_eq!(r.id, "9");
                assert_eq!(r.source, "1");
                assert_eq!(r.target, "2");
                assert_eq!(r.rel_type, "KNOWS");
            }
            other => panic!("expected relationship, got {:?}", other),
        }
    }

    #[test]
    fn test_relationship_without_properties() {
        let value = json!({"identity": 9, "start": 1, "end": 2, "type": "KNOWS"});
        assert_eq!(classify(value).kind(), EntityKind::Relationship);
    }

    #[test]
    fn test_classify_path() {
        let value = json!({
            "start": node(1, &["A"]),
            "end": node(3, &["C"]),
            "segments": [
                {"start": node(1, &["A"]), "relationship": rel(10, 1, 2, "NEXT"), "end": node(2, &["B"])},
                {"start": node(2, &["B"]), "relationship": rel(11, 2, 3, "NEXT"), "end": node(3, &["C"])}
            ],
            "length": 2
        });

        match classify(value) {
            Entity::Path(segments) => {
                assert_eq!(segments.len(), 2);
                assert_eq!(segments[0].start.id, "1");
                assert_eq!(segments[1].relationship.id, "11");
                assert_eq!(segments[1].end.id, "3");
            }
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn test_element_ids() {
        let node = json!({"elementId": "4:abc:0", "labels": [], "properties": {}});
        match classify(node) {
            Entity::Node(n) => {
                assert_eq!(n.id, "4:abc:0");
                assert_eq!(n.label, "");
            }
            other => panic!("expected node, got {:?}", other),
        }

        let rel = json!({
            "elementId": "5:abc:9",
            "startNodeElementId": "4:abc:0",
            "endNodeElementId": "4:abc:1",
            "type": "KNOWS",
            "properties": {}
        });
        match classify(rel) {
            Entity::Relationship(r) => {
                assert_eq!(r.source, "4:abc:0");
                assert_eq!(r.target, "4:abc:1");
            }
            other => panic!("expected relationship, got {:?}", other),
        }
    }

    #[test]
    fn test_primitives_are_scalars() {
        for value in [json!(5), json!("text"), json!(null), json!(true), json!(1.5)] {
            assert_eq!(classify(value.clone()), Entity::Scalar(value));
        }
        assert_eq!(classify(json!([node(1, &[])])).kind(), EntityKind::Scalar);
        assert_eq!(classify(json!({"a": 1})).kind(), EntityKind::Scalar);
    }

    #[test]
    fn test_malformed_shapes_fall_through() {
        // Labels without properties
        assert_eq!(classify(json!({"identity": 1, "labels": []})).kind(), EntityKind::Scalar);
        // Non-string label
        assert_eq!(
            classify(json!({"identity": 1, "labels": [3], "properties": {}})).kind(),
            EntityKind::Scalar
        );
        // Node shape without identity
        assert_eq!(classify(json!({"labels": [], "properties": {}})).kind(), EntityKind::Scalar);
        // Relationship without end
        assert_eq!(
            classify(json!({"identity": 9, "start": 1, "type": "KNOWS"})).kind(),
            EntityKind::Scalar
        );
        // Path with a broken segment
        let path = json!({"segments": [{"start": node(1, &[]), "end": node(2, &[])}]});
        assert_eq!(classify(path).kind(), EntityKind::Scalar);
    }

    #[test]
    fn test_endpoints_disqualify_node() {
        let value = json!({"identity": 1, "labels": [], "properties": {}, "start": 1, "end": 2});
        assert_eq!(classify(value).kind(), EntityKind::Scalar);
    }

    #[test]
    fn test_empty_path_has_no_segments() {
        let value = json!({"start": node(1, &[]), "end": node(1, &[]), "segments": []});
        assert_eq!(classify(value), Entity::Path(Vec::new()));
    }
}
