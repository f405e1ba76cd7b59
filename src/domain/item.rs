//! Domain entities: items and their identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Item identifier: either an integer or a string.
///
/// The two domains never collide: `NodeId::Int(1)` and `NodeId::Str("1")`
/// are distinct identifiers. Serde is untagged, so JSON `1` deserializes to
/// `Int` and `"1"` to `Str`, preserving the distinction on round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Str(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Str(s)
    }
}

/// A node in the forest: identifier, optional parent link, and an open-ended
/// attribute map.
///
/// `parent == None` marks a root. Extra JSON fields land in `attrs` via
/// serde flatten and re-emit at the top level on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeItem {
    pub id: NodeId,
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl TreeItem {
    pub fn new(id: impl Into<NodeId>, parent: Option<NodeId>) -> Self {
        Self {
            id: id.into(),
            parent,
            attrs: Map::new(),
        }
    }

    /// Attach an attribute (builder pattern).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Returns the `label` attribute if present and a string.
    pub fn label(&self) -> Option<&str> {
        self.attrs.get("label").and_then(Value::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_int_and_str_with_same_digits_when_comparing_then_distinct() {
        assert_ne!(NodeId::Int(1), NodeId::Str("1".to_string()));
    }

    #[test]
    fn given_json_number_and_string_when_deserializing_then_domains_preserved() {
        let int_id: NodeId = serde_json::from_str("1").unwrap();
        let str_id: NodeId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(int_id, NodeId::Int(1));
        assert_eq!(str_id, NodeId::Str("1".to_string()));
    }

    #[test]
    fn given_item_with_extra_fields_when_deserializing_then_lands_in_attrs() {
        let json = r#"{"id": "91064cee", "parent": 1, "label": "Item 2", "weight": 3}"#;
        let item: TreeItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, NodeId::from("91064cee"));
        assert_eq!(item.parent, Some(NodeId::Int(1)));
        assert_eq!(item.label(), Some("Item 2"));
        assert_eq!(item.attrs.get("weight"), Some(&Value::from(3)));
    }

    #[test]
    fn given_item_when_round_tripping_then_attrs_reemit_at_top_level() {
        let item = TreeItem::new(3, Some(NodeId::Int(1))).with_attr("label", "Item 3");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["label"], "Item 3");

        let back: TreeItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn given_item_without_parent_field_when_deserializing_then_root() {
        let item: TreeItem = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(item.is_root());
    }
}
