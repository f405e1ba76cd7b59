//! Fixed sample dataset: a small multi-level forest with mixed integer and
//! string identifiers, used as the default CLI input and by tests.

use crate::domain::{NodeId, TreeItem};

pub fn items() -> Vec<TreeItem> {
    vec![
        TreeItem::new(1, None).with_attr("label", "Item 1"),
        TreeItem::new("91064cee", Some(NodeId::Int(1))).with_attr("label", "Item 2"),
        TreeItem::new(3, Some(NodeId::Int(1))).with_attr("label", "Item 3"),
        TreeItem::new(4, Some(NodeId::from("91064cee"))).with_attr("label", "Item 4"),
        TreeItem::new(5, Some(NodeId::from("91064cee"))).with_attr("label", "Item 5"),
        TreeItem::new(6, Some(NodeId::from("91064cee"))).with_attr("label", "Item 6"),
        TreeItem::new(7, Some(NodeId::Int(4))).with_attr("label", "Item 7"),
        TreeItem::new(8, Some(NodeId::Int(4))).with_attr("label", "Item 8"),
    ]
}
