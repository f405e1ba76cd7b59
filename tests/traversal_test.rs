//! Tests for descendant and ancestor traversal

use treestore::{NodeId, TreeItem, TreeStore};

/// Small forest: 1 -> {2 -> {4}, 3}
fn scenario_store() -> TreeStore {
    TreeStore::new(vec![
        TreeItem::new(1, None),
        TreeItem::new(2, Some(NodeId::Int(1))),
        TreeItem::new(3, Some(NodeId::Int(1))),
        TreeItem::new(4, Some(NodeId::Int(2))),
    ])
}

fn ids(items: Vec<&TreeItem>) -> Vec<NodeId> {
    items.into_iter().map(|item| item.id.clone()).collect()
}

// ============================================================
// Direct Children Tests
// ============================================================

#[test]
fn given_parent_when_getting_children_then_returns_direct_children_in_order() {
    let store = scenario_store();

    let children = store.get_children(&NodeId::Int(1));
    assert_eq!(
        ids(children),
        vec![NodeId::Int(2), NodeId::Int(3)]
    );
}

#[test]
fn given_children_when_checking_parent_links_then_all_point_back() {
    let store = scenario_store();

    for child in store.get_children(&NodeId::Int(1)) {
        assert_eq!(child.parent, Some(NodeId::Int(1)));
    }
}

#[test]
fn given_leaf_or_unknown_id_when_getting_children_then_empty() {
    let store = scenario_store();

    // Childless and nonexistent are indistinguishable by design.
    assert!(store.get_children(&NodeId::Int(4)).is_empty());
    assert!(store.get_children(&NodeId::Int(99)).is_empty());
}

// ============================================================
// Descendant Tests (pre-order)
// ============================================================

#[test]
fn given_root_when_getting_all_children_then_preorder() {
    let store = scenario_store();

    // 2's subtree is emitted before sibling 3.
    let descendants = store.get_all_children(&NodeId::Int(1));
    assert_eq!(
        ids(descendants),
        vec![NodeId::Int(2), NodeId::Int(4), NodeId::Int(3)]
    );
}

#[test]
fn given_descendants_when_walking_then_each_precedes_its_own_descendants() {
    let store = scenario_store();

    let order = ids(store.get_all_children(&NodeId::Int(1)));
    for (pos, id) in order.iter().enumerate() {
        for child in store.get_all_children(id) {
            let child_pos = order.iter().position(|other| *other == child.id).unwrap();
            assert!(child_pos > pos, "{} should come after {}", child.id, id);
        }
    }
}

#[test]
fn given_leaf_or_unknown_id_when_getting_all_children_then_empty() {
    let store = scenario_store();

    assert!(store.get_all_children(&NodeId::Int(4)).is_empty());
    assert!(store.get_all_children(&NodeId::Int(99)).is_empty());
}

#[test]
fn given_cyclic_forest_when_getting_all_children_then_terminates() {
    // Only constructible through the unchecked constructor.
    let store = TreeStore::new(vec![
        TreeItem::new(1, Some(NodeId::Int(2))),
        TreeItem::new(2, Some(NodeId::Int(1))),
    ]);

    let descendants = store.get_all_children(&NodeId::Int(1));
    assert_eq!(ids(descendants), vec![NodeId::Int(2), NodeId::Int(1)]);
}

// ============================================================
// Ancestor Tests
// ============================================================

#[test]
fn given_deep_item_when_getting_all_parents_then_self_first_root_last() {
    let store = scenario_store();

    let chain = store.get_all_parents(&NodeId::Int(4));
    assert_eq!(
        ids(chain),
        vec![NodeId::Int(4), NodeId::Int(2), NodeId::Int(1)]
    );
}

#[test]
fn given_root_item_when_getting_all_parents_then_chain_is_self_only() {
    let store = scenario_store();

    let chain = store.get_all_parents(&NodeId::Int(1));
    assert_eq!(ids(chain), vec![NodeId::Int(1)]);
}

#[test]
fn given_parents_chain_when_reversed_then_is_root_to_item_path() {
    let store = scenario_store();

    let mut path = ids(store.get_all_parents(&NodeId::Int(4)));
    path.reverse();
    assert_eq!(path, vec![NodeId::Int(1), NodeId::Int(2), NodeId::Int(4)]);
}

#[test]
fn given_unknown_id_when_getting_all_parents_then_empty() {
    let store = scenario_store();

    assert!(store.get_all_parents(&NodeId::Int(99)).is_empty());
}

#[test]
fn given_dangling_parent_when_getting_all_parents_then_chain_stops_there() {
    let store = TreeStore::new(vec![
        TreeItem::new(1, Some(NodeId::Int(99))),
        TreeItem::new(2, Some(NodeId::Int(1))),
    ]);

    // The unresolvable parent 99 is treated as if 1 were a root.
    let chain = store.get_all_parents(&NodeId::Int(2));
    assert_eq!(ids(chain), vec![NodeId::Int(2), NodeId::Int(1)]);
}

#[test]
fn given_cyclic_forest_when_getting_all_parents_then_terminates() {
    let store = TreeStore::new(vec![
        TreeItem::new(1, Some(NodeId::Int(2))),
        TreeItem::new(2, Some(NodeId::Int(1))),
    ]);

    let chain = store.get_all_parents(&NodeId::Int(1));
    assert_eq!(ids(chain), vec![NodeId::Int(1), NodeId::Int(2)]);
}
