//! Row projection: flatten a store into path-annotated rows for display grids.

use std::collections::HashMap;

use serde::Serialize;
use tracing::instrument;

use crate::domain::{NodeId, TreeItem, TreeStore};

/// Classification of an item within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Has at least one direct child
    Group,
    /// No children
    Leaf,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Group => f.pad("group"),
            Category::Leaf => f.pad("leaf"),
        }
    }
}

/// One output row: the original item plus its root-to-item path and its
/// group/leaf classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    #[serde(flatten)]
    pub item: TreeItem,
    pub path: Vec<NodeId>,
    pub category: Category,
}

/// Project every item of the store into one row, in store order.
///
/// The path is the reversed self-to-root ancestor chain; for a root item it
/// is exactly `[id]`. Paths are computed once per id.
/// Tolerates any valid store state, including an empty store.
#[instrument(level = "debug", skip(store), fields(items = store.len()))]
pub fn project_rows(store: &TreeStore) -> Vec<Row> {
    let mut path_cache: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    let mut rows = Vec::with_capacity(store.len());

    for item in store.get_all() {
        let path = path_cache
            .entry(item.id.clone())
            .or_insert_with(|| build_path(store, item))
            .clone();

        let category = if store.get_children(&item.id).is_empty() {
            Category::Leaf
        } else {
            Category::Group
        };

        rows.push(Row {
            item: item.clone(),
            path,
            category,
        });
    }

    rows
}

fn build_path(store: &TreeStore, item: &TreeItem) -> Vec<NodeId> {
    if item.is_root() {
        return vec![item.id.clone()];
    }
    store
        .get_all_parents(&item.id)
        .iter()
        .rev()
        .map(|ancestor| ancestor.id.clone())
        .collect()
}
