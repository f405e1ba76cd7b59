//! Forest rendering for terminal display.

use termtree::Tree;

use crate::domain::{TreeItem, TreeStore};

/// Render each root of the forest as a `termtree` tree, in store order.
pub fn forest_to_trees(store: &TreeStore) -> Vec<Tree<String>> {
    store
        .roots()
        .into_iter()
        .map(|root| subtree(store, root))
        .collect()
}

fn subtree(store: &TreeStore, item: &TreeItem) -> Tree<String> {
    let leaves: Vec<_> = store
        .get_children(&item.id)
        .into_iter()
        .map(|child| subtree(store, child))
        .collect();

    Tree::new(node_label(item)).with_leaves(leaves)
}

fn node_label(item: &TreeItem) -> String {
    match item.label() {
        Some(label) => format!("{} ({})", item.id, label),
        None => item.id.to_string(),
    }
}
