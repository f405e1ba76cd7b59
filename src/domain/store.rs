//! Tree Index Store: authoritative item list plus derived lookup indexes.

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::domain::error::{DomainError, StoreResult};
use crate::domain::item::{NodeId, TreeItem};

/// In-memory forest of items with indexed lookup and validated mutation.
///
/// The item list is the single source of truth. Both indexes are derived and
/// rebuilt in full after every mutation, so they can never diverge from the
/// list. Queries are served from the indexes; nothing but the rebuild scans
/// the raw list.
///
/// Not safe for concurrent mutation: the rebuild is a clear-then-repopulate
/// sequence, so embedding in a concurrent host requires external
/// serialization of mutating calls.
#[derive(Debug, Default)]
pub struct TreeStore {
    /// All items in insertion order
    items: Vec<TreeItem>,
    /// Identifier -> position in `items`
    item_index: HashMap<NodeId, usize>,
    /// Parent identifier (None = root) -> child positions in insertion order
    child_index: HashMap<Option<NodeId>, Vec<usize>>,
}

impl TreeStore {
    /// Build a store from a bulk load of trusted items.
    ///
    /// No validation is performed: dangling parent references and cycles are
    /// accepted silently and surface later as degraded query results. Use
    /// [`TreeStore::validated`] when the input is not trusted.
    pub fn new(items: Vec<TreeItem>) -> Self {
        let mut store = Self {
            items,
            item_index: HashMap::new(),
            child_index: HashMap::new(),
        };
        store.rebuild_indexes();
        store
    }

    /// Build a store, validating the forest invariants up front.
    ///
    /// Fails atomically with the first violation found: duplicate
    /// identifiers, unresolvable parent references, or cyclic parent links.
    #[instrument(level = "debug", skip(items))]
    pub fn validated(items: Vec<TreeItem>) -> StoreResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(DomainError::DuplicateId(item.id.clone()));
            }
        }

        let store = Self::new(items);

        for item in &store.items {
            if let Some(parent) = &item.parent {
                if !store.item_index.contains_key(parent) {
                    return Err(DomainError::MissingParent(parent.clone()));
                }
            }
        }

        // Walk every ancestor chain; revisiting a position means a cycle.
        for item in &store.items {
            let mut visited = HashSet::new();
            let mut current = item;
            while let Some(parent) = &current.parent {
                if !visited.insert(&current.id) {
                    return Err(DomainError::CycleDetected {
                        id: current.id.clone(),
                        parent: parent.clone(),
                    });
                }
                match store.item_index.get(parent) {
                    Some(&pos) => current = &store.items[pos],
                    None => break,
                }
            }
        }

        Ok(store)
    }

    fn rebuild_indexes(&mut self) {
        self.item_index.clear();
        self.child_index.clear();

        for (pos, item) in self.items.iter().enumerate() {
            self.item_index.insert(item.id.clone(), pos);
            self.child_index
                .entry(item.parent.clone())
                .or_default()
                .push(pos);
        }
    }

    /// All items in insertion order.
    pub fn get_all(&self) -> &[TreeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by identifier. O(1).
    pub fn get_item(&self, id: &NodeId) -> Option<&TreeItem> {
        self.item_index.get(id).map(|&pos| &self.items[pos])
    }

    /// Direct children of `parent_id` in insertion order.
    ///
    /// Empty when the id has no children or does not exist; the two cases
    /// are indistinguishable by design.
    pub fn get_children(&self, parent_id: &NodeId) -> Vec<&TreeItem> {
        self.children_of(&Some(parent_id.clone()))
    }

    /// Items with no parent link.
    pub fn roots(&self) -> Vec<&TreeItem> {
        self.children_of(&None)
    }

    fn children_of(&self, key: &Option<NodeId>) -> Vec<&TreeItem> {
        self.child_index
            .get(key)
            .map(|positions| positions.iter().map(|&pos| &self.items[pos]).collect())
            .unwrap_or_default()
    }

    /// Every strict descendant of `id`, depth-first pre-order: a child is
    /// emitted before its own subtree, sibling subtrees follow in child-list
    /// order.
    ///
    /// A visited set bounds the walk on malformed (cyclic) input built
    /// through the unchecked constructor.
    #[instrument(level = "trace", skip(self))]
    pub fn get_all_children(&self, id: &NodeId) -> Vec<&TreeItem> {
        let mut result = Vec::new();
        let mut visited: HashSet<usize> = HashSet::new();
        let mut stack: Vec<usize> = Vec::new();

        self.push_children(&Some(id.clone()), &mut stack);

        while let Some(pos) = stack.pop() {
            if !visited.insert(pos) {
                continue;
            }
            let item = &self.items[pos];
            result.push(item);
            self.push_children(&Some(item.id.clone()), &mut stack);
        }

        result
    }

    /// Push child positions in reverse so the stack pops left-to-right.
    fn push_children(&self, key: &Option<NodeId>, stack: &mut Vec<usize>) {
        if let Some(positions) = self.child_index.get(key) {
            for &pos in positions.iter().rev() {
                stack.push(pos);
            }
        }
    }

    /// Ancestor chain starting at the item itself and ending at its root
    /// (self first, root last).
    ///
    /// A dangling parent reference ends the chain as if it were a root;
    /// an unknown starting id yields an empty chain. Cyclic parent links
    /// terminate the walk instead of looping.
    #[instrument(level = "trace", skip(self))]
    pub fn get_all_parents(&self, id: &NodeId) -> Vec<&TreeItem> {
        let mut result = Vec::new();

        let mut current = match self.get_item(id) {
            Some(item) => item,
            None => return result,
        };
        let mut visited: HashSet<&NodeId> = HashSet::new();

        result.push(current);
        visited.insert(&current.id);

        while let Some(parent_id) = &current.parent {
            let parent = match self.get_item(parent_id) {
                Some(parent) => parent,
                None => break,
            };
            if !visited.insert(&parent.id) {
                break;
            }
            result.push(parent);
            current = parent;
        }

        result
    }

    /// Append a new item.
    ///
    /// Fails with [`DomainError::DuplicateId`] if the id is already present,
    /// or [`DomainError::MissingParent`] if the parent link does not resolve.
    /// The store is unchanged on failure.
    #[instrument(level = "debug", skip(self, item), fields(id = %item.id))]
    pub fn add_item(&mut self, item: TreeItem) -> StoreResult<()> {
        if self.item_index.contains_key(&item.id) {
            return Err(DomainError::DuplicateId(item.id));
        }
        if let Some(parent) = &item.parent {
            if !self.item_index.contains_key(parent) {
                return Err(DomainError::MissingParent(parent.clone()));
            }
        }

        self.items.push(item);
        self.rebuild_indexes();
        Ok(())
    }

    /// Remove the item and all of its transitive descendants.
    ///
    /// Returns the number of items removed. Removing an unknown id is a
    /// silent no-op returning 0: deletion is idempotent.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_item(&mut self, id: &NodeId) -> usize {
        let mut doomed: HashSet<NodeId> = HashSet::new();
        doomed.insert(id.clone());
        for child in self.get_all_children(id) {
            doomed.insert(child.id.clone());
        }

        let before = self.items.len();
        self.items.retain(|item| !doomed.contains(&item.id));
        let removed = before - self.items.len();

        if removed > 0 {
            self.rebuild_indexes();
        }
        removed
    }

    /// Replace an existing item wholesale, keeping its list position.
    ///
    /// Fails with [`DomainError::NotFound`] if the id is absent. A non-null
    /// parent must resolve ([`DomainError::MissingParent`]) and must not be
    /// the item itself or any of its current descendants
    /// ([`DomainError::CycleDetected`], checked against the pre-update tree
    /// shape). The store is unchanged on failure.
    #[instrument(level = "debug", skip(self, item), fields(id = %item.id))]
    pub fn update_item(&mut self, item: TreeItem) -> StoreResult<()> {
        let pos = *self
            .item_index
            .get(&item.id)
            .ok_or_else(|| DomainError::NotFound(item.id.clone()))?;

        if let Some(parent) = &item.parent {
            if *parent == item.id {
                return Err(DomainError::CycleDetected {
                    id: item.id.clone(),
                    parent: parent.clone(),
                });
            }
            if !self.item_index.contains_key(parent) {
                return Err(DomainError::MissingParent(parent.clone()));
            }
            let is_descendant = self
                .get_all_children(&item.id)
                .iter()
                .any(|child| child.id == *parent);
            if is_descendant {
                return Err(DomainError::CycleDetected {
                    id: item.id.clone(),
                    parent: parent.clone(),
                });
            }
        }

        self.items[pos] = item;
        self.rebuild_indexes();
        Ok(())
    }
}
