//! treestore: an in-memory forest of generically-attributed items.
//!
//! The core is [`TreeStore`]: an authoritative item list with two derived
//! indexes (id to item, parent id to children) rebuilt on every mutation.
//! Queries are index-backed; mutations are validated against the forest
//! invariants (resolvable parents, acyclic links) before any change is
//! applied, so failures leave the store untouched.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod sample;
pub mod util;

pub use application::{project_rows, Category, Row};
pub use domain::{DomainError, NodeId, StoreResult, TreeItem, TreeStore};
