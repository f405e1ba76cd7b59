//! Domain layer: entities and store logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod error;
pub mod item;
pub mod store;

pub use error::{DomainError, StoreResult};
pub use item::{NodeId, TreeItem};
pub use store::TreeStore;
