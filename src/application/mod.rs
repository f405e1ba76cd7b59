//! Application layer: projections over the domain store

pub mod render;
pub mod rows;

pub use render::forest_to_trees;
pub use rows::{project_rows, Category, Row};
