//! Anansi Core Library
//!
//! Lazy traversals over graphs and trees: walks and paths, adjacencies,
//! pruning iterators in four orders, and an element adjacency that treats
//! structured documents as trees of dotted element paths.

pub mod adjacency;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod format;
pub mod logging;
pub mod traverse;
pub mod walk;

pub use adjacency::{empty, from_fn, Adjacency, AdjacencyList};
pub use element::{element_path, elements, leaf_elements, lookup, split_element_path, Segment};
pub use error::{AnansiError, Result};
pub use traverse::{breadth_first, leaves, post_order, pre_order, Order, PruningIterator};
pub use walk::{Path, Walk, WalkBuilder};
