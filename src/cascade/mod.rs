//! Cascading configuration lookup.
//!
//! This module handles:
//! - Immutable key/value storage
//! - Declarative fallback graphs, including diamonds and cycles
//! - Breadth-first resolution with explainable paths

pub mod graph;
pub mod resolver;
pub mod store;

pub use graph::{CascadeGraph, Fallback};
pub use resolver::{CascadingConfig, Resolved};
pub use store::ConfigStore;
