//! Clone and conditional-copy engine.
//!
//! Copies never share nodes with their source. Within one output graph ids stay
//! unique, so a node reached twice is copied once and keeps every parent.

pub mod ancestors;
pub mod branch;
pub mod conditional_copy;

use sylva_core::models::NodeId;

use crate::graph::DagGraph;

pub use ancestors::clone_ancestors;
pub use branch::{clone_branch, clone_node};
pub use conditional_copy::conditionally_copy_tree;

/// An owned graph together with its entry node.
#[derive(Debug, Clone)]
pub struct RootedGraph {
    pub graph: DagGraph,
    pub root: NodeId,
}

impl RootedGraph {
    pub fn new(graph: DagGraph, root: NodeId) -> Self {
        Self { graph, root }
    }
}
