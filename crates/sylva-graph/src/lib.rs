//! # sylva-graph
//!
//! In-memory DAG (`petgraph`) keyed by node id. Predicate traversal, closure
//! analysis, inclusion filtering, and clone / conditional copy.

pub mod clone;
pub mod closure;
pub mod filter;
pub mod graph;
pub mod traversal;

pub use clone::{
    clone_ancestors, clone_branch, clone_node, conditionally_copy_tree, RootedGraph,
};
pub use closure::{analyse, NodeClosures};
pub use filter::{filter, prune, FilterEngine, FilterOutcome, InclusionMap};
pub use graph::{DagGraph, GraphNode, GraphSnapshot, NodeRef};
pub use traversal::{
    any_ancestor, any_descendant, ancestors_where, descendants_where,
    first_or_default_ancestor, first_or_default_descendant, Walk,
};
