//! Arena graph: nodes keyed by id, parent→child edges, snapshots.

pub mod dag;
pub mod snapshot;

pub use dag::{DagGraph, DagStableGraph, GraphNode, NodeRef};
pub use snapshot::GraphSnapshot;
