//! Plain data shared by the graph engine and its callers.

mod inclusion;

pub use inclusion::Inclusion;

/// Integer node identifier. Unique within one graph instance.
pub type NodeId = i64;
