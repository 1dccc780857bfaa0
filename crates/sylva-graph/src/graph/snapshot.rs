//! Serializable point-in-time view of a graph.

use serde::{Deserialize, Serialize};

use sylva_core::errors::{GraphError, GraphResult};
use sylva_core::models::NodeId;

use super::dag::{DagGraph, GraphNode};

/// Nodes sorted by id plus `(parent, child)` edges.
///
/// Edges are listed per parent in ascending id order, children in insertion order.
/// Rebuilding from a snapshot reproduces each node's child order only: parents
/// come back in ascending parent id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub root: Option<NodeId>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl GraphSnapshot {
    /// Sorted node ids.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// Edges sorted by `(parent, child)`, for order-insensitive comparison.
    pub fn sorted_edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = self.edges.clone();
        edges.sort_unstable();
        edges
    }
}

impl DagGraph {
    pub fn snapshot(&self) -> GraphSnapshot {
        let mut nodes: Vec<GraphNode> = self
            .node_ids()
            .filter_map(|id| self.node(id).cloned())
            .collect();
        nodes.sort_by_key(|n| n.id);

        let mut edges = Vec::with_capacity(self.edge_count());
        for node in &nodes {
            if let Ok(children) = self.children(node.id) {
                edges.extend(children.into_iter().map(|child| (node.id, child)));
            }
        }

        GraphSnapshot {
            root: None,
            nodes,
            edges,
        }
    }

    /// Snapshot tagged with the given root.
    pub fn snapshot_rooted(&self, root: NodeId) -> GraphSnapshot {
        GraphSnapshot {
            root: Some(root),
            ..self.snapshot()
        }
    }

    /// Rebuild a graph. Node flags are restored as stored.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> GraphResult<Self> {
        let mut graph = Self::new();
        for node in &snapshot.nodes {
            graph.add_node(node.id)?;
            graph.set_explicitly_included(node.id, node.explicitly_included)?;
            graph.set_implicitly_included(node.id, node.implicitly_included)?;
        }
        for &(parent, child) in &snapshot.edges {
            graph.link(parent, child)?;
        }
        if let Some(root) = snapshot.root {
            if !graph.contains(root) {
                return Err(GraphError::NodeNotFound(root));
            }
        }
        Ok(graph)
    }
}
