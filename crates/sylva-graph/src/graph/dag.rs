//! petgraph::StableGraph wrapper with id-indexed nodes and parent→child edges.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::Bfs;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use sylva_core::errors::{GraphError, GraphResult};
use sylva_core::models::{Inclusion, NodeId};

/// A vertex: an id plus the filter's inclusion flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    #[serde(default)]
    pub explicitly_included: bool,
    #[serde(default)]
    pub implicitly_included: bool,
}

impl GraphNode {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            explicitly_included: false,
            implicitly_included: false,
        }
    }
}

/// The underlying directed graph type. Edges point from parent to child.
pub type DagStableGraph = StableGraph<GraphNode, (), Directed>;

/// Arena of nodes keyed by id.
///
/// Every parent/child relation is a single edge, so a node's parent list and
/// its parent's child list can never disagree.
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    graph: DagStableGraph,
    node_index: HashMap<NodeId, NodeIndex>,
}

/// Borrowed view of one node, handed to traversal predicates.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g DagGraph,
    index: NodeIndex,
    node: &'g GraphNode,
}

impl<'g> NodeRef<'g> {
    pub fn id(&self) -> NodeId {
        self.node.id
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn is_explicitly_included(&self) -> bool {
        self.node.explicitly_included
    }

    pub fn is_implicitly_included(&self) -> bool {
        self.node.implicitly_included
    }

    /// A node with no parents is a root.
    pub fn is_root(&self) -> bool {
        self.parent_count() == 0
    }

    pub fn parent_count(&self) -> usize {
        self.graph
            .graph
            .neighbors_directed(self.index, Direction::Incoming)
            .count()
    }

    pub fn child_count(&self) -> usize {
        self.graph
            .graph
            .neighbors_directed(self.index, Direction::Outgoing)
            .count()
    }

    /// Parent ids in insertion order.
    pub fn parents(&self) -> Vec<NodeId> {
        self.graph.ids_of(self.graph.parent_indices(self.index))
    }

    /// Child ids in insertion order.
    pub fn children(&self) -> Vec<NodeId> {
        self.graph.ids_of(self.graph.child_indices(self.index))
    }
}

impl DagGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph holding a single parentless node.
    pub fn with_root(id: NodeId) -> Self {
        let mut graph = Self::new();
        graph.ensure_node(id);
        graph
    }

    /// Insert a detached node.
    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.node_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.ensure_node(id);
        Ok(())
    }

    /// Create `child` and link it under `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> GraphResult<()> {
        let parent_idx = self.require(parent)?;
        if self.node_index.contains_key(&child) {
            return Err(GraphError::DuplicateNode(child));
        }
        let child_idx = self.ensure_node(child);
        self.link_indices(parent_idx, child_idx);
        Ok(())
    }

    /// Add a parent→child edge between two existing nodes. Linking twice is a no-op.
    pub fn link(&mut self, parent: NodeId, child: NodeId) -> GraphResult<()> {
        let parent_idx = self.require(parent)?;
        let child_idx = self.require(child)?;
        self.link_indices(parent_idx, child_idx);
        Ok(())
    }

    /// Remove the parent→child edge. Returns whether it existed.
    pub fn unlink(&mut self, parent: NodeId, child: NodeId) -> bool {
        match (self.index_of(parent), self.index_of(child)) {
            (Some(p), Some(c)) => self.unlink_indices(p, c),
            _ => false,
        }
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        match self.node_index.remove(&id) {
            Some(idx) => self.graph.remove_node(idx).is_some(),
            None => false,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_index.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.index_of(id).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.index_of(id).and_then(|idx| self.node_ref(idx))
    }

    /// Parent ids of `id` in insertion order.
    pub fn parents(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let idx = self.require(id)?;
        Ok(self.ids_of(self.parent_indices(idx)))
    }

    /// Child ids of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let idx = self.require(id)?;
        Ok(self.ids_of(self.child_indices(idx)))
    }

    pub fn is_root(&self, id: NodeId) -> GraphResult<bool> {
        let idx = self.require(id)?;
        Ok(self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .is_none())
    }

    /// Ids of every node in the arena, in no particular order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_index.keys().copied()
    }

    /// Every edge as `(parent, child)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph.edge_indices().filter_map(move |edge| {
            let (source, target) = self.graph.edge_endpoints(edge)?;
            Some((self.id_of(source)?, self.id_of(target)?))
        })
    }

    pub fn set_explicitly_included(&mut self, id: NodeId, value: bool) -> GraphResult<()> {
        let idx = self.require(id)?;
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.explicitly_included = value;
        }
        Ok(())
    }

    pub fn set_implicitly_included(&mut self, id: NodeId, value: bool) -> GraphResult<()> {
        let idx = self.require(id)?;
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.implicitly_included = value;
        }
        Ok(())
    }

    /// Ids of every node reachable from `id` through children, including `id`.
    pub fn reachable_from(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let idx = self.require(id)?;
        Ok(self.ids_of(self.reachable_indices(idx)))
    }

    // --- Index-level helpers for the engine modules ---

    pub(crate) fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    pub(crate) fn require(&self, id: NodeId) -> GraphResult<NodeIndex> {
        self.index_of(id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(crate) fn id_of(&self, idx: NodeIndex) -> Option<NodeId> {
        self.graph.node_weight(idx).map(|n| n.id)
    }

    pub(crate) fn node_ref(&self, idx: NodeIndex) -> Option<NodeRef<'_>> {
        self.graph.node_weight(idx).map(|node| NodeRef {
            graph: self,
            index: idx,
            node,
        })
    }

    /// Get or create the node with `id`.
    pub(crate) fn ensure_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode::new(id));
        self.node_index.insert(id, idx);
        idx
    }

    pub(crate) fn link_indices(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.graph.update_edge(parent, child, ());
    }

    pub(crate) fn unlink_indices(&mut self, parent: NodeIndex, child: NodeIndex) -> bool {
        match self.graph.find_edge(parent, child) {
            Some(edge) => self.graph.remove_edge(edge).is_some(),
            None => false,
        }
    }

    pub(crate) fn has_edge(&self, parent: NodeIndex, child: NodeIndex) -> bool {
        self.graph.contains_edge(parent, child)
    }

    /// Sever a node from all parents and children and drop it from the arena.
    pub(crate) fn remove_index(&mut self, idx: NodeIndex) -> bool {
        match self.graph.remove_node(idx) {
            Some(node) => {
                self.node_index.remove(&node.id);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_inclusion_at(&mut self, idx: NodeIndex, inclusion: Inclusion) {
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.explicitly_included = inclusion.is_explicit();
            node.implicitly_included = inclusion.is_implicit();
        }
    }

    pub(crate) fn parent_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_neighbors(idx, Direction::Incoming)
    }

    pub(crate) fn child_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_neighbors(idx, Direction::Outgoing)
    }

    /// Push the neighbors of `idx` so that the first-inserted one is popped last.
    pub(crate) fn push_neighbors(
        &self,
        stack: &mut Vec<NodeIndex>,
        idx: NodeIndex,
        direction: Direction,
    ) {
        let start = stack.len();
        // petgraph lists the most recently added edge first.
        stack.extend(self.graph.neighbors_directed(idx, direction));
        stack[start..].reverse();
    }

    pub(crate) fn reachable_indices(&self, start: NodeIndex) -> Vec<NodeIndex> {
        let mut bfs = Bfs::new(&self.graph, start);
        let mut out = Vec::new();
        while let Some(idx) = bfs.next(&self.graph) {
            out.push(idx);
        }
        out
    }

    fn ordered_neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        out.reverse();
        out
    }

    fn ids_of(&self, indices: Vec<NodeIndex>) -> Vec<NodeId> {
        indices.into_iter().filter_map(|idx| self.id_of(idx)).collect()
    }
}
