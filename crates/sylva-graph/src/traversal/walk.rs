//! Lazy depth-first walk over children or parents.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use crate::graph::{DagGraph, NodeRef};

/// Depth-first iterator yielding every visited node that matches a predicate.
///
/// Uses an explicit LIFO stack. Neighbors are pushed in insertion order, so the
/// most recently added child is visited first. Nodes reachable through several
/// paths are yielded once per path unless the walk was built with
/// [`Walk::dedup`].
pub struct Walk<'g, P> {
    graph: &'g DagGraph,
    stack: Vec<NodeIndex>,
    direction: Direction,
    predicate: P,
    visited: Option<HashSet<NodeIndex>>,
}

impl<'g, P> Walk<'g, P>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    pub(crate) fn new(
        graph: &'g DagGraph,
        start: NodeIndex,
        direction: Direction,
        predicate: P,
    ) -> Self {
        Self {
            graph,
            stack: vec![start],
            direction,
            predicate,
            visited: None,
        }
    }

    /// Visit each node at most once. A subtree is finished before any later
    /// path reaches it again, so the first match is the same as without dedup.
    pub(crate) fn dedup(mut self) -> Self {
        self.visited = Some(HashSet::new());
        self
    }

    /// Walk toward the leaves.
    pub(crate) fn descendants(graph: &'g DagGraph, start: NodeIndex, predicate: P) -> Self {
        Self::new(graph, start, Direction::Outgoing, predicate)
    }

    /// Walk toward the roots.
    pub(crate) fn ancestors(graph: &'g DagGraph, start: NodeIndex, predicate: P) -> Self {
        Self::new(graph, start, Direction::Incoming, predicate)
    }
}

impl<'g, P> Iterator for Walk<'g, P>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    type Item = NodeRef<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(visited) = self.visited.as_mut() {
                if !visited.insert(current) {
                    continue;
                }
            }
            let Some(node) = self.graph.node_ref(current) else {
                continue;
            };
            self.graph
                .push_neighbors(&mut self.stack, current, self.direction);
            if (self.predicate)(node) {
                return Some(node);
            }
        }
        None
    }
}
