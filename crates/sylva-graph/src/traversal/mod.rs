//! Traversal primitives: predicate-filtered ancestor and descendant walks.
//!
//! Every walk includes its start node. A missing start node is an error; a
//! search that finds nothing is `None` / `false`.

pub mod walk;

use sylva_core::errors::GraphResult;
use sylva_core::models::NodeId;

use crate::graph::{DagGraph, NodeRef};

pub use walk::Walk;

/// Lazily yield every node at or below `start` matching `predicate`.
pub fn descendants_where<'g, P>(
    graph: &'g DagGraph,
    start: NodeId,
    predicate: P,
) -> GraphResult<Walk<'g, P>>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    let idx = graph.require(start)?;
    Ok(Walk::descendants(graph, idx, predicate))
}

/// Lazily yield every node at or above `start` matching `predicate`.
pub fn ancestors_where<'g, P>(
    graph: &'g DagGraph,
    start: NodeId,
    predicate: P,
) -> GraphResult<Walk<'g, P>>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    let idx = graph.require(start)?;
    Ok(Walk::ancestors(graph, idx, predicate))
}

/// First match in descendant walk order.
pub fn first_or_default_descendant<'g, P>(
    graph: &'g DagGraph,
    start: NodeId,
    predicate: P,
) -> GraphResult<Option<NodeRef<'g>>>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    Ok(descendants_where(graph, start, predicate)?.dedup().next())
}

/// First match in ancestor walk order.
pub fn first_or_default_ancestor<'g, P>(
    graph: &'g DagGraph,
    start: NodeId,
    predicate: P,
) -> GraphResult<Option<NodeRef<'g>>>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    Ok(ancestors_where(graph, start, predicate)?.dedup().next())
}

pub fn any_descendant<'g, P>(graph: &'g DagGraph, start: NodeId, predicate: P) -> GraphResult<bool>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    Ok(first_or_default_descendant(graph, start, predicate)?.is_some())
}

pub fn any_ancestor<'g, P>(graph: &'g DagGraph, start: NodeId, predicate: P) -> GraphResult<bool>
where
    P: FnMut(NodeRef<'g>) -> bool,
{
    Ok(first_or_default_ancestor(graph, start, predicate)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_core::errors::GraphError;

    // 0 -> {1, 2}, 1 -> 3, 2 -> 3
    fn diamond() -> DagGraph {
        let mut graph = DagGraph::with_root(0);
        graph.add_child(0, 1).unwrap();
        graph.add_child(0, 2).unwrap();
        graph.add_child(1, 3).unwrap();
        graph.link(2, 3).unwrap();
        graph
    }

    #[test]
    fn descendant_walk_pops_last_child_first() {
        let graph = diamond();
        let order: Vec<NodeId> = descendants_where(&graph, 0, |_| true)
            .unwrap()
            .map(|n| n.id())
            .collect();
        // 3 is reached through both parents.
        assert_eq!(order, vec![0, 2, 3, 1, 3]);
    }

    #[test]
    fn ancestor_walk_includes_start() {
        let graph = diamond();
        let order: Vec<NodeId> = ancestors_where(&graph, 3, |_| true)
            .unwrap()
            .map(|n| n.id())
            .collect();
        assert_eq!(order, vec![3, 2, 0, 1, 0]);
    }

    #[test]
    fn first_match_respects_walk_order() {
        let graph = diamond();
        let found = first_or_default_descendant(&graph, 0, |n| n.id() != 0).unwrap();
        assert_eq!(found.map(|n| n.id()), Some(2));
        let none = first_or_default_ancestor(&graph, 1, |n| n.id() == 2).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn any_variants() {
        let graph = diamond();
        assert!(any_ancestor(&graph, 3, |n| n.is_root()).unwrap());
        assert!(any_descendant(&graph, 1, |n| n.id() == 3).unwrap());
        assert!(!any_descendant(&graph, 1, |n| n.id() == 2).unwrap());
    }

    #[test]
    fn walks_are_restartable() {
        let graph = diamond();
        let first: Vec<NodeId> = descendants_where(&graph, 1, |_| true)
            .unwrap()
            .map(|n| n.id())
            .collect();
        let second: Vec<NodeId> = descendants_where(&graph, 1, |_| true)
            .unwrap()
            .map(|n| n.id())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn dedup_walk_yields_each_node_once() {
        let graph = diamond();
        let idx = graph.require(0).unwrap();
        let order: Vec<NodeId> = Walk::descendants(&graph, idx, |_| true)
            .dedup()
            .map(|n| n.id())
            .collect();
        assert_eq!(order, vec![0, 2, 3, 1]);
    }

    #[test]
    fn failed_search_over_many_paths_terminates() {
        // 40 layers of two nodes, fully linked between neighbouring layers.
        let mut graph = DagGraph::with_root(0);
        let mut previous = vec![0];
        for layer in 0..40 {
            let current = vec![2 * layer + 1, 2 * layer + 2];
            for &child in &current {
                graph.add_node(child).unwrap();
                for &parent in &previous {
                    graph.link(parent, child).unwrap();
                }
            }
            previous = current;
        }
        assert!(!any_descendant(&graph, 0, |n| n.id() == 1000).unwrap());
        assert!(!any_ancestor(&graph, 80, |n| n.id() == 1000).unwrap());
        let root = first_or_default_ancestor(&graph, 80, |n| n.is_root()).unwrap();
        assert_eq!(root.map(|n| n.id()), Some(0));
    }

    #[test]
    fn missing_start_is_an_error() {
        let graph = diamond();
        assert_eq!(
            any_descendant(&graph, 7, |_| true).unwrap_err(),
            GraphError::NodeNotFound(7)
        );
        assert!(descendants_where(&graph, 7, |_| true).is_err());
    }
}
