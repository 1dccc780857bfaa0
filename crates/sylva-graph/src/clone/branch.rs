//! Single-node and whole-branch clones.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;

use sylva_core::errors::{GraphError, GraphResult};
use sylva_core::models::NodeId;

use super::RootedGraph;
use crate::graph::DagGraph;

/// A fresh graph holding a parentless, childless copy of `id`.
pub fn clone_node(source: &DagGraph, id: NodeId) -> GraphResult<RootedGraph> {
    source.require(id)?;
    Ok(RootedGraph::new(DagGraph::with_root(id), id))
}

/// A fresh graph holding `id` and its whole descendant sub-DAG.
pub fn clone_branch(source: &DagGraph, id: NodeId) -> GraphResult<RootedGraph> {
    let template = source.require(id)?;
    let mut target = DagGraph::new();
    copy_branch_into(source, template, &mut target)?;
    Ok(RootedGraph::new(target, id))
}

/// Copy the branch under `template` into `target`, reusing ids already there.
///
/// Returns the index of the branch top in `target`.
pub(crate) fn copy_branch_into(
    source: &DagGraph,
    template: NodeIndex,
    target: &mut DagGraph,
) -> GraphResult<NodeIndex> {
    let template_id = source
        .id_of(template)
        .ok_or_else(|| GraphError::inconsistent("branch template vanished from source"))?;
    let top = target.ensure_node(template_id);

    let mut stack: Vec<(NodeIndex, NodeIndex)> = vec![(template, top)];
    let mut expanded: HashSet<NodeIndex> = HashSet::new();
    while let Some((template_parent, copy_parent)) = stack.pop() {
        if !expanded.insert(template_parent) {
            continue;
        }
        for template_child in source.child_indices(template_parent) {
            let Some(child_id) = source.id_of(template_child) else {
                continue;
            };
            let copy = target.ensure_node(child_id);
            target.link_indices(copy_parent, copy);
            stack.push((template_child, copy));
        }
    }
    Ok(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> {1, 2}, 1 -> 3, 2 -> 3, 3 -> 4
    fn diamond_with_tail() -> DagGraph {
        let mut graph = DagGraph::with_root(0);
        graph.add_child(0, 1).unwrap();
        graph.add_child(0, 2).unwrap();
        graph.add_child(1, 3).unwrap();
        graph.link(2, 3).unwrap();
        graph.add_child(3, 4).unwrap();
        graph
    }

    #[test]
    fn clone_node_copies_only_the_id() {
        let source = diamond_with_tail();
        let clone = clone_node(&source, 3).unwrap();
        assert_eq!(clone.root, 3);
        assert_eq!(clone.graph.node_count(), 1);
        assert!(clone.graph.is_root(3).unwrap());
        assert!(clone.graph.children(3).unwrap().is_empty());
    }

    #[test]
    fn clone_branch_keeps_shared_descendants_single() {
        let source = diamond_with_tail();
        let clone = clone_branch(&source, 0).unwrap();
        assert_eq!(clone.graph.snapshot(), source.snapshot());
    }

    #[test]
    fn clone_branch_is_parentless() {
        let source = diamond_with_tail();
        let clone = clone_branch(&source, 2).unwrap();
        assert!(clone.graph.is_root(2).unwrap());
        assert_eq!(clone.graph.children(2).unwrap(), vec![3]);
        assert_eq!(clone.graph.children(3).unwrap(), vec![4]);
        assert_eq!(clone.graph.node_count(), 3);
    }

    #[test]
    fn missing_template_is_an_error() {
        let source = diamond_with_tail();
        assert_eq!(clone_node(&source, 9).unwrap_err(), GraphError::NodeNotFound(9));
        assert!(clone_branch(&source, 9).is_err());
    }
}
