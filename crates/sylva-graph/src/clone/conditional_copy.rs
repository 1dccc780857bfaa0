//! Build a fresh graph holding selected branches joined by their ancestry.

use tracing::{debug, instrument};

use sylva_core::errors::GraphResult;
use sylva_core::models::{Inclusion, NodeId};

use super::ancestors::clone_ancestors;
use super::branch::copy_branch_into;
use super::RootedGraph;
use crate::graph::DagGraph;

/// Copy the branch under each node in `nodes`, in order, into one new graph.
///
/// Each branch top is marked explicit and its ancestors are folded in below the
/// root found so far. Ancestors shared between branches appear once and carry
/// no inclusion flags. Returns `None` for an empty selection.
#[instrument(skip(source, nodes), fields(selected = nodes.len()))]
pub fn conditionally_copy_tree(
    source: &DagGraph,
    nodes: &[NodeId],
) -> GraphResult<Option<RootedGraph>> {
    let mut target = DagGraph::new();
    let mut root: Option<NodeId> = None;

    for &id in nodes {
        let template = source.require(id)?;
        let copy = copy_branch_into(source, template, &mut target)?;
        target.set_inclusion_at(copy, Inclusion::Explicit);
        root = Some(clone_ancestors(source, id, &mut target, id, root)?);
    }

    debug!(
        root = ?root,
        nodes = target.node_count(),
        edges = target.edge_count(),
        "conditional copy complete"
    );
    Ok(root.map(|root| RootedGraph::new(target, root)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> {1, 2}, 1 -> 3, 2 -> {3, 4}
    fn sample() -> DagGraph {
        let mut graph = DagGraph::with_root(0);
        graph.add_child(0, 1).unwrap();
        graph.add_child(0, 2).unwrap();
        graph.add_child(1, 3).unwrap();
        graph.link(2, 3).unwrap();
        graph.add_child(2, 4).unwrap();
        graph
    }

    #[test]
    fn empty_selection_is_none() {
        assert!(conditionally_copy_tree(&sample(), &[]).unwrap().is_none());
    }

    #[test]
    fn single_leaf_pulls_in_its_whole_ancestry() {
        let copy = conditionally_copy_tree(&sample(), &[3]).unwrap().unwrap();
        assert_eq!(copy.root, 0);
        assert_eq!(copy.graph.node_count(), 4);
        assert!(copy.graph.node(3).unwrap().explicitly_included);
        assert!(!copy.graph.node(1).unwrap().explicitly_included);
        assert!(!copy.graph.node(0).unwrap().implicitly_included);
        assert!(!copy.graph.contains(4));
    }

    #[test]
    fn source_is_untouched() {
        let source = sample();
        let before = source.snapshot();
        let mut copy = conditionally_copy_tree(&source, &[1, 4]).unwrap().unwrap();
        copy.graph.remove_node(0);
        assert_eq!(source.snapshot(), before);
    }

    #[test]
    fn missing_node_is_an_error() {
        assert!(conditionally_copy_tree(&sample(), &[1, 99]).is_err());
    }
}
