//! Rebuild a template's ancestry above a clone.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use tracing::trace;

use sylva_core::errors::{GraphError, GraphResult};
use sylva_core::models::NodeId;

use crate::graph::DagGraph;
use crate::traversal::Walk;

/// Mirror every ancestor chain of `template` (in `source`) above `clone` (in `target`).
///
/// With a merge root, each template parent is first looked up below it in
/// `target` and reused when found. Otherwise the node with that id is reused if
/// `target` already holds one, or created. Returns the top-most ancestor of
/// `clone`, suitable as the next merge root.
pub fn clone_ancestors(
    source: &DagGraph,
    template: NodeId,
    target: &mut DagGraph,
    clone: NodeId,
    merge_root: Option<NodeId>,
) -> GraphResult<NodeId> {
    let template_idx = source.require(template)?;
    let clone_idx = target.require(clone)?;
    let merge_idx = merge_root.map(|id| target.require(id)).transpose()?;

    let mut stack: Vec<(NodeIndex, NodeIndex)> = vec![(template_idx, clone_idx)];
    let mut expanded: HashSet<NodeIndex> = HashSet::new();
    while let Some((template_child, clone_child)) = stack.pop() {
        if !expanded.insert(template_child) {
            continue;
        }
        for template_parent in source.parent_indices(template_child) {
            let Some(parent_id) = source.id_of(template_parent) else {
                continue;
            };
            let existing = merge_idx.and_then(|m| find_below(target, m, parent_id));
            let clone_parent = match existing {
                Some(idx) => idx,
                None => target.ensure_node(parent_id),
            };
            trace!(parent = parent_id, merged = existing.is_some(), "linking ancestor");
            target.link_indices(clone_parent, clone_child);
            stack.push((template_parent, clone_parent));
        }
    }

    Walk::ancestors(target, clone_idx, |n| n.is_root())
        .dedup()
        .next()
        .map(|n| n.id())
        .ok_or_else(|| GraphError::inconsistent(format!("no root above clone {clone}")))
}

fn find_below(target: &DagGraph, merge_root: NodeIndex, id: NodeId) -> Option<NodeIndex> {
    Walk::descendants(target, merge_root, |n| n.id() == id)
        .dedup()
        .next()
        .map(|n| n.index())
}
