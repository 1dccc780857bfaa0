//! Breadth-first deletion of excluded nodes followed by dangling-parent repair.

use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use tracing::{debug, trace};

use sylva_core::errors::GraphResult;
use sylva_core::models::{Inclusion, NodeId};
use sylva_core::traits::{checkpoint, Cancellable};

use super::inclusion::{classify_node, InclusionMap};
use super::FilterOutcome;
use crate::graph::DagGraph;

/// Remove every node under `root` that `inclusions` marks excluded.
///
/// Included nodes get their flags set. Excluded nodes are dropped from the
/// arena with all their edges, and so is anything left stranded beneath them.
/// Survivors are then checked bottom-up: a node with several parents loses the
/// edge to any parent that is not included. Parents missing from the map are
/// classified against its explicit ids.
///
/// All decisions are made on the untouched graph and `cancel` is only polled
/// while deciding. A `Cancelled` error leaves the graph unchanged.
pub fn prune(
    graph: &mut DagGraph,
    root: NodeId,
    inclusions: &InclusionMap,
    cancel: Option<&dyn Cancellable>,
) -> GraphResult<FilterOutcome> {
    let root_idx = graph.require(root)?;
    let plan = plan(graph, root_idx, inclusions, cancel)?;

    let mut outcome = FilterOutcome {
        kept: plan.keep.len(),
        ..FilterOutcome::default()
    };
    for &(idx, kind) in &plan.keep {
        graph.set_inclusion_at(idx, kind);
    }
    for &idx in &plan.remove {
        if graph.remove_index(idx) {
            outcome.removed += 1;
        }
    }
    for &(parent, child) in &plan.sever {
        if graph.unlink_indices(parent, child) {
            outcome.severed_edges += 1;
        }
    }

    outcome.root = graph.contains(root).then_some(root);
    debug!(
        root,
        kept = outcome.kept,
        removed = outcome.removed,
        severed = outcome.severed_edges,
        "prune complete"
    );
    Ok(outcome)
}

/// Mutations decided by [`plan`], applied in order: flag, remove, sever.
#[derive(Debug, Default)]
struct PrunePlan {
    keep: Vec<(NodeIndex, Inclusion)>,
    remove: Vec<NodeIndex>,
    sever: Vec<(NodeIndex, NodeIndex)>,
}

fn plan(
    graph: &DagGraph,
    root_idx: NodeIndex,
    inclusions: &InclusionMap,
    cancel: Option<&dyn Cancellable>,
) -> GraphResult<PrunePlan> {
    let reachable = graph.reachable_indices(root_idx);
    let mut plan = PrunePlan::default();

    // Excluded nodes are not expanded, so their subtrees stay unvisited.
    let mut queue: VecDeque<NodeIndex> = VecDeque::from([root_idx]);
    let mut visited: HashSet<NodeIndex> = HashSet::with_capacity(reachable.len());
    while let Some(current) = queue.pop_front() {
        checkpoint(cancel)?;
        if !visited.insert(current) {
            continue;
        }
        let Some(id) = graph.id_of(current) else {
            continue;
        };
        let kind = inclusions.kind(id);
        if kind.is_included() {
            plan.keep.push((current, kind));
            queue.extend(graph.child_indices(current));
        } else {
            trace!(id, "excluding node");
            plan.remove.push(current);
        }
    }

    // Excluded nodes only reachable through excluded ones.
    for idx in reachable {
        if visited.contains(&idx) {
            continue;
        }
        if graph.id_of(idx).is_some_and(|id| !inclusions.is_included(id)) {
            plan.remove.push(idx);
        }
    }

    let removed: HashSet<NodeIndex> = plan.remove.iter().copied().collect();
    for &(current, _) in plan.keep.iter().rev() {
        checkpoint(cancel)?;
        let parents: Vec<NodeIndex> = graph
            .parent_indices(current)
            .into_iter()
            .filter(|parent| !removed.contains(parent))
            .collect();
        if parents.len() <= 1 {
            continue;
        }
        for parent in parents {
            let kind = match graph.id_of(parent) {
                Some(parent_id) => inclusions
                    .get(parent_id)
                    .unwrap_or_else(|| classify_node(graph, parent, inclusions.explicit_ids())),
                None => Inclusion::Excluded,
            };
            if !kind.is_included() {
                plan.sever.push((parent, current));
            }
        }
    }
    Ok(plan)
}
