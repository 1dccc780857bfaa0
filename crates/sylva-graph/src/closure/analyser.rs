//! Single-pass closure computation with a route stack.

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use tracing::{debug, instrument};

use sylva_core::errors::GraphResult;
use sylva_core::models::NodeId;

use super::NodeClosures;
use crate::graph::DagGraph;

/// Compute ancestor and descendant closures for every node reachable from `root`.
///
/// Depth-first with an explicit stack. A second "route" stack mirrors the chain
/// from the root to the current node: on each visit it is popped until its top
/// is a parent of the current node. A node reached again with nothing new on
/// its route is not expanded a second time, since its subtree already carries
/// every id on that route.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn analyse(graph: &DagGraph, root: NodeId) -> GraphResult<NodeClosures> {
    let root_idx = graph.require(root)?;
    let mut closures = NodeClosures::default();

    let mut stack: Vec<NodeIndex> = vec![root_idx];
    let mut route: Vec<(NodeIndex, NodeId)> = Vec::new();

    while let Some(current) = stack.pop() {
        let Some(current_id) = graph.id_of(current) else {
            continue;
        };

        while let Some(&(top, _)) = route.last() {
            if graph.has_edge(top, current) {
                break;
            }
            route.pop();
        }
        route.push((current, current_id));

        let covered = closures
            .ancestor_closures
            .get(&current_id)
            .is_some_and(|known| route.iter().all(|(_, id)| known.contains(id)));
        if covered {
            continue;
        }

        let ancestors = closures.ancestor_closures.entry(current_id).or_default();
        ancestors.extend(route.iter().map(|&(_, id)| id));
        for &(_, route_id) in &route {
            closures
                .descendant_closures
                .entry(route_id)
                .or_default()
                .insert(current_id);
        }

        graph.push_neighbors(&mut stack, current, Direction::Outgoing);
    }

    debug!(root, analysed = closures.len(), "closure analysis complete");
    Ok(closures)
}
