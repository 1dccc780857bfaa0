//! Eager inclusion pass: classify every reachable node before any mutation.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::NodeIndex;
use rayon::prelude::*;
use tracing::debug;

use sylva_core::config::FilterConfig;
use sylva_core::errors::GraphResult;
use sylva_core::models::{Inclusion, NodeId};
use sylva_core::traits::{checkpoint, Cancellable};

use crate::closure::analyse;
use crate::graph::{DagGraph, NodeRef};
use crate::traversal::Walk;

/// Inclusion kind per node id, plus the explicit ids it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionMap {
    explicit_ids: HashSet<NodeId>,
    kinds: HashMap<NodeId, Inclusion>,
}

impl InclusionMap {
    /// Build from a precomputed included set. Ids in neither set are excluded.
    pub fn from_sets(included: &HashSet<NodeId>, explicit: &HashSet<NodeId>) -> Self {
        let kinds = included
            .union(explicit)
            .map(|&id| {
                let kind = Inclusion::classify(explicit.contains(&id), true);
                (id, kind)
            })
            .collect();
        Self {
            explicit_ids: explicit.clone(),
            kinds,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<Inclusion> {
        self.kinds.get(&id).copied()
    }

    /// Kind of `id`, treating unknown ids as excluded.
    pub fn kind(&self, id: NodeId) -> Inclusion {
        self.get(id).unwrap_or(Inclusion::Excluded)
    }

    pub fn is_included(&self, id: NodeId) -> bool {
        self.kind(id).is_included()
    }

    pub fn explicit_ids(&self) -> &HashSet<NodeId> {
        &self.explicit_ids
    }

    pub fn included_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.kinds
            .iter()
            .filter(|(_, kind)| kind.is_included())
            .map(|(&id, _)| id)
    }

    pub fn count(&self, kind: Inclusion) -> usize {
        self.kinds.values().filter(|&&k| k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Classify one node by walking its ancestors and descendants.
pub(crate) fn classify_node(
    graph: &DagGraph,
    idx: NodeIndex,
    explicit: &HashSet<NodeId>,
) -> Inclusion {
    let Some(id) = graph.id_of(idx) else {
        return Inclusion::Excluded;
    };
    if explicit.contains(&id) {
        return Inclusion::Explicit;
    }
    let listed = |n: NodeRef<'_>| explicit.contains(&n.id());
    let connected = Walk::ancestors(graph, idx, listed).dedup().next().is_some()
        || Walk::descendants(graph, idx, listed).dedup().next().is_some();
    Inclusion::classify(false, connected)
}

/// Classify every node reachable from `root` with per-node walks.
///
/// The walks fan out over the rayon pool when `config` allows it for the size
/// of the reachable set. `cancel` is polled once per node.
pub fn by_traversal(
    graph: &DagGraph,
    root: NodeId,
    explicit: HashSet<NodeId>,
    config: &FilterConfig,
    cancel: Option<&dyn Cancellable>,
) -> GraphResult<InclusionMap> {
    let root_idx = graph.require(root)?;
    let reachable = graph.reachable_indices(root_idx);
    let parallel = config.use_parallel(reachable.len());

    let classify = |&idx: &NodeIndex| {
        let id = graph.id_of(idx)?;
        Some(checkpoint(cancel).map(|()| (id, classify_node(graph, idx, &explicit))))
    };
    let kinds: HashMap<NodeId, Inclusion> = if parallel {
        reachable
            .par_iter()
            .filter_map(classify)
            .collect::<GraphResult<_>>()?
    } else {
        reachable
            .iter()
            .filter_map(classify)
            .collect::<GraphResult<_>>()?
    };

    debug!(root, reachable = reachable.len(), parallel, "traversal inclusion pass");
    Ok(InclusionMap {
        explicit_ids: explicit,
        kinds,
    })
}

/// Classify every node reachable from `root` from its closure sets.
pub fn by_closure(
    graph: &DagGraph,
    root: NodeId,
    explicit: HashSet<NodeId>,
) -> GraphResult<InclusionMap> {
    let closures = analyse(graph, root)?;
    let kinds: HashMap<NodeId, Inclusion> = closures
        .node_ids()
        .map(|id| (id, closures.inclusion(id, &explicit)))
        .collect();

    debug!(root, reachable = kinds.len(), "closure inclusion pass");
    Ok(InclusionMap {
        explicit_ids: explicit,
        kinds,
    })
}
