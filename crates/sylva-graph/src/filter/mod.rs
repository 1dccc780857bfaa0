//! Inclusion filter: keep explicitly listed nodes plus everything above and
//! below them, delete the rest.

pub mod inclusion;
pub mod pruning;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use sylva_core::config::{FilterConfig, InclusionStrategy};
use sylva_core::errors::GraphResult;
use sylva_core::models::NodeId;
use sylva_core::traits::{checkpoint, Cancellable};

use crate::graph::DagGraph;

pub use inclusion::InclusionMap;
pub use pruning::prune;

/// Summary of one filter run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutcome {
    /// The root if it survived.
    pub root: Option<NodeId>,
    /// Nodes retained as explicit or implicit.
    pub kept: usize,
    /// Nodes deleted from the graph.
    pub removed: usize,
    /// Edges cut to parents that were not included.
    pub severed_edges: usize,
}

/// The filter engine wraps inclusion and pruning under one configuration.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    pub config: FilterConfig,
}

impl FilterEngine {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Classify every node reachable from `root` using the configured strategy.
    pub fn inclusion_map(
        &self,
        graph: &DagGraph,
        root: NodeId,
        included_ids: &[NodeId],
    ) -> GraphResult<InclusionMap> {
        self.classify(graph, root, included_ids, None)
    }

    fn classify(
        &self,
        graph: &DagGraph,
        root: NodeId,
        included_ids: &[NodeId],
        cancel: Option<&dyn Cancellable>,
    ) -> GraphResult<InclusionMap> {
        let explicit: HashSet<NodeId> = included_ids.iter().copied().collect();
        match self.config.strategy {
            InclusionStrategy::Traversal => {
                inclusion::by_traversal(graph, root, explicit, &self.config, cancel)
            }
            InclusionStrategy::Closure => {
                let inclusions = inclusion::by_closure(graph, root, explicit)?;
                checkpoint(cancel)?;
                Ok(inclusions)
            }
        }
    }

    /// Filter in place. Returns the root if it survives.
    pub fn filter(
        &self,
        graph: &mut DagGraph,
        root: NodeId,
        included_ids: &[NodeId],
    ) -> GraphResult<Option<NodeId>> {
        Ok(self.filter_with_outcome(graph, root, included_ids, None)?.root)
    }

    /// Filter in place, reporting counts.
    ///
    /// `cancel` is polled between nodes until the first mutation. On
    /// `Cancelled` the graph is untouched.
    #[instrument(
        skip(self, graph, included_ids, cancel),
        fields(strategy = self.config.strategy.as_str())
    )]
    pub fn filter_with_outcome(
        &self,
        graph: &mut DagGraph,
        root: NodeId,
        included_ids: &[NodeId],
        cancel: Option<&dyn Cancellable>,
    ) -> GraphResult<FilterOutcome> {
        let inclusions = self.classify(graph, root, included_ids, cancel)?;
        let outcome = prune(graph, root, &inclusions, cancel)?;
        info!(
            root,
            listed = included_ids.len(),
            kept = outcome.kept,
            removed = outcome.removed,
            severed = outcome.severed_edges,
            survived = outcome.root.is_some(),
            "filter complete"
        );
        Ok(outcome)
    }
}

/// Filter with the default configuration.
pub fn filter(
    graph: &mut DagGraph,
    root: NodeId,
    included_ids: &[NodeId],
) -> GraphResult<Option<NodeId>> {
    FilterEngine::default().filter(graph, root, included_ids)
}
