use serde::{Deserialize, Serialize};

use super::defaults;

/// How the filter decides which nodes are included before pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionStrategy {
    /// Per-node ancestor/descendant search over the live graph.
    #[default]
    Traversal,
    /// One closure analysis of the whole graph, then set lookups.
    Closure,
}

impl InclusionStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Traversal => "traversal",
            Self::Closure => "closure",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "traversal" => Some(Self::Traversal),
            "closure" => Some(Self::Closure),
            _ => None,
        }
    }
}

/// Inclusion filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Strategy used to compute the inclusion map.
    pub strategy: InclusionStrategy,
    /// Fan the traversal strategy's per-node walks out over rayon.
    pub parallel_inclusion: bool,
    /// Minimum reachable node count before the parallel pass kicks in.
    pub parallel_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            strategy: InclusionStrategy::default(),
            parallel_inclusion: defaults::DEFAULT_PARALLEL_INCLUSION,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl FilterConfig {
    /// Whether a graph with `reachable` nodes should use the parallel pass.
    pub fn use_parallel(&self, reachable: usize) -> bool {
        self.parallel_inclusion
            && self.strategy == InclusionStrategy::Traversal
            && reachable >= self.parallel_threshold
    }
}
