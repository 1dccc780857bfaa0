//! Ancestor/descendant closures for every node reachable from a root.

pub mod analyser;

use std::collections::{HashMap, HashSet};

use sylva_core::models::{Inclusion, NodeId};

pub use analyser::analyse;

/// Reflexive closure sets: every node is its own ancestor and descendant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeClosures {
    pub(crate) ancestor_closures: HashMap<NodeId, HashSet<NodeId>>,
    pub(crate) descendant_closures: HashMap<NodeId, HashSet<NodeId>>,
}

impl NodeClosures {
    pub fn ancestors(&self, id: NodeId) -> Option<&HashSet<NodeId>> {
        self.ancestor_closures.get(&id)
    }

    pub fn descendants(&self, id: NodeId) -> Option<&HashSet<NodeId>> {
        self.descendant_closures.get(&id)
    }

    pub fn ancestor_closures(&self) -> &HashMap<NodeId, HashSet<NodeId>> {
        &self.ancestor_closures
    }

    pub fn descendant_closures(&self) -> &HashMap<NodeId, HashSet<NodeId>> {
        &self.descendant_closures
    }

    /// Number of analysed nodes.
    pub fn len(&self) -> usize {
        self.ancestor_closures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ancestor_closures.is_empty()
    }

    /// Ids of every analysed node.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ancestor_closures.keys().copied()
    }

    /// Whether `ancestor` is `id` or lies above it.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).is_some_and(|set| set.contains(&ancestor))
    }

    /// Inclusion kind of `id` for a set of explicitly listed ids.
    ///
    /// Ids outside the analysed region are `Excluded`.
    pub fn inclusion(&self, id: NodeId, explicit: &HashSet<NodeId>) -> Inclusion {
        let Some(ancestors) = self.ancestors(id) else {
            return Inclusion::Excluded;
        };
        if explicit.contains(&id) {
            return Inclusion::Explicit;
        }
        let connected = !ancestors.is_disjoint(explicit)
            || self
                .descendants(id)
                .is_some_and(|set| !set.is_disjoint(explicit));
        Inclusion::classify(false, connected)
    }
}
