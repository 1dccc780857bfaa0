use serde::{Deserialize, Serialize};

/// Why a node survives (or does not survive) a filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// The node's id was in the caller's include-set.
    Explicit,
    /// Retained only as an ancestor or descendant of an explicit node.
    Implicit,
    /// Not connected to any explicit node; pruned.
    Excluded,
}

impl Inclusion {
    /// Whether the node survives filtering.
    pub fn is_included(self) -> bool {
        !matches!(self, Self::Excluded)
    }

    pub fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit)
    }

    pub fn is_implicit(self) -> bool {
        matches!(self, Self::Implicit)
    }

    /// Classify a node from its explicit flag and whether it connects to a listed node.
    pub fn classify(explicit: bool, connected: bool) -> Self {
        if explicit {
            Self::Explicit
        } else if connected {
            Self::Implicit
        } else {
            Self::Excluded
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Implicit => "implicit",
            Self::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for Inclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_wins_over_connection() {
        assert_eq!(Inclusion::classify(true, false), Inclusion::Explicit);
        assert_eq!(Inclusion::classify(true, true), Inclusion::Explicit);
        assert_eq!(Inclusion::classify(false, true), Inclusion::Implicit);
        assert_eq!(Inclusion::classify(false, false), Inclusion::Excluded);
    }

    #[test]
    fn only_excluded_is_dropped() {
        assert!(Inclusion::Explicit.is_included());
        assert!(Inclusion::Implicit.is_included());
        assert!(!Inclusion::Excluded.is_included());
    }
}
