//! Graph builders and golden fixture loader shared by tests and benches.
//!
//! JSON fixtures live under `golden/` next to this crate's manifest.

use std::path::PathBuf;

use rand::Rng;
use serde::de::DeserializeOwned;
use sylva_core::models::NodeId;
use sylva_graph::{DagGraph, GraphSnapshot};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a graph snapshot fixture and rebuild it.
pub fn load_graph(relative_path: &str) -> DagGraph {
    let snapshot: GraphSnapshot = load_fixture(relative_path);
    DagGraph::from_snapshot(&snapshot)
        .unwrap_or_else(|e| panic!("Invalid graph fixture {relative_path}: {e}"))
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// The canonical 11-node example graph.
///
/// ```text
///                     0
///                   / | \
///                  1  2  3
///                 / \    |
///                4   5   6
///               /     \ / \
///              7       8   9
///                          |
///                          10
/// ```
pub fn build_example_graph() -> DagGraph {
    let mut graph = DagGraph::with_root(0);
    let edges: [(NodeId, NodeId); 8] = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 4),
        (1, 5),
        (3, 6),
        (4, 7),
        (5, 8),
    ];
    for (parent, child) in edges {
        graph
            .add_child(parent, child)
            .unwrap_or_else(|e| panic!("example graph: {e}"));
    }
    // 8 gets a second parent before 6 gets its own child.
    graph.link(6, 8).unwrap_or_else(|e| panic!("example graph: {e}"));
    for (parent, child) in [(6, 9), (9, 10)] {
        graph
            .add_child(parent, child)
            .unwrap_or_else(|e| panic!("example graph: {e}"));
    }
    graph
}

/// A generated graph and the next unused id.
pub struct LargeGraph {
    pub graph: DagGraph,
    pub root: NodeId,
    pub max_id: NodeId,
}

/// A level-by-level random tree rooted at 0.
///
/// Every node on a level gets between 1 and `max_siblings - 1` children.
/// Ids increase with depth.
pub fn build_large_graph<R: Rng>(depth: usize, max_siblings: usize, rng: &mut R) -> LargeGraph {
    let mut graph = DagGraph::with_root(0);
    let mut next_id: NodeId = 1;
    let mut level: Vec<NodeId> = vec![0];

    for _ in 0..depth {
        let mut next_level = Vec::new();
        for &parent in &level {
            let count = rng.gen_range(1..max_siblings.max(2));
            for _ in 0..count {
                graph
                    .add_child(parent, next_id)
                    .unwrap_or_else(|e| panic!("large graph: {e}"));
                next_level.push(next_id);
                next_id += 1;
            }
        }
        level = next_level;
    }

    LargeGraph {
        graph,
        root: 0,
        max_id: next_id,
    }
}

/// Add up to `count` extra parent edges from a lower id to a higher one.
///
/// Ids grow with depth in [`build_large_graph`], so the result stays acyclic.
pub fn add_cross_links<R: Rng>(large: &mut LargeGraph, count: usize, rng: &mut R) {
    if large.max_id < 3 {
        return;
    }
    for _ in 0..count {
        let parent = rng.gen_range(0..large.max_id - 1);
        let child = rng.gen_range(parent + 1..large.max_id);
        large
            .graph
            .link(parent, child)
            .unwrap_or_else(|e| panic!("cross link {parent} -> {child}: {e}"));
    }
}

/// `layers` rows of `width` nodes below root 0, every node linked to every
/// node of the next row. Ids run row by row, so the bottom row ends at
/// `layers * width`.
pub fn build_layered_graph(layers: usize, width: usize) -> DagGraph {
    let mut graph = DagGraph::with_root(0);
    let mut previous: Vec<NodeId> = vec![0];
    let mut next_id: NodeId = 1;
    for _ in 0..layers {
        let row: Vec<NodeId> = (next_id..next_id + width as NodeId).collect();
        next_id += width as NodeId;
        for &child in &row {
            graph
                .add_node(child)
                .unwrap_or_else(|e| panic!("layered graph: {e}"));
            for &parent in &previous {
                graph
                    .link(parent, child)
                    .unwrap_or_else(|e| panic!("layered graph: {e}"));
            }
        }
        previous = row;
    }
    graph
}

/// `count` random ids in `0..max_id`.
pub fn random_ids<R: Rng>(max_id: NodeId, count: usize, rng: &mut R) -> Vec<NodeId> {
    (0..count).map(|_| rng.gen_range(0..max_id)).collect()
}
