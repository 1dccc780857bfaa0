//! Golden fixture tests: filter, closure, and conditional-copy expectations
//! stored as JSON under `test-fixtures/golden/`.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use sylva_core::config::{FilterConfig, InclusionStrategy};
use sylva_core::models::NodeId;
use sylva_graph::{analyse, conditionally_copy_tree, DagGraph, FilterEngine};
use test_fixtures::{list_fixtures, load_fixture, load_graph};

#[derive(Debug, Deserialize)]
struct FilterCase {
    description: String,
    graph: String,
    root: NodeId,
    included_ids: Vec<NodeId>,
    expected_root: Option<NodeId>,
    expected_nodes: Vec<NodeId>,
    expected_explicit: Vec<NodeId>,
    expected_implicit: Vec<NodeId>,
    expected_edges: Vec<(NodeId, NodeId)>,
}

#[derive(Debug, Deserialize)]
struct ClosureCase {
    root: NodeId,
    ancestors: BTreeMap<NodeId, Vec<NodeId>>,
    descendants: BTreeMap<NodeId, Vec<NodeId>>,
}

#[derive(Debug, Deserialize)]
struct CopyCase {
    description: String,
    graph: String,
    nodes: Vec<NodeId>,
    expected_root: NodeId,
    expected_nodes: Vec<NodeId>,
    expected_explicit: Vec<NodeId>,
    expected_edges: Vec<(NodeId, NodeId)>,
}

fn relative(path: &std::path::Path) -> String {
    let dir = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{dir}/{file}")
}

fn sorted_ids(graph: &DagGraph) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = graph.node_ids().collect();
    ids.sort_unstable();
    ids
}

fn flagged(graph: &DagGraph, explicit: bool) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = graph
        .node_ids()
        .filter(|&id| {
            graph.node(id).is_some_and(|n| {
                if explicit {
                    n.explicitly_included
                } else {
                    n.implicitly_included
                }
            })
        })
        .collect();
    ids.sort_unstable();
    ids
}

fn sorted_edges(graph: &DagGraph) -> Vec<(NodeId, NodeId)> {
    let mut edges: Vec<(NodeId, NodeId)> = graph.edges().collect();
    edges.sort_unstable();
    edges
}

fn run_filter_case(case: &FilterCase, strategy: InclusionStrategy) {
    let mut graph = load_graph(&case.graph);
    let engine = FilterEngine::new(FilterConfig {
        strategy,
        ..FilterConfig::default()
    });
    let root = engine
        .filter(&mut graph, case.root, &case.included_ids)
        .unwrap();

    let label = format!("{} ({})", case.description, strategy.as_str());
    assert_eq!(root, case.expected_root, "{label}");
    assert_eq!(sorted_ids(&graph), case.expected_nodes, "{label}");
    assert_eq!(flagged(&graph, true), case.expected_explicit, "{label}");
    assert_eq!(flagged(&graph, false), case.expected_implicit, "{label}");
    assert_eq!(sorted_edges(&graph), case.expected_edges, "{label}");
}

#[test]
fn golden_filter_cases() {
    let files = list_fixtures("filter");
    assert!(files.len() >= 5, "expected filter fixtures, found {}", files.len());
    for path in files {
        let case: FilterCase = load_fixture(&relative(&path));
        run_filter_case(&case, InclusionStrategy::Traversal);
        run_filter_case(&case, InclusionStrategy::Closure);
    }
}

#[test]
fn golden_closures() {
    let case: ClosureCase = load_fixture("closure/example.json");
    let graph = load_graph("graphs/example.json");
    let closures = analyse(&graph, case.root).unwrap();

    assert_eq!(closures.len(), case.ancestors.len());
    for (id, expected) in &case.ancestors {
        let expected: HashSet<NodeId> = expected.iter().copied().collect();
        assert_eq!(closures.ancestors(*id), Some(&expected), "ancestors of {id}");
    }
    for (id, expected) in &case.descendants {
        let expected: HashSet<NodeId> = expected.iter().copied().collect();
        assert_eq!(closures.descendants(*id), Some(&expected), "descendants of {id}");
    }
}

#[test]
fn golden_copy_cases() {
    let files = list_fixtures("copy");
    assert!(!files.is_empty());
    for path in files {
        let case: CopyCase = load_fixture(&relative(&path));
        let source = load_graph(&case.graph);
        let copy = conditionally_copy_tree(&source, &case.nodes)
            .unwrap()
            .unwrap_or_else(|| panic!("{}: expected a copy", case.description));

        assert_eq!(copy.root, case.expected_root, "{}", case.description);
        assert!(copy.graph.is_root(copy.root).unwrap(), "{}", case.description);
        assert_eq!(sorted_ids(&copy.graph), case.expected_nodes, "{}", case.description);
        assert_eq!(flagged(&copy.graph, true), case.expected_explicit, "{}", case.description);
        assert!(flagged(&copy.graph, false).is_empty(), "{}", case.description);
        assert_eq!(sorted_edges(&copy.graph), case.expected_edges, "{}", case.description);
    }
}
