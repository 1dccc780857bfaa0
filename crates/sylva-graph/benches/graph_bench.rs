use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sylva_core::config::{FilterConfig, InclusionStrategy};
use sylva_graph::{analyse, conditionally_copy_tree, descendants_where, FilterEngine};
use test_fixtures::{add_cross_links, build_large_graph, random_ids, LargeGraph};

/// Random tree of depth 16 with 1-2 children per node plus 200 extra parent edges.
fn build_bench_graph(seed: u64) -> LargeGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut large = build_large_graph(16, 3, &mut rng);
    add_cross_links(&mut large, 200, &mut rng);
    large
}

fn bench_filter(c: &mut Criterion) {
    let large = build_bench_graph(1);
    let mut rng = StdRng::seed_from_u64(2);
    let ids = random_ids(large.max_id, 4, &mut rng);

    for (name, strategy, parallel) in [
        ("filter_traversal", InclusionStrategy::Traversal, false),
        ("filter_traversal_parallel", InclusionStrategy::Traversal, true),
        ("filter_closure", InclusionStrategy::Closure, false),
    ] {
        let engine = FilterEngine::new(FilterConfig {
            strategy,
            parallel_inclusion: parallel,
            parallel_threshold: 1,
        });
        c.bench_function(name, |b| {
            b.iter_batched(
                || large.graph.clone(),
                |mut graph| engine.filter(&mut graph, large.root, &ids),
                BatchSize::LargeInput,
            );
        });
    }
}

fn bench_analyse(c: &mut Criterion) {
    let large = build_bench_graph(3);
    c.bench_function("closure_analysis", |b| {
        b.iter(|| analyse(&large.graph, large.root));
    });
}

fn bench_conditional_copy(c: &mut Criterion) {
    let large = build_bench_graph(4);
    let mut rng = StdRng::seed_from_u64(5);
    let picks = random_ids(large.max_id, 4, &mut rng);
    let selected: Vec<_> = descendants_where(&large.graph, large.root, |n| picks.contains(&n.id()))
        .map(|walk| walk.map(|n| n.id()).collect())
        .unwrap_or_default();

    c.bench_function("conditional_copy_4_nodes", |b| {
        b.iter(|| conditionally_copy_tree(&large.graph, &selected));
    });
}

criterion_group!(benches, bench_filter, bench_analyse, bench_conditional_copy);
criterion_main!(benches);
