use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neuronet_core::{CsrGraph, NodeId, SparseGraph};

/// Deterministic pseudo-random edge list, ~`edges_per_node` edges per node.
fn random_edges(node_count: u32, edges_per_node: u32) -> Vec<(NodeId, NodeId)> {
    let mut state: u64 = 0x5eed;
    let mut next = move |max: u32| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) % max as u64) as u32
    };
    (0..node_count * edges_per_node)
        .map(|_| (next(node_count), next(node_count)))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_build");
    for &n in &[10_000u32, 100_000] {
        let edges = random_edges(n, 10);
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            b.iter(|| CsrGraph::from_edges(black_box(edges.iter().copied())))
        });
    }
    group.finish();
}

fn bench_bfs(c: &mut Criterion) {
    let graph = CsrGraph::from_edges(random_edges(100_000, 10));
    let mut group = c.benchmark_group("bfs_bounded");
    for depth in [1u32, 2, 3, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| graph.bfs(black_box(0), depth))
        });
    }
    group.finish();
}

fn bench_max_degree(c: &mut Criterion) {
    let graph = CsrGraph::from_edges(random_edges(100_000, 10));
    c.bench_function("node_of_max_out_degree", |b| {
        b.iter(|| black_box(&graph).node_of_max_out_degree())
    });
}

criterion_group!(benches, bench_build, bench_bfs, bench_max_degree);
criterion_main!(benches);
