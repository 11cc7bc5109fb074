/*!
# Performance Benchmarks

Criterion-based benchmarks for the CSR build and the sampled
edge-betweenness pass, the two places most sensitive to graph size.
*/

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gncut::betweenness::{accumulate, choose_sample};
use gncut::bfs::BfsInfo;
use gncut::graph::CsrGraph;
use std::hint::black_box;

/// A ring of `n` nodes: `0-1, 1-2, ..., (n-1)-0`. Cheap to build, gives BFS
/// a nontrivial diameter to traverse.
fn ring_edges(n: u64) -> Vec<(u64, u64)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

fn bench_csr_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_build");
    for size in [100u64, 500, 2000] {
        let edges = ring_edges(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &edges, |b, edges| {
            b.iter(|| black_box(CsrGraph::build(edges)));
        });
    }
    group.finish();
}

fn bench_betweenness(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampled_betweenness");
    for size in [100u64, 500, 1000] {
        let edges = ring_edges(size);
        let (graph, _) = CsrGraph::build(&edges);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            let mut graph = graph.clone();
            let mut info = BfsInfo::new(graph.n());
            graph.set_sample(choose_sample(&graph, 1.0));
            b.iter(|| {
                graph.reset_betweenness();
                accumulate(&mut graph, &mut info);
                black_box(&graph);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_csr_build, bench_betweenness);
criterion_main!(benches);
