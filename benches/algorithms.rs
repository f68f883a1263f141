use criterion::{black_box, criterion_group, criterion_main, Criterion};

use autopath::graph::generators::{generate_layered_dag, generate_random_graph};
use autopath::{Johnson, Router, Selection};

fn bench_point_to_point(c: &mut Criterion) {
    let graph = generate_random_graph(2_000, 16_000, 100, 17);
    let dijkstra = Router::with_selection(Selection::ForceDijkstra);
    let spfa = Router::with_selection(Selection::ForceSpfa);
    let auto = Router::new();

    let mut group = c.benchmark_group("point_to_point");
    group.bench_function("dijkstra", |b| {
        b.iter(|| dijkstra.shortest_path(black_box(&graph), 1, 2_000))
    });
    group.bench_function("spfa", |b| {
        b.iter(|| spfa.shortest_path(black_box(&graph), 1, 2_000))
    });
    group.bench_function("auto", |b| {
        b.iter(|| auto.shortest_path(black_box(&graph), 1, 2_000))
    });
    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let graph = generate_layered_dag(120, 900, -5, 30, 17);
    let johnson = Johnson::new();

    c.bench_function("johnson_all_pairs", |b| {
        b.iter(|| johnson.all_pairs(black_box(&graph)))
    });
}

criterion_group!(benches, bench_point_to_point, bench_all_pairs);
criterion_main!(benches);
