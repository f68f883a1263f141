use crate::graph::AdjacencyGraph;
use rand::prelude::*;

/// Generates a directed graph with `edge_count` uniformly random edges and
/// non-negative weights drawn from `0..=max_weight`
///
/// Deterministic for a given seed, so tests and benchmarks can reproduce
/// their inputs.
pub fn generate_random_graph(
    vertex_count: usize,
    edge_count: usize,
    max_weight: i64,
    seed: u64,
) -> AdjacencyGraph<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new(vertex_count, true);

    for _ in 0..edge_count {
        let from = rng.gen_range(1..=vertex_count);
        let to = rng.gen_range(1..=vertex_count);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(from, to, weight);
    }

    graph
}

/// Generates a layered DAG where every edge points from a lower vertex id to
/// a higher one
///
/// Weights are drawn from `min_weight..=max_weight` and may be negative; the
/// graph is acyclic, so no negative cycle can form regardless of the range.
pub fn generate_layered_dag(
    vertex_count: usize,
    edge_count: usize,
    min_weight: i64,
    max_weight: i64,
    seed: u64,
) -> AdjacencyGraph<i64> {
    assert!(vertex_count >= 2, "a DAG with edges needs at least two vertices");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new(vertex_count, true);

    for _ in 0..edge_count {
        let from = rng.gen_range(1..vertex_count);
        let to = rng.gen_range(from + 1..=vertex_count);
        let weight = rng.gen_range(min_weight..=max_weight);
        graph.add_edge(from, to, weight);
    }

    graph
}
