use autopath::{AdjacencyGraph, Error, Johnson, Router};

fn five_vertex_network() -> AdjacencyGraph<i64> {
    let mut graph = AdjacencyGraph::new(5, true);
    graph.add_edge(1, 2, 10);
    graph.add_edge(1, 3, 3);
    graph.add_edge(2, 3, 1);
    graph.add_edge(2, 4, 2);
    graph.add_edge(3, 2, 4);
    graph.add_edge(3, 4, 8);
    graph.add_edge(3, 5, 2);
    graph.add_edge(4, 5, 7);
    graph
}

#[test]
fn test_matrix_matches_single_source_runs() {
    let graph = five_vertex_network();
    let matrix = Johnson::new().all_pairs(&graph).unwrap();
    let router = Router::new();

    assert_eq!(matrix.vertex_count(), 5);
    for u in 1..=5 {
        for v in 1..=5 {
            let direct = router.shortest_path(&graph, u, v);
            match matrix.get(u, v) {
                Some(distance) => assert_eq!(
                    direct.map(|route| route.distance),
                    Ok(distance),
                    "mismatch for pair ({}, {})",
                    u,
                    v
                ),
                None => assert_eq!(
                    direct,
                    Err(Error::Unreachable { source: u, target: v }),
                    "pair ({}, {}) should be unreachable",
                    u,
                    v
                ),
            }
        }
    }
}

#[test]
fn test_diagonal_is_zero() {
    let graph = five_vertex_network();
    let matrix = Johnson::new().all_pairs(&graph).unwrap();

    for v in 1..=5 {
        assert_eq!(matrix.get(v, v), Some(0));
    }
}

#[test]
fn test_unreachable_entries_are_none() {
    let graph = five_vertex_network();
    let matrix = Johnson::new().all_pairs(&graph).unwrap();

    // Vertex 5 has no outgoing edge
    for v in 1..=4 {
        assert_eq!(matrix.get(5, v), None);
    }
}

#[test]
fn test_negative_edges_reweighted_correctly() {
    let mut graph = AdjacencyGraph::new(4, true);
    graph.add_edge(1, 2, 3);
    graph.add_edge(2, 3, -8);
    graph.add_edge(1, 3, 5);
    graph.add_edge(3, 4, 2);

    let matrix = Johnson::new().all_pairs(&graph).unwrap();

    assert_eq!(matrix.get(1, 3), Some(-5));
    assert_eq!(matrix.get(1, 4), Some(-3));
    assert_eq!(matrix.get(2, 4), Some(-6));
    assert_eq!(matrix.get(4, 1), None);
}

#[test]
fn test_detects_cycle_not_reachable_from_first_vertex() {
    // The improving cycle lives on vertices 2..4 and vertex 1 cannot reach
    // it; the virtual source still sees it
    let mut graph = AdjacencyGraph::new(4, true);
    graph.add_edge(2, 3, 1);
    graph.add_edge(3, 4, 1);
    graph.add_edge(4, 2, -5);

    assert_eq!(Johnson::new().all_pairs(&graph), Err(Error::NegativeCycle));

    // A single-source query from vertex 1 never meets the cycle and just
    // reports unreachability
    assert_eq!(
        Router::new().shortest_path(&graph, 1, 2),
        Err(Error::Unreachable { source: 1, target: 2 })
    );
}

#[test]
fn test_undirected_matrix_is_symmetric() {
    let mut graph = AdjacencyGraph::new(4, false);
    graph.add_edge(1, 2, 1);
    graph.add_edge(2, 3, 2);
    graph.add_edge(3, 4, 4);
    graph.add_edge(1, 4, 10);

    let matrix = Johnson::new().all_pairs(&graph).unwrap();

    assert_eq!(matrix.get(1, 4), Some(7));
    for u in 1..=4 {
        for v in 1..=4 {
            assert_eq!(matrix.get(u, v), matrix.get(v, u));
        }
    }
}
