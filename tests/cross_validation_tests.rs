use autopath::graph::generators::{generate_layered_dag, generate_random_graph};
use autopath::{Dijkstra, Johnson, Router, Selection, ShortestPathAlgorithm, Spfa};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// On non-negative weights the label-setting and label-correcting algorithms
// must report the same distances and the same failures
#[test]
fn test_dijkstra_and_spfa_agree_on_non_negative_graphs() {
    init_logging();
    let dijkstra = Router::with_selection(Selection::ForceDijkstra);
    let spfa = Router::with_selection(Selection::ForceSpfa);

    for seed in 0..5 {
        let graph = generate_random_graph(40, 200, 50, seed);

        for source in [1, 7, 23] {
            for target in 1..=40 {
                let a = dijkstra.shortest_path(&graph, source, target);
                let b = spfa.shortest_path(&graph, source, target);
                match (a, b) {
                    (Ok(x), Ok(y)) => assert_eq!(
                        x.distance, y.distance,
                        "seed {} pair ({}, {})",
                        seed, source, target
                    ),
                    (Err(x), Err(y)) => assert_eq!(x, y),
                    (x, y) => panic!(
                        "seed {} pair ({}, {}): {:?} vs {:?}",
                        seed, source, target, x, y
                    ),
                }
            }
        }
    }
}

#[test]
fn test_johnson_matches_dijkstra_on_non_negative_graphs() {
    for seed in 0..3 {
        let graph = generate_random_graph(30, 150, 30, seed);
        let matrix = Johnson::new().all_pairs(&graph).unwrap();
        let dijkstra = Dijkstra::new();

        for u in 1..=30 {
            let tree = dijkstra.shortest_path_tree(&graph, u, None).unwrap();
            for v in 1..=30 {
                assert_eq!(
                    matrix.get(u, v),
                    tree.distance(v),
                    "seed {} pair ({}, {})",
                    seed,
                    u,
                    v
                );
            }
        }
    }
}

// Layered DAGs allow negative weights but can never contain a cycle, so the
// all-pairs matrix must line up with a full SPFA run from every vertex
#[test]
fn test_johnson_matches_spfa_on_negative_weight_dags() {
    for seed in 0..3 {
        let graph = generate_layered_dag(25, 120, -10, 20, seed);
        let matrix = Johnson::new().all_pairs(&graph).unwrap();
        let spfa = Spfa::new();

        for u in 1..=25 {
            let tree = spfa.shortest_path_tree(&graph, u, None).unwrap();
            for v in 1..=25 {
                assert_eq!(
                    matrix.get(u, v),
                    tree.distance(v),
                    "seed {} pair ({}, {})",
                    seed,
                    u,
                    v
                );
            }
        }
    }
}
