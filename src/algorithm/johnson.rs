use log::debug;
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm};
use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};

/// Distance matrix between every pair of vertices
///
/// Row-major over `1..=n`; a `None` entry means the column vertex is not
/// reachable from the row vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<W> {
    vertex_count: usize,
    entries: Vec<Option<W>>,
}

impl<W> DistanceMatrix<W>
where
    W: PrimInt + Signed + Debug,
{
    fn new(vertex_count: usize) -> Self {
        DistanceMatrix {
            vertex_count,
            entries: vec![None; vertex_count * vertex_count],
        }
    }

    /// Returns the number of vertices the matrix covers
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the shortest distance from `from` to `to`
    ///
    /// # Panics
    ///
    /// Panics if either vertex id is outside `1..=n`.
    pub fn get(&self, from: usize, to: usize) -> Option<W> {
        assert!(
            from >= 1 && from <= self.vertex_count && to >= 1 && to <= self.vertex_count,
            "vertex ids must be in 1..={}",
            self.vertex_count
        );
        self.entries[(from - 1) * self.vertex_count + (to - 1)]
    }

    fn set(&mut self, from: usize, to: usize, distance: W) {
        self.entries[(from - 1) * self.vertex_count + (to - 1)] = Some(distance);
    }
}

/// Johnson's all-pairs shortest path algorithm
///
/// Adds a virtual source with a zero-weight edge to every vertex, derives
/// per-vertex potentials from a Bellman-Ford run, reweights every edge to be
/// non-negative and then runs Dijkstra from each vertex. Detects a negative
/// cycle anywhere in the graph, not just reachable from one vertex, because
/// the virtual source reaches all of them.
#[derive(Debug, Default)]
pub struct Johnson;

impl Johnson {
    /// Creates a new Johnson algorithm instance
    pub fn new() -> Self {
        Johnson
    }

    /// Computes the full distance matrix for the graph
    pub fn all_pairs<W, G>(&self, graph: &G) -> Result<DistanceMatrix<W>>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        // Augmented graph: all original edges plus a virtual source n+1 with
        // a zero-weight edge to every vertex. Undirected inputs contribute
        // both directions through outgoing_edges.
        let virtual_source = n + 1;
        let mut augmented = AdjacencyGraph::new(n + 1, true);
        for u in 1..=n {
            for (v, weight) in graph.outgoing_edges(u) {
                augmented.add_edge(u, v, weight);
            }
        }
        for v in 1..=n {
            augmented.add_edge(virtual_source, v, W::zero());
        }

        let h = potentials(&augmented, virtual_source)?;
        // The virtual source reaches every vertex, so every potential is set
        let h: Vec<W> = h.iter().map(|p| p.unwrap_or_else(W::zero)).collect();

        // Reweighting w' = w + h(u) - h(v) is non-negative for every edge by
        // the triangle inequality of shortest-path potentials
        let mut reweighted = AdjacencyGraph::new(n, true);
        for u in 1..=n {
            for (v, weight) in graph.outgoing_edges(u) {
                let shifted = weight + h[u] - h[v];
                debug_assert!(shifted >= W::zero());
                reweighted.add_edge(u, v, shifted);
            }
        }

        let dijkstra = Dijkstra::new();
        let mut matrix = DistanceMatrix::new(n);
        for u in 1..=n {
            let tree = dijkstra.shortest_path_tree(&reweighted, u, None)?;
            for v in 1..=n {
                if let Some(shifted) = tree.distance(v) {
                    matrix.set(u, v, shifted - h[u] + h[v]);
                }
            }
        }

        Ok(matrix)
    }
}

/// Bellman-Ford potentials over the augmented graph
///
/// Runs the canonical |V| - 1 relaxation rounds over all edges, breaking
/// early once a round improves nothing, then one extra sweep: any remaining
/// improvement witnesses a negative cycle.
fn potentials<W>(augmented: &AdjacencyGraph<W>, source: usize) -> Result<Vec<Option<W>>>
where
    W: PrimInt + Signed + Debug,
{
    let n = augmented.vertex_count();
    let mut h: Vec<Option<W>> = vec![None; n + 1];
    h[source] = Some(W::zero());

    for _ in 1..n {
        let mut improved = false;
        for u in 1..=n {
            let h_u = match h[u] {
                Some(value) => value,
                None => continue,
            };
            for (v, weight) in augmented.outgoing_edges(u) {
                let next = h_u + weight;
                if h[v].map_or(true, |current| next < current) {
                    h[v] = Some(next);
                    improved = true;
                }
            }
        }
        if !improved {
            break;
        }
    }

    for u in 1..=n {
        let h_u = match h[u] {
            Some(value) => value,
            None => continue,
        };
        for (v, weight) in augmented.outgoing_edges(u) {
            if h[v].map_or(true, |current| h_u + weight < current) {
                debug!("relaxation still improving after {} rounds", n - 1);
                return Err(Error::NegativeCycle);
            }
        }
    }

    Ok(h)
}
