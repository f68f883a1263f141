use crate::graph::traits::Graph;
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// A fixed-size graph stored as adjacency lists
///
/// Vertices are numbered `1..=n`; slot 0 of the adjacency table is unused.
/// Parallel edges and self-loops are allowed and each entry is relaxed
/// independently by the algorithms. Once queries start the graph is only
/// accessed through `&self`, so a single instance can serve concurrent
/// queries without coordination.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    vertex_count: usize,
    directed: bool,
    /// vertex id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a graph with vertices `1..=vertex_count` and no edges
    ///
    /// # Panics
    ///
    /// Panics if `vertex_count` is zero.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        assert!(vertex_count > 0, "graph needs at least one vertex");
        AdjacencyGraph {
            vertex_count,
            directed,
            adjacency: vec![Vec::new(); vertex_count + 1],
        }
    }

    /// Appends an edge from `from` to `to`; on an undirected graph the
    /// reverse entry is appended in the same call
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is outside `1..=n`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        assert!(
            self.has_vertex(from) && self.has_vertex(to),
            "edge endpoints must be in 1..={}",
            self.vertex_count
        );
        self.adjacency[from].push((to, weight));
        if !self.directed {
            self.adjacency[to].push((from, weight));
        }
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
