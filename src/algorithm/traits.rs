use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// A shortest route between two vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    /// Vertices along the route, source first, target last
    pub vertices: Vec<usize>,
    /// Total weight of the route
    pub distance: W,
}

/// Tentative-distance and predecessor state produced by a single-source run
///
/// Indexed by vertex id; slot 0 is unused. A `None` distance means the
/// vertex was never reached.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W> {
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathTree<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates the initial state for a run from `source` over a graph with
    /// `vertex_count` vertices
    pub fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count + 1];
        distances[source] = Some(W::zero());
        ShortestPathTree {
            distances,
            predecessors: vec![None; vertex_count + 1],
            source,
        }
    }

    /// Returns the distance from the source to `target`, or `None` if the
    /// target was never reached
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Reconstructs the vertex sequence from the source to `target` by
    /// walking predecessor pointers backwards
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();

        Some(path)
    }

    /// Bundles the path and distance to `target` into a [`Route`]
    pub fn route_to(&self, target: usize) -> Option<Route<W>> {
        let distance = self.distance(target)?;
        let vertices = self.path_to(target)?;
        Some(Route { vertices, distance })
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Runs the algorithm from `source` and returns the resulting tree
    ///
    /// `target` is an early-exit hint: a label-setting algorithm may stop
    /// once the target's distance is final, a label-correcting one ignores
    /// it and runs to convergence. Pass `None` to compute distances for
    /// every reachable vertex.
    fn shortest_path_tree(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<ShortestPathTree<W>>;

    /// Computes one shortest route from `source` to `target`
    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> Result<Route<W>> {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        let tree = self.shortest_path_tree(graph, source, Some(target))?;
        tree.route_to(target)
            .ok_or(Error::Unreachable { source, target })
    }
}
