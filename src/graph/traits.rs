use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// Trait representing a weighted graph with vertices numbered `1..=n`
pub trait Graph<W>: Debug
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored adjacency entries
    ///
    /// An undirected edge counts twice, once per direction.
    fn edge_count(&self) -> usize;

    /// Returns true if edges are one-way only
    fn is_directed(&self) -> bool;

    /// Returns true if the vertex id is within `1..=n`
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.vertex_count()
    }

    /// Returns an iterator over the outgoing edges from a vertex as
    /// `(target, weight)` pairs
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if any edge weight is strictly negative. O(E).
    fn has_negative_edge(&self) -> bool {
        (1..=self.vertex_count())
            .any(|u| self.outgoing_edges(u).any(|(_, weight)| weight < W::zero()))
    }
}
