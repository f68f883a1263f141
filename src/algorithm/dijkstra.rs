use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm
///
/// Label-setting: every vertex's distance is final the first time it is
/// popped from the heap. That property, and the early exit on the target,
/// hold only when the graph has no negative edge. [`Router`] verifies this
/// before dispatching here; callers invoking Dijkstra directly must uphold
/// the same precondition.
///
/// [`Router`]: crate::algorithm::router::Router
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let mut tree = ShortestPathTree::new(graph.vertex_count(), source);

        let mut heap = MinHeap::new();
        heap.push(source, W::zero());

        while let Some((u, dist_u)) = heap.pop() {
            // Stale entry from before a later relaxation improved u
            match tree.distances[u] {
                Some(best) if dist_u > best => continue,
                _ => {}
            }

            // With non-negative weights no later pop can improve the target
            // once it has been popped with its minimal distance
            if target == Some(u) {
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let next = dist_u + weight;

                let improves = match tree.distances[v] {
                    None => true,
                    Some(current) => next < current,
                };

                if improves {
                    tree.distances[v] = Some(next);
                    tree.predecessors[v] = Some(u);
                    heap.push(v, next);
                }
            }
        }

        Ok(tree)
    }
}
