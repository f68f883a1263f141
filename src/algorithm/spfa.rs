use log::debug;
use num_traits::{PrimInt, Signed};
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::Graph;
use crate::{Error, Result};

/// SPFA, a queue-based Bellman-Ford variant
///
/// Label-correcting: a vertex's distance may be revised several times until
/// the queue drains, so negative edge weights are handled. A vertex enqueued
/// more than `n` times witnesses a negative cycle reachable from the source,
/// in which case no distance or path is produced.
#[derive(Debug, Default)]
pub struct Spfa;

impl Spfa {
    /// Creates a new SPFA algorithm instance
    pub fn new() -> Self {
        Spfa
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Spfa
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "SPFA"
    }

    /// The target hint is ignored; the relaxation runs to convergence.
    fn shortest_path_tree(
        &self,
        graph: &G,
        source: usize,
        _target: Option<usize>,
    ) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut tree = ShortestPathTree::new(n, source);

        let mut in_queue = vec![false; n + 1];
        let mut push_count = vec![0usize; n + 1];
        let mut queue = VecDeque::with_capacity(n);

        queue.push_back(source);
        in_queue[source] = true;
        push_count[source] = 1;

        while let Some(u) = queue.pop_front() {
            in_queue[u] = false;

            let dist_u = match tree.distances[u] {
                Some(d) => d,
                None => continue,
            };

            for (v, weight) in graph.outgoing_edges(u) {
                let next = dist_u + weight;

                let improves = match tree.distances[v] {
                    None => true,
                    Some(current) => next < current,
                };

                if improves {
                    tree.distances[v] = Some(next);
                    tree.predecessors[v] = Some(u);

                    if !in_queue[v] {
                        queue.push_back(v);
                        in_queue[v] = true;
                        push_count[v] += 1;

                        // Every enqueue follows a genuine improvement, so a
                        // vertex requeued more than n times implies an
                        // improving cycle reachable from the source
                        if push_count[v] > n {
                            debug!(
                                "vertex {} enqueued {} times, negative cycle reachable from {}",
                                v, push_count[v], source
                            );
                            return Err(Error::NegativeCycle);
                        }
                    }
                }
            }
        }

        Ok(tree)
    }
}
