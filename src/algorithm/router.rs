use log::debug;
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::algorithm::{Dijkstra, Route, ShortestPathAlgorithm, Spfa};
use crate::graph::Graph;
use crate::{Error, Result};

/// Algorithm selection policy for point-to-point queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Pick SPFA when the graph has a negative edge, Dijkstra otherwise
    Auto,
    /// Always use Dijkstra (caller guarantees non-negative weights)
    ForceDijkstra,
    /// Always use SPFA
    ForceSpfa,
}

/// Routes a point-to-point query to the appropriate algorithm
///
/// Both endpoints are validated against `1..=n` before anything is computed.
/// In [`Selection::Auto`] the graph is scanned for negative edges and the
/// query is dispatched to SPFA if any exists, otherwise to Dijkstra; the
/// chosen algorithm's result is returned unmodified. The forced modes skip
/// only the sign scan and exist for cross-validation and benchmarking.
#[derive(Debug)]
pub struct Router {
    selection: Selection,
}

impl Router {
    /// Creates a router with automatic algorithm selection
    pub fn new() -> Self {
        Router {
            selection: Selection::Auto,
        }
    }

    /// Creates a router with a fixed selection policy
    pub fn with_selection(selection: Selection) -> Self {
        Router { selection }
    }

    /// Computes one shortest route from `source` to `target`
    pub fn shortest_path<W, G>(&self, graph: &G, source: usize, target: usize) -> Result<Route<W>>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        match self.selection {
            Selection::ForceDijkstra => Dijkstra::new().shortest_path(graph, source, target),
            Selection::ForceSpfa => Spfa::new().shortest_path(graph, source, target),
            Selection::Auto => {
                if graph.has_negative_edge() {
                    debug!(
                        "graph has negative edges, using SPFA for {} -> {}",
                        source, target
                    );
                    Spfa::new().shortest_path(graph, source, target)
                } else {
                    debug!(
                        "graph has only non-negative edges, using Dijkstra for {} -> {}",
                        source, target
                    );
                    Dijkstra::new().shortest_path(graph, source, target)
                }
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
