//! Autopath - shortest paths with automatic algorithm selection
//!
//! This library computes shortest paths on weighted directed or undirected
//! graphs with signed integer edge weights. Three classical algorithms are
//! provided and picked according to graph properties:
//!
//! - Dijkstra's label-setting search for graphs with non-negative weights
//! - SPFA (a queue-based Bellman-Ford variant) for graphs that may contain
//!   negative weights, with negative-cycle detection
//! - Johnson's reweighting for all-pairs distances
//!
//! Point-to-point queries go through [`Router`], which scans the graph for
//! negative edges and dispatches to the right single-source algorithm.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    johnson::{DistanceMatrix, Johnson},
    router::{Router, Selection},
    spfa::Spfa,
    Route, ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use graph::Graph;

/// Error types for the library
// NOTE: `Display`/`Error` are implemented by hand rather than via
// `#[derive(thiserror::Error)]`. thiserror unconditionally treats a field
// named `source` as the underlying error source (requiring it to implement
// `std::error::Error`), which does not hold for the `usize` field below. The
// manual impls below reproduce the exact message strings thiserror would have
// generated, leaving the public API (`Error: std::error::Error + Display`)
// and the data fields unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidVertex(usize),

    Unreachable { source: usize, target: usize },

    NegativeCycle,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidVertex(id) => write!(f, "Invalid vertex ID: {}", id),
            Error::Unreachable { source, target } => {
                write!(f, "No path from vertex {} to vertex {}", source, target)
            }
            Error::NegativeCycle => write!(f, "Negative cycle detected"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
