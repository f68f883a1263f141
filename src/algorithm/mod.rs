pub mod dijkstra;
pub mod johnson;
pub mod router;
pub mod spfa;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use johnson::{DistanceMatrix, Johnson};
pub use router::{Router, Selection};
pub use spfa::Spfa;
pub use traits::{Route, ShortestPathAlgorithm, ShortestPathTree};
