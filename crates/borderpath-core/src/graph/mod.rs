//! Country adjacency and route finding
//!
//! - `AdjacencyProvider` sources: boundary geometry or a precomputed list
//! - `AdjacencyGraph`, derived once per dataset and cached by `GraphCache`
//! - BFS for fewest crossings, Dijkstra for weighted routes

pub mod adjacency;
pub mod algos;
pub mod bfs;
pub mod boundary;
pub mod cache;
pub mod finder;
pub mod list;
pub mod traversal;
pub mod types;
pub mod weights;

pub use adjacency::AdjacencyGraph;
pub use algos::dijkstra_search;
pub use bfs::{find_path, shortest_path};
pub use boundary::BoundaryAdjacency;
pub use cache::GraphCache;
pub use finder::PathFinder;
pub use list::ListAdjacency;
pub use traversal::AdjacencyProvider;
pub use types::{HopCost, Path, PathResult, SearchAlgorithm, SymmetryPolicy, WeightKind};
pub use weights::{haversine_km, weight_for, CentroidDistance, EdgeWeight, UnitWeight};
