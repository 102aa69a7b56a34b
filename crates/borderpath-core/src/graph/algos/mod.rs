//! Weighted search algorithms
//!
//! Unweighted (fewest crossings) search lives in `graph::bfs`; this module
//! holds the weighted variants.

pub mod dijkstra;

pub use dijkstra::dijkstra_search;
