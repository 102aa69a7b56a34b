//! Borderpath Core Library
//!
//! Country adjacency and shortest border-crossing routes over a GeoJSON
//! country dataset.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
