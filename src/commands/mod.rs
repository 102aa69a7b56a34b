//! CLI commands for borderpath

pub mod countries;
pub mod dispatch;
pub mod graph;
pub mod neighbors;
pub mod path;
