//! Route queries against one dataset with a lazily built graph

use std::sync::Arc;

use tracing::debug;

use super::adjacency::AdjacencyGraph;
use super::bfs;
use super::cache::GraphCache;
use super::traversal::AdjacencyProvider;
use super::types::{Path, PathResult, SearchAlgorithm, SymmetryPolicy};
use super::weights::EdgeWeight;
use crate::dataset::{CountryId, Dataset};
use crate::error::Result;
use crate::log_resource_metrics;

/// Answers route queries for a fixed dataset.
///
/// The adjacency graph is derived from `provider` on first use and reused
/// for every later query, including queries from other threads sharing the
/// finder.
#[derive(Debug)]
pub struct PathFinder<P> {
    provider: P,
    dataset: Arc<Dataset>,
    cache: GraphCache,
    symmetry: SymmetryPolicy,
}

impl<P: AdjacencyProvider> PathFinder<P> {
    pub fn new(provider: P, dataset: impl Into<Arc<Dataset>>) -> Self {
        PathFinder {
            provider,
            dataset: dataset.into(),
            cache: GraphCache::new(),
            symmetry: SymmetryPolicy::default(),
        }
    }

    pub fn with_symmetry(mut self, symmetry: SymmetryPolicy) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &GraphCache {
        &self.cache
    }

    /// The adjacency graph, building it on first call
    pub fn graph(&self) -> Result<&AdjacencyGraph> {
        self.cache.get_or_build(|| {
            debug!(
                countries = self.dataset.len(),
                symmetry = ?self.symmetry,
                "building adjacency graph"
            );
            AdjacencyGraph::build(&self.provider, &self.dataset, self.symmetry)
        })
    }

    /// Bordering countries of `id`, sorted by id
    pub fn neighbors(&self, id: &str) -> Result<&[CountryId]> {
        self.dataset.require(id)?;
        let graph = self.graph()?;
        graph.check_endpoint(id)?;
        Ok(graph.neighbors(id).unwrap_or_default())
    }

    /// Fewest-crossings route from `start` to `end`
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Path> {
        // Unknown ids fail without paying for a graph build
        self.dataset.require(start)?;
        self.dataset.require(end)?;

        let path = bfs::shortest_path(self.graph()?, start, end)?;
        log_resource_metrics!(self.cache.metrics(), "shortest_path");
        Ok(path)
    }

    /// Route search with an explicit algorithm and edge weight
    pub fn find_path(
        &self,
        start: &str,
        end: &str,
        algorithm: SearchAlgorithm,
        weight: &dyn EdgeWeight,
    ) -> Result<PathResult> {
        self.dataset.require(start)?;
        self.dataset.require(end)?;

        let result = bfs::find_path(
            self.graph()?,
            &self.dataset,
            start,
            end,
            algorithm,
            weight,
        )?;
        log_resource_metrics!(self.cache.metrics(), "find_path");
        Ok(result)
    }
}
