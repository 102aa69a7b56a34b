use std::sync::{Mutex, OnceLock};

use tracing::debug;

use super::adjacency::AdjacencyGraph;
use crate::error::Result;
use crate::logging::ResourceMetrics;

/// Holds at most one `AdjacencyGraph` for the lifetime of a dataset.
///
/// The graph is built at most once even with concurrent callers: builders
/// serialize on `build_lock` and re-check before building. Once set, reads go
/// through the `OnceLock` without locking. A failed build stores nothing, so
/// a later call builds again.
#[derive(Debug, Default)]
pub struct GraphCache {
    graph: OnceLock<AdjacencyGraph>,
    build_lock: Mutex<()>,
    metrics: ResourceMetrics,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&AdjacencyGraph> {
        self.graph.get()
    }

    pub fn is_built(&self) -> bool {
        self.graph.get().is_some()
    }

    pub fn metrics(&self) -> &ResourceMetrics {
        &self.metrics
    }

    /// Return the cached graph, running `build` first if there is none yet
    pub fn get_or_build<F>(&self, build: F) -> Result<&AdjacencyGraph>
    where
        F: FnOnce() -> Result<AdjacencyGraph>,
    {
        if let Some(graph) = self.graph.get() {
            self.metrics.record_cache_hit();
            return Ok(graph);
        }

        // The guarded data is (), so a poisoned lock carries no broken state
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(graph) = self.graph.get() {
            self.metrics.record_cache_hit();
            return Ok(graph);
        }

        self.metrics.record_cache_miss();
        let graph = build()?;
        self.metrics.record_build();
        debug!(countries = graph.node_count(), "graph_cached");
        Ok(self.graph.get_or_init(|| graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BorderpathError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_builds_once() {
        let cache = GraphCache::new();
        let calls = AtomicUsize::new(0);
        let build = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(AdjacencyGraph::default())
        };

        cache.get_or_build(build).unwrap();
        cache.get_or_build(build).unwrap();
        cache.get_or_build(build).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.metrics().graph_builds(), 1);
        assert_eq!(cache.metrics().cache_misses(), 1);
        assert_eq!(cache.metrics().cache_hits(), 2);
    }

    #[test]
    fn test_failed_build_is_retried() {
        let cache = GraphCache::new();
        let err = cache
            .get_or_build(|| Err(BorderpathError::Other("boom".to_string())))
            .unwrap_err();
        assert!(matches!(err, BorderpathError::Other(_)));
        assert!(!cache.is_built());

        cache.get_or_build(|| Ok(AdjacencyGraph::default())).unwrap();
        assert!(cache.is_built());
    }

    #[test]
    fn test_concurrent_callers_share_one_build() {
        let cache = GraphCache::new();
        let calls = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    cache
                        .get_or_build(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(std::time::Duration::from_millis(10));
                            Ok(AdjacencyGraph::default())
                        })
                        .unwrap();
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.metrics().graph_builds(), 1);
    }
}
