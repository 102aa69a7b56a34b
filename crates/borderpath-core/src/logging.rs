use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Cache statistics for structured logging.
///
/// Tracks adjacency-graph builds and cache hit/miss counts.
/// All operations are atomic and lock-free.
#[derive(Debug, Default)]
pub struct ResourceMetrics {
    /// Number of completed graph builds
    graph_builds: AtomicU64,
    /// Cache hit count
    cache_hits: AtomicU64,
    /// Cache miss count
    cache_misses: AtomicU64,
}

impl ResourceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed graph build
    pub fn record_build(&self) {
        self.graph_builds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn graph_builds(&self) -> u64 {
        self.graph_builds.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Get cache hit rate as a percentage (0.0-100.0)
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits();
        let total = hits + self.cache_misses();
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }
}

/// Log resource metrics at debug level.
///
/// ```rust,ignore
/// log_resource_metrics!(cache.metrics(), "path");
/// ```
#[macro_export]
macro_rules! log_resource_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            graph_builds = $metrics.graph_builds(),
            cache_hits = $metrics.cache_hits(),
            cache_misses = $metrics.cache_misses(),
            cache_hit_rate = $metrics.cache_hit_rate(),
            "resource_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "build_graph", countries = dataset.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "borderpath=debug,borderpath_core=debug",
        (false, None) => "borderpath=warn,borderpath_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // BORDERPATH_LOG overrides the CLI-derived filter
    let filter = EnvFilter::try_from_env("BORDERPATH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if level.contains('=') {
            level.to_string()
        } else {
            format!("borderpath={level},borderpath_core={level}")
        })
    });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        let metrics = ResourceMetrics::new();
        assert_eq!(metrics.cache_hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts() {
        let metrics = ResourceMetrics::new();
        metrics.record_cache_miss();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_build();
        assert_eq!(metrics.cache_hits(), 3);
        assert_eq!(metrics.cache_misses(), 1);
        assert_eq!(metrics.graph_builds(), 1);
        assert_eq!(metrics.cache_hit_rate(), 75.0);
    }
}
