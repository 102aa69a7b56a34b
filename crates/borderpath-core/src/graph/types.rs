use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::CountryId;
use crate::error::BorderpathError;

/// Cost of traversing one or more border crossings.
/// Unweighted searches use 1.0 per hop; weighted ones use the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct HopCost(f64);

impl HopCost {
    pub const ZERO: HopCost = HopCost(0.0);
    pub const DEFAULT: HopCost = HopCost(1.0);

    pub fn new(cost: f64) -> Self {
        HopCost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Total order used by the priority queue
    pub fn total_cmp(&self, other: &HopCost) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for HopCost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for HopCost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HopCost(self.0 + other.0)
    }
}

impl std::iter::Sum for HopCost {
    fn sum<I: Iterator<Item = HopCost>>(iter: I) -> Self {
        iter.fold(HopCost::ZERO, |acc, c| acc + c)
    }
}

/// How to treat adjacency reported in one direction only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryPolicy {
    /// Add the missing reverse edge (logged)
    #[default]
    Enforce,
    /// Fail the graph build
    Strict,
    /// Keep edges exactly as reported
    Preserve,
}

/// Shortest-path algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// Breadth-first search: fewest border crossings
    #[default]
    Bfs,
    /// Dijkstra: lowest total edge weight
    Dijkstra,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Bfs => write!(f, "bfs"),
            SearchAlgorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = BorderpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(SearchAlgorithm::Bfs),
            "dijkstra" => Ok(SearchAlgorithm::Dijkstra),
            other => Err(BorderpathError::invalid_value("search algorithm", other)),
        }
    }
}

/// Edge weight selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightKind {
    /// Every crossing costs 1
    #[default]
    Unit,
    /// Great-circle kilometres between country centroids
    CentroidDistance,
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightKind::Unit => write!(f, "unit"),
            WeightKind::CentroidDistance => write!(f, "centroid-distance"),
        }
    }
}

/// Ordered, cycle-free sequence of adjacent countries from start to end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<CountryId>);

impl Path {
    pub(crate) fn new(countries: Vec<CountryId>) -> Self {
        Path(countries)
    }

    pub fn countries(&self) -> &[CountryId] {
        &self.0
    }

    /// Number of border crossings (`len - 1`)
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<&CountryId> {
        self.0.first()
    }

    pub fn end(&self) -> Option<&CountryId> {
        self.0.last()
    }

    pub fn into_vec(self) -> Vec<CountryId> {
        self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.0.iter().map(CountryId::as_str).collect();
        f.write_str(&ids.join(" -> "))
    }
}

/// Result of a path search, independent of the algorithm used
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: CountryId,
    pub to: CountryId,
    pub algorithm: SearchAlgorithm,
    pub path: Path,
    pub hops: usize,
    pub cost: HopCost,
}
