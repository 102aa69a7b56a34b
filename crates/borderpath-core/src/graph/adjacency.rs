//! The derived country adjacency graph

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, warn};

use super::traversal::AdjacencyProvider;
use super::types::SymmetryPolicy;
use crate::bail_dataset;
use crate::dataset::{CountryId, Dataset};
use crate::error::{BorderpathError, Result};
use crate::trace_time;

/// Country id -> sorted neighbor ids, for every country in a dataset.
///
/// Countries whose adjacency could not be derived are kept as nodes without
/// edges and remembered in `unavailable` together with the reason.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    edges: BTreeMap<CountryId, Vec<CountryId>>,
    unavailable: BTreeMap<CountryId, String>,
}

impl AdjacencyGraph {
    /// Query `provider` once per country and assemble the graph.
    #[tracing::instrument(skip(provider, dataset), fields(countries = dataset.len()))]
    pub fn build(
        provider: &dyn AdjacencyProvider,
        dataset: &Dataset,
        symmetry: SymmetryPolicy,
    ) -> Result<Self> {
        if dataset.is_empty() {
            return Err(BorderpathError::data_unavailable(
                "dataset",
                "dataset contains no countries",
            ));
        }

        let start = Instant::now();
        let mut graph = AdjacencyGraph::default();

        for id in dataset.ids() {
            match provider.neighbors(id, dataset) {
                Ok(neighbors) => {
                    if let Some(unknown) = neighbors.iter().find(|n| !dataset.contains(n.as_str()))
                    {
                        bail_dataset!("{} reported unknown neighbor {}", id, unknown);
                    }
                    graph.edges.insert(id.clone(), neighbors);
                }
                Err(BorderpathError::DataUnavailable { reason, .. }) => {
                    debug!(id = %id, reason = %reason, "adjacency unavailable");
                    graph.edges.insert(id.clone(), Vec::new());
                    graph.unavailable.insert(id.clone(), reason);
                }
                Err(e) => return Err(e),
            }
        }
        trace_time!(start, "collect_neighbors", countries = dataset.len());

        graph.apply_symmetry(symmetry)?;

        debug!(
            countries = graph.node_count(),
            borders = graph.border_count(),
            unavailable = graph.unavailable.len(),
            elapsed = ?start.elapsed(),
            "build_graph"
        );
        Ok(graph)
    }

    /// Check that every edge among available countries has its reverse,
    /// repairing or rejecting according to `policy`.
    fn apply_symmetry(&mut self, policy: SymmetryPolicy) -> Result<()> {
        if policy == SymmetryPolicy::Preserve {
            return Ok(());
        }

        let mut missing: Vec<(CountryId, CountryId)> = Vec::new();
        for (from, neighbors) in &self.edges {
            for to in neighbors {
                if self.unavailable.contains_key(to) {
                    continue;
                }
                let mirrored = self
                    .edges
                    .get(to)
                    .is_some_and(|back| back.binary_search(from).is_ok());
                if !mirrored {
                    missing.push((to.clone(), from.clone()));
                }
            }
        }

        if policy == SymmetryPolicy::Strict {
            if let Some((to, from)) = missing.into_iter().next() {
                return Err(BorderpathError::AsymmetricAdjacency {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            return Ok(());
        }

        for (at, add) in missing {
            warn!(from = %add, to = %at, "adding missing reverse border");
            if let Some(list) = self.edges.get_mut(&at) {
                if let Err(pos) = list.binary_search(&add) {
                    list.insert(pos, add);
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Sorted neighbors, or `None` for a country outside the graph
    pub fn neighbors(&self, id: &str) -> Option<&[CountryId]> {
        self.edges.get(id).map(Vec::as_slice)
    }

    /// Why adjacency is unknown for `id`, if it is
    pub fn unavailable_reason(&self, id: &str) -> Option<&str> {
        self.unavailable.get(id).map(String::as_str)
    }

    pub fn unavailable(&self) -> impl Iterator<Item = (&CountryId, &str)> {
        self.unavailable.iter().map(|(id, r)| (id, r.as_str()))
    }

    /// Countries in id order with their neighbors
    pub fn iter(&self) -> impl Iterator<Item = (&CountryId, &[CountryId])> {
        self.edges.iter().map(|(id, n)| (id, n.as_slice()))
    }

    pub(crate) fn key(&self, id: &str) -> Option<&CountryId> {
        self.edges.get_key_value(id).map(|(k, _)| k)
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Directed edge count
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Unordered pairs of bordering countries
    pub fn border_count(&self) -> usize {
        self.iter()
            .map(|(id, neighbors)| {
                neighbors
                    .iter()
                    .filter(|n| *n > id || !self.has_edge(n.as_str(), id.as_str()))
                    .count()
            })
            .sum()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges
            .get(from)
            .is_some_and(|n| n.binary_search_by(|c| c.as_str().cmp(to)).is_ok())
    }

    /// Validate a search endpoint: present in the graph and with known adjacency
    pub fn check_endpoint(&self, id: &str) -> Result<&CountryId> {
        let key = self
            .key(id)
            .ok_or_else(|| BorderpathError::country_not_found(id))?;
        if let Some(reason) = self.unavailable_reason(id) {
            return Err(BorderpathError::data_unavailable(id, reason));
        }
        Ok(key)
    }

    /// Plain adjacency list of available countries (loadable by `ListAdjacency`)
    pub fn to_adjacency_list(&self) -> BTreeMap<CountryId, Vec<CountryId>> {
        self.edges
            .iter()
            .filter(|(id, _)| !self.unavailable.contains_key(*id))
            .map(|(id, n)| (id.clone(), n.clone()))
            .collect()
    }
}
