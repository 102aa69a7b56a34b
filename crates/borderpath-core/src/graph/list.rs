//! Externally supplied adjacency lists

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::traversal::{normalize_neighbors, AdjacencyProvider};
use crate::bail_dataset;
use crate::dataset::{CountryId, Dataset};
use crate::error::{BorderpathError, Result};

/// Adjacency read from a precomputed list (`{"DEU": ["AUT", ...], ...}`).
///
/// This is also the JSON shape the `graph` command writes, so an expensive
/// geometric build can be done once and reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAdjacency {
    entries: BTreeMap<CountryId, Vec<CountryId>>,
}

impl ListAdjacency {
    pub fn new<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CountryId, N)>,
        N: IntoIterator<Item = CountryId>,
    {
        let entries = entries
            .into_iter()
            .map(|(id, neighbors)| {
                let neighbors = normalize_neighbors(&id, neighbors.into_iter().collect());
                (id, neighbors)
            })
            .collect();
        ListAdjacency { entries }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: BTreeMap<CountryId, Vec<CountryId>> = serde_json::from_str(content)?;
        Ok(Self::new(raw))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BorderpathError::io_operation("read adjacency list", path.display(), e))?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every id in the list, keys and neighbors alike, must exist in `dataset`
    pub fn validate_against(&self, dataset: &Dataset) -> Result<()> {
        for (id, neighbors) in &self.entries {
            if !dataset.contains(id.as_str()) {
                bail_dataset!("adjacency list names unknown country {}", id);
            }
            if let Some(unknown) = neighbors.iter().find(|n| !dataset.contains(n.as_str())) {
                bail_dataset!("adjacency list entry {} names unknown country {}", id, unknown);
            }
        }
        Ok(())
    }
}

impl AdjacencyProvider for ListAdjacency {
    fn neighbors(&self, id: &CountryId, dataset: &Dataset) -> Result<Vec<CountryId>> {
        dataset.require(id.as_str())?;
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| BorderpathError::data_unavailable(id, "not present in adjacency list"))
    }
}
