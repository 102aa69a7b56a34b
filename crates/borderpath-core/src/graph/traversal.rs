use crate::dataset::{CountryId, Dataset};
use crate::error::Result;

/// Source of border adjacency for one country.
///
/// Contract for implementors:
/// - an id absent from `dataset` is `CountryNotFound`, never an empty list;
/// - a country whose adjacency cannot be derived is `DataUnavailable`;
/// - the result is sorted by id, free of duplicates and never contains
///   `id` itself, so searches over it are reproducible;
/// - for a fixed dataset, repeated calls return the same result.
///
/// Calls may cost O(dataset size) or more; callers memoize through
/// `AdjacencyGraph` rather than querying per search.
pub trait AdjacencyProvider: Send + Sync {
    fn neighbors(&self, id: &CountryId, dataset: &Dataset) -> Result<Vec<CountryId>>;
}

impl<P: AdjacencyProvider + ?Sized> AdjacencyProvider for Box<P> {
    fn neighbors(&self, id: &CountryId, dataset: &Dataset) -> Result<Vec<CountryId>> {
        (**self).neighbors(id, dataset)
    }
}

impl<P: AdjacencyProvider + ?Sized> AdjacencyProvider for &P {
    fn neighbors(&self, id: &CountryId, dataset: &Dataset) -> Result<Vec<CountryId>> {
        (**self).neighbors(id, dataset)
    }
}

/// Sort, de-duplicate and drop self-references
pub(crate) fn normalize_neighbors(id: &CountryId, mut neighbors: Vec<CountryId>) -> Vec<CountryId> {
    neighbors.retain(|n| n != id);
    neighbors.sort();
    neighbors.dedup();
    neighbors
}
