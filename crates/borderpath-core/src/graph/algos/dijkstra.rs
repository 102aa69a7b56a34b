use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use crate::dataset::{CountryId, Dataset};
use crate::error::Result;
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::types::HopCost;
use crate::graph::weights::{checked_weight, EdgeWeight};

/// Min-heap entry (wrapped in `Reverse`), ordered by accumulated cost and
/// then by country id so equal-cost routes resolve deterministically.
#[derive(Debug, Clone)]
pub struct HeapEntry<'g> {
    pub accumulated_cost: HopCost,
    pub country: &'g CountryId,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.country.cmp(other.country))
    }
}

/// Predecessor map of a finished search
pub type Predecessors<'g> = HashMap<&'g CountryId, &'g CountryId>;

/// Lowest-cost search from `from` to `to` under `weight`.
///
/// Returns the predecessor map and total cost, or `None` when `to` is not
/// reachable. Endpoints must already be validated; a negative or
/// non-finite edge weight aborts the search with `InvalidValue`.
#[tracing::instrument(skip(graph, dataset, weight))]
pub fn dijkstra_search<'g>(
    graph: &'g AdjacencyGraph,
    dataset: &Dataset,
    from: &'g CountryId,
    to: &'g CountryId,
    weight: &dyn EdgeWeight,
) -> Result<Option<(Predecessors<'g>, HopCost)>> {
    let mut best: HashMap<&CountryId, HopCost> = HashMap::new();
    let mut predecessors: Predecessors<'g> = HashMap::new();
    let mut heap = BinaryHeap::new();

    best.insert(from, HopCost::ZERO);
    heap.push(Reverse(HeapEntry {
        accumulated_cost: HopCost::ZERO,
        country: from,
    }));

    while let Some(Reverse(HeapEntry {
        accumulated_cost,
        country,
    })) = heap.pop()
    {
        if country == to {
            return Ok(Some((predecessors, accumulated_cost)));
        }

        // Stale entry superseded by a cheaper one
        if best
            .get(country)
            .is_some_and(|b| b.total_cmp(&accumulated_cost) == Ordering::Less)
        {
            continue;
        }

        for neighbor in graph.neighbors(country.as_str()).unwrap_or_default() {
            let next = accumulated_cost + checked_weight(weight, country, neighbor, dataset)?;
            let improves = best
                .get(neighbor)
                .map_or(true, |b| next.total_cmp(b) == Ordering::Less);
            if improves {
                best.insert(neighbor, next);
                predecessors.insert(neighbor, country);
                heap.push(Reverse(HeapEntry {
                    accumulated_cost: next,
                    country: neighbor,
                }));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests;
