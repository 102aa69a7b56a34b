mod path;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::dataset::{CountryId, Dataset};
use crate::error::{BorderpathError, Result};
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::algos::dijkstra::dijkstra_search;
use crate::graph::weights::{checked_weight, EdgeWeight};
use crate::graph::types::{HopCost, Path, PathResult, SearchAlgorithm};

pub(crate) use path::reconstruct_path;

/// Breadth-first search from `from` to `to`.
///
/// Neighbors are expanded in graph order (sorted by id), so among several
/// shortest routes the one through lower ids is found first.
fn bfs_search<'g>(
    graph: &'g AdjacencyGraph,
    from: &'g CountryId,
    to: &'g CountryId,
) -> (bool, HashMap<&'g CountryId, &'g CountryId>) {
    let mut visited: HashSet<&CountryId> = HashSet::new();
    let mut predecessors: HashMap<&CountryId, &CountryId> = HashMap::new();
    let mut queue: VecDeque<&CountryId> = VecDeque::new();

    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return (true, predecessors);
        }

        for neighbor in graph.neighbors(current.as_str()).unwrap_or_default() {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    (false, predecessors)
}

/// Validate both endpoints, returning the graph-owned keys.
///
/// Unknown ids fail before adjacency is considered, so `CountryNotFound`
/// wins over `DataUnavailable`.
fn resolve_endpoints<'g>(
    graph: &'g AdjacencyGraph,
    from: &str,
    to: &str,
) -> Result<(&'g CountryId, &'g CountryId)> {
    let from_key = graph
        .key(from)
        .ok_or_else(|| BorderpathError::country_not_found(from))?;
    let to_key = graph
        .key(to)
        .ok_or_else(|| BorderpathError::country_not_found(to))?;
    Ok((from_key, to_key))
}

fn no_path(from: &CountryId, to: &CountryId) -> BorderpathError {
    BorderpathError::NoPathFound {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Fewest-crossings route between two countries.
///
/// - unknown id: `CountryNotFound`
/// - `from == to`: the single-country path, even without adjacency data
/// - either endpoint without adjacency data: `DataUnavailable`
/// - no connecting route: `NoPathFound`
#[tracing::instrument(skip(graph), fields(countries = graph.node_count()))]
pub fn shortest_path(graph: &AdjacencyGraph, from: &str, to: &str) -> Result<Path> {
    let (from_key, to_key) = resolve_endpoints(graph, from, to)?;

    if from_key == to_key {
        return Ok(Path::new(vec![from_key.clone()]));
    }

    graph.check_endpoint(from)?;
    graph.check_endpoint(to)?;

    let (found, predecessors) = bfs_search(graph, from_key, to_key);
    if !found {
        return Err(no_path(from_key, to_key));
    }

    reconstruct_path(from_key, to_key, &predecessors)
        .map(Path::new)
        .ok_or_else(|| no_path(from_key, to_key))
}

/// Route search with a selectable algorithm.
///
/// `Bfs` minimizes crossings and reports the summed `weight` of the route it
/// found; `Dijkstra` minimizes the summed `weight`. Both share the error
/// contract of [`shortest_path`].
#[tracing::instrument(skip(graph, dataset, weight), fields(countries = graph.node_count()))]
pub fn find_path(
    graph: &AdjacencyGraph,
    dataset: &Dataset,
    from: &str,
    to: &str,
    algorithm: SearchAlgorithm,
    weight: &dyn EdgeWeight,
) -> Result<PathResult> {
    let (from_key, to_key) = resolve_endpoints(graph, from, to)?;

    let (path, cost) = match algorithm {
        SearchAlgorithm::Bfs => {
            let path = shortest_path(graph, from, to)?;
            let cost = route_cost(&path, dataset, weight)?;
            (path, cost)
        }
        SearchAlgorithm::Dijkstra => {
            if from_key == to_key {
                (Path::new(vec![from_key.clone()]), HopCost::ZERO)
            } else {
                graph.check_endpoint(from)?;
                graph.check_endpoint(to)?;
                let (predecessors, cost) =
                    dijkstra_search(graph, dataset, from_key, to_key, weight)?
                        .ok_or_else(|| no_path(from_key, to_key))?;
                let countries = reconstruct_path(from_key, to_key, &predecessors)
                    .ok_or_else(|| no_path(from_key, to_key))?;
                (Path::new(countries), cost)
            }
        }
    };

    Ok(PathResult {
        from: from_key.clone(),
        to: to_key.clone(),
        algorithm,
        hops: path.hops(),
        path,
        cost,
    })
}

fn route_cost(path: &Path, dataset: &Dataset, weight: &dyn EdgeWeight) -> Result<HopCost> {
    path.countries()
        .windows(2)
        .map(|pair| checked_weight(weight, &pair[0], &pair[1], dataset))
        .sum()
}
