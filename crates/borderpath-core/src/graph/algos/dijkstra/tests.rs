use super::*;
use crate::dataset::CountryFeature;
use crate::error::BorderpathError;
use crate::graph::bfs::find_path;
use crate::graph::list::ListAdjacency;
use crate::graph::types::{SearchAlgorithm, SymmetryPolicy};
use crate::graph::weights::UnitWeight;

fn build(json: &str, ids: &[&str]) -> (AdjacencyGraph, Dataset) {
    let ds = Dataset::new(ids.iter().map(|id| CountryFeature::new(*id)).collect()).unwrap();
    let list = ListAdjacency::from_json_str(json).unwrap();
    let graph = AdjacencyGraph::build(&list, &ds, SymmetryPolicy::Enforce).unwrap();
    (graph, ds)
}

fn route(result: &crate::graph::types::PathResult) -> Vec<&str> {
    result.path.countries().iter().map(CountryId::as_str).collect()
}

/// Weight table for a square A-B-D / A-C-D where the route via C is cheaper
fn detour_weight(from: &CountryId, to: &CountryId) -> f64 {
    let mut pair = [from.as_str(), to.as_str()];
    pair.sort_unstable();
    match pair {
        ["A", "B"] => 10.0,
        ["B", "D"] => 10.0,
        ["A", "C"] => 1.0,
        ["C", "D"] => 1.0,
        _ => 1.0,
    }
}

#[test]
fn test_heap_entry_ordering() {
    let a = CountryId::from("A");
    let b = CountryId::from("B");
    let low_a = HeapEntry {
        accumulated_cost: HopCost::new(1.0),
        country: &a,
    };
    let high_b = HeapEntry {
        accumulated_cost: HopCost::new(2.0),
        country: &b,
    };
    let low_b = HeapEntry {
        accumulated_cost: HopCost::new(1.0),
        country: &b,
    };

    assert_eq!(low_a.cmp(&high_b), Ordering::Less);
    assert_eq!(high_b.cmp(&low_a), Ordering::Greater);
    // Equal cost falls back to id order
    assert_eq!(low_a.cmp(&low_b), Ordering::Less);
    assert_eq!(low_a, low_a.clone());
    assert_ne!(low_a, low_b);

    let mut heap = BinaryHeap::from([Reverse(low_b), Reverse(high_b), Reverse(low_a)]);
    assert_eq!(heap.pop().map(|Reverse(e)| e.country.as_str()), Some("A"));
}

#[test]
fn test_prefers_cheaper_detour() {
    let (graph, ds) = build(
        r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}"#,
        &["A", "B", "C", "D"],
    );

    let weighted = find_path(
        &graph,
        &ds,
        "A",
        "D",
        SearchAlgorithm::Dijkstra,
        &detour_weight,
    )
    .unwrap();
    assert_eq!(route(&weighted), vec!["A", "C", "D"]);
    assert_eq!(weighted.cost, HopCost::new(2.0));

    // Unweighted search ignores cost and takes the lower id
    let unweighted =
        find_path(&graph, &ds, "A", "D", SearchAlgorithm::Bfs, &detour_weight).unwrap();
    assert_eq!(route(&unweighted), vec!["A", "B", "D"]);
    assert_eq!(unweighted.cost, HopCost::new(20.0));
}

#[test]
fn test_unit_weight_matches_bfs_length() {
    let (graph, ds) = build(
        r#"{"A": ["B", "E"], "B": ["C"], "C": ["D"], "E": ["F"], "F": ["D"], "D": []}"#,
        &["A", "B", "C", "D", "E", "F"],
    );
    let bfs = find_path(&graph, &ds, "A", "D", SearchAlgorithm::Bfs, &UnitWeight).unwrap();
    let dijkstra =
        find_path(&graph, &ds, "A", "D", SearchAlgorithm::Dijkstra, &UnitWeight).unwrap();
    assert_eq!(bfs.hops, dijkstra.hops);
    assert_eq!(dijkstra.cost, HopCost::new(3.0));
    assert_eq!(route(&dijkstra), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_unreachable_returns_none() {
    let (graph, ds) = build(r#"{"A": ["B"], "C": []}"#, &["A", "B", "C"]);
    let a = CountryId::from("A");
    let c = CountryId::from("C");
    let from = graph.key(a.as_str()).unwrap();
    let to = graph.key(c.as_str()).unwrap();
    assert!(dijkstra_search(&graph, &ds, from, to, &UnitWeight)
        .unwrap()
        .is_none());

    let err = find_path(&graph, &ds, "A", "C", SearchAlgorithm::Dijkstra, &UnitWeight).unwrap_err();
    assert!(matches!(err, BorderpathError::NoPathFound { .. }));
}

#[test]
fn test_negative_weight_rejected() {
    let (graph, ds) = build(r#"{"A": ["B"], "B": []}"#, &["A", "B"]);
    let negative = |_: &CountryId, _: &CountryId| -1.0;
    let err = find_path(&graph, &ds, "A", "B", SearchAlgorithm::Dijkstra, &negative).unwrap_err();
    assert!(matches!(err, BorderpathError::InvalidValue { .. }));
}
