//! Geometric adjacency: countries whose boundaries touch

mod grid;

use tracing::trace;

use self::grid::SegmentGrid;
use super::traversal::{normalize_neighbors, AdjacencyProvider};
use crate::config::{AdjacencyConfig, DEFAULT_TOLERANCE};
use crate::dataset::{CountryId, Dataset, Geometry, Segment};
use crate::error::{BorderpathError, Result};

/// Derives adjacency from boundary geometry.
///
/// Two countries border each other when some boundary segment of one comes
/// within `tolerance` degrees of a boundary segment of the other. A single
/// shared point (a tripoint or corner contact) is enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryAdjacency {
    tolerance: f64,
}

impl BoundaryAdjacency {
    pub fn new(tolerance: f64) -> Self {
        BoundaryAdjacency { tolerance }
    }

    pub fn from_config(config: &AdjacencyConfig) -> Self {
        Self::new(config.tolerance)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Boundary-contact predicate for two geometries
    pub fn borders(&self, a: &Geometry, b: &Geometry) -> bool {
        let (Some(a_box), Some(b_box)) = (a.bbox(), b.bbox()) else {
            return false;
        };
        let a_box = a_box.expand(self.tolerance);
        let b_box = b_box.expand(self.tolerance);
        if !a_box.intersects(&b_box) {
            return false;
        }

        // Only segments inside the other country's box can touch it
        let a_candidates: Vec<Segment> = a
            .segments()
            .filter(|s| s.bbox().intersects(&b_box))
            .collect();
        let Some(grid) = SegmentGrid::new(a_candidates, self.tolerance) else {
            return false;
        };

        b.segments()
            .filter(|s| s.bbox().intersects(&a_box))
            .any(|sb| grid.any_within(&sb, self.tolerance))
    }
}

impl Default for BoundaryAdjacency {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl AdjacencyProvider for BoundaryAdjacency {
    fn neighbors(&self, id: &CountryId, dataset: &Dataset) -> Result<Vec<CountryId>> {
        let feature = dataset.require(id.as_str())?;
        let geometry = feature.boundary().ok_or_else(|| {
            BorderpathError::data_unavailable(id, "feature has no boundary geometry")
        })?;

        let neighbors: Vec<CountryId> = dataset
            .features()
            .iter()
            .filter(|other| other.id != *id)
            .filter_map(|other| other.boundary().map(|g| (&other.id, g)))
            .filter(|(_, other_geometry)| self.borders(geometry, other_geometry))
            .map(|(other_id, _)| other_id.clone())
            .collect();

        trace!(id = %id, count = neighbors.len(), "boundary_neighbors");
        Ok(normalize_neighbors(id, neighbors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Coord, CountryFeature};

    fn square(x: f64, y: f64) -> Geometry {
        Geometry::polygon(vec![vec![
            Coord::new(x, y),
            Coord::new(x + 1.0, y),
            Coord::new(x + 1.0, y + 1.0),
            Coord::new(x, y + 1.0),
            Coord::new(x, y),
        ]])
    }

    /// A B C in a row, D on top of B, E far away, F with no geometry
    fn dataset() -> Dataset {
        Dataset::new(vec![
            CountryFeature::new("C").with_geometry(square(2.0, 0.0)),
            CountryFeature::new("A").with_geometry(square(0.0, 0.0)),
            CountryFeature::new("B").with_geometry(square(1.0, 0.0)),
            CountryFeature::new("D").with_geometry(square(1.0, 1.0)),
            CountryFeature::new("E").with_geometry(square(10.0, 10.0)),
            CountryFeature::new("F"),
        ])
        .unwrap()
    }

    fn ids(list: &[CountryId]) -> Vec<&str> {
        list.iter().map(CountryId::as_str).collect()
    }

    #[test]
    fn test_shared_edges_sorted() {
        let provider = BoundaryAdjacency::default();
        let ds = dataset();
        let b = provider.neighbors(&"B".into(), &ds).unwrap();
        assert_eq!(ids(&b), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_corner_contact_counts() {
        let provider = BoundaryAdjacency::default();
        let ds = dataset();
        // A touches D only at (1, 1)
        let a = provider.neighbors(&"A".into(), &ds).unwrap();
        assert_eq!(ids(&a), vec!["B", "D"]);
    }

    #[test]
    fn test_island_has_no_neighbors() {
        let provider = BoundaryAdjacency::default();
        let e = provider.neighbors(&"E".into(), &dataset()).unwrap();
        assert!(e.is_empty());
    }

    #[test]
    fn test_missing_geometry_is_unavailable() {
        let provider = BoundaryAdjacency::default();
        let err = provider.neighbors(&"F".into(), &dataset()).unwrap_err();
        assert!(matches!(err, BorderpathError::DataUnavailable { .. }));
    }

    #[test]
    fn test_unknown_country_is_not_found() {
        let provider = BoundaryAdjacency::default();
        let err = provider
            .neighbors(&"ZZ_NOT_A_COUNTRY".into(), &dataset())
            .unwrap_err();
        assert!(matches!(err, BorderpathError::CountryNotFound { .. }));
    }

    #[test]
    fn test_tolerance_bridges_gaps() {
        let gap = Dataset::new(vec![
            CountryFeature::new("L").with_geometry(square(0.0, 0.0)),
            CountryFeature::new("R").with_geometry(square(1.001, 0.0)),
        ])
        .unwrap();

        let strict = BoundaryAdjacency::new(1e-6);
        assert!(strict.neighbors(&"L".into(), &gap).unwrap().is_empty());

        let loose = BoundaryAdjacency::new(0.01);
        assert_eq!(ids(&loose.neighbors(&"L".into(), &gap).unwrap()), vec!["R"]);
    }

    /// Strip bounded below by a zigzag of `n` segments starting at `lat`
    fn zigzag_strip(n: usize, lat: f64, below: bool) -> Geometry {
        let step = 1e-3;
        let mut ring: Vec<Coord> = (0..=n)
            .map(|i| {
                let wiggle = if i % 2 == 0 { 0.0 } else { step / 2.0 };
                Coord::new(i as f64 * step, lat + wiggle)
            })
            .collect();
        let far = if below { lat - 1.0 } else { lat + 1.0 };
        ring.push(Coord::new(n as f64 * step, far));
        ring.push(Coord::new(0.0, far));
        ring.push(ring[0]);
        Geometry::polygon(vec![ring])
    }

    #[test]
    fn test_dense_near_miss_borders() {
        let n = 20_000;
        let south = zigzag_strip(n, 0.0, true);
        let provider = BoundaryAdjacency::default();

        assert!(!provider.borders(&south, &zigzag_strip(n, 5e-5, false)));
        assert!(provider.borders(&south, &zigzag_strip(n, 0.0, false)));
    }

    #[test]
    fn test_symmetric_on_geometry() {
        let provider = BoundaryAdjacency::default();
        let ds = dataset();
        for a in ds.features().iter().filter(|f| f.boundary().is_some()) {
            for b in provider.neighbors(&a.id, &ds).unwrap() {
                let back = provider.neighbors(&b, &ds).unwrap();
                assert!(back.contains(&a.id), "{} -> {} not mirrored", a.id, b);
            }
        }
    }
}
