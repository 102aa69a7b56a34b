//! Edge weights for weighted route search

use tracing::trace;

use crate::bail_invalid;
use crate::dataset::{Coord, CountryId, Dataset};
use crate::error::Result;
use crate::graph::types::{HopCost, WeightKind};

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Cost of crossing from one country into a bordering one.
///
/// Implementations must return finite, non-negative costs; anything else is
/// rejected by the search.
pub trait EdgeWeight: Send + Sync {
    fn weight(&self, from: &CountryId, to: &CountryId, dataset: &Dataset) -> Result<HopCost>;
}

impl<F> EdgeWeight for F
where
    F: Fn(&CountryId, &CountryId) -> f64 + Send + Sync,
{
    fn weight(&self, from: &CountryId, to: &CountryId, _dataset: &Dataset) -> Result<HopCost> {
        Ok(HopCost::new(self(from, to)))
    }
}

/// Every crossing costs 1, so weighted search counts hops
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitWeight;

impl EdgeWeight for UnitWeight {
    fn weight(&self, _from: &CountryId, _to: &CountryId, _dataset: &Dataset) -> Result<HopCost> {
        Ok(HopCost::DEFAULT)
    }
}

/// Great-circle distance in kilometres between boundary centroids.
///
/// A crossing where either side has no geometry (possible with an external
/// adjacency list) costs 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentroidDistance;

impl EdgeWeight for CentroidDistance {
    fn weight(&self, from: &CountryId, to: &CountryId, dataset: &Dataset) -> Result<HopCost> {
        match (centroid(from, dataset)?, centroid(to, dataset)?) {
            (Some(a), Some(b)) => Ok(HopCost::new(haversine_km(a, b))),
            _ => {
                trace!(from = %from, to = %to, "no centroid; using unit cost");
                Ok(HopCost::DEFAULT)
            }
        }
    }
}

fn centroid(id: &CountryId, dataset: &Dataset) -> Result<Option<Coord>> {
    Ok(dataset
        .require(id.as_str())?
        .boundary()
        .and_then(|g| g.centroid()))
}

/// Haversine distance between two `(lon, lat)` positions
pub fn haversine_km(a: Coord, b: Coord) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

pub fn weight_for(kind: WeightKind) -> Box<dyn EdgeWeight> {
    match kind {
        WeightKind::Unit => Box::new(UnitWeight),
        WeightKind::CentroidDistance => Box::new(CentroidDistance),
    }
}

/// Evaluate `weight` and reject negative or non-finite results
pub(crate) fn checked_weight(
    weight: &dyn EdgeWeight,
    from: &CountryId,
    to: &CountryId,
    dataset: &Dataset,
) -> Result<HopCost> {
    let cost = weight.weight(from, to, dataset)?;
    if !cost.is_valid() {
        bail_invalid!(&format!("edge weight {from} -> {to}"), cost.value());
    }
    Ok(cost)
}
