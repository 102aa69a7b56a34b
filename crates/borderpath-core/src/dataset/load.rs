//! GeoJSON loading (Natural Earth admin-0 `FeatureCollection` layout)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{CountryFeature, CountryId, Coord, Dataset, Geometry, Language, Polygon, Ring};
use crate::bail_dataset;
use crate::config::DatasetConfig;
use crate::error::{BorderpathError, Result};
use crate::trace_time;

/// Natural Earth placeholder for "no code assigned"
const MISSING_CODE: &str = "-99";

/// Properties used for the fallback name, in order
const FALLBACK_NAME_PROPERTIES: &[&str] = &["NAME", "ADMIN", "NAME_LONG"];

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

type RawRing = Vec<Vec<f64>>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon {
        coordinates: Vec<RawRing>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<RawRing>>,
    },
    #[serde(other)]
    Unsupported,
}

/// Read a GeoJSON dataset from disk
pub fn load_from_path(path: &Path, config: &DatasetConfig) -> Result<Dataset> {
    if !path.exists() {
        return Err(BorderpathError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let start = Instant::now();
    let content = fs::read_to_string(path)
        .map_err(|e| BorderpathError::io_operation("read dataset", path.display(), e))?;
    trace_time!(start, "read_dataset", bytes = content.len());

    from_geojson_str(&content, config)
}

/// Parse a GeoJSON `FeatureCollection` into a dataset.
///
/// Features without any usable identifier are skipped with a warning;
/// duplicate identifiers make the whole dataset invalid.
pub fn from_geojson_str(content: &str, config: &DatasetConfig) -> Result<Dataset> {
    let start = Instant::now();
    let raw: RawCollection = serde_json::from_str(content)?;

    if raw.kind != "FeatureCollection" {
        bail_dataset!("expected a FeatureCollection, found {}", raw.kind);
    }

    let total = raw.features.len();
    let mut features = Vec::with_capacity(total);

    for (pos, raw_feature) in raw.features.into_iter().enumerate() {
        let properties = raw_feature.properties.unwrap_or_default();

        let Some(id) = feature_id(&properties, raw_feature.id.as_ref(), &config.id_properties)
        else {
            let name = properties.get("NAME").and_then(Value::as_str);
            warn!(feature = pos, name, "skipping feature without identifier");
            continue;
        };

        let geometry = match raw_feature.geometry {
            Some(raw_geometry) => convert_geometry(raw_geometry, &id)?,
            None => None,
        };
        if geometry.is_none() {
            debug!(id = %id, "feature has no polygon geometry");
        }

        features.push(CountryFeature {
            id,
            name: fallback_name(&properties),
            names: localized_names(&properties),
            geometry,
        });
    }

    let dataset = Dataset::new(features)?;
    debug!(
        features = total,
        countries = dataset.len(),
        elapsed = ?start.elapsed(),
        "load_dataset"
    );
    Ok(dataset)
}

fn feature_id(
    properties: &Map<String, Value>,
    feature_id: Option<&Value>,
    id_properties: &[String],
) -> Option<CountryId> {
    id_properties
        .iter()
        .filter_map(|key| properties.get(key))
        .chain(feature_id)
        .find_map(usable_code)
        .map(CountryId::new)
}

fn usable_code(value: &Value) -> Option<String> {
    let code = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!code.is_empty() && code != MISSING_CODE).then_some(code)
}

fn fallback_name(properties: &Map<String, Value>) -> Option<String> {
    FALLBACK_NAME_PROPERTIES
        .iter()
        .filter_map(|key| properties.get(*key).and_then(Value::as_str))
        .find(|name| !name.trim().is_empty())
        .map(str::to_string)
}

fn localized_names(properties: &Map<String, Value>) -> BTreeMap<Language, String> {
    Language::ALL
        .iter()
        .filter_map(|lang| {
            properties
                .get(lang.column())
                .and_then(Value::as_str)
                .filter(|name| !name.trim().is_empty())
                .map(|name| (*lang, name.to_string()))
        })
        .collect()
}

fn convert_geometry(raw: RawGeometry, id: &CountryId) -> Result<Option<Geometry>> {
    let polygons = match raw {
        RawGeometry::Polygon { coordinates } => vec![convert_polygon(coordinates, id)?],
        RawGeometry::MultiPolygon { coordinates } => coordinates
            .into_iter()
            .map(|polygon| convert_polygon(polygon, id))
            .collect::<Result<Vec<_>>>()?,
        RawGeometry::Unsupported => {
            warn!(id = %id, "unsupported geometry type; treating as unavailable");
            return Ok(None);
        }
    };

    let geometry = Geometry::new(polygons);
    Ok((!geometry.is_empty()).then_some(geometry))
}

fn convert_polygon(rings: Vec<RawRing>, id: &CountryId) -> Result<Polygon> {
    let rings = rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|position| match position.as_slice() {
                    [lon, lat, ..] => Ok(Coord::new(*lon, *lat)),
                    _ => Err(BorderpathError::invalid_dataset(format!(
                        "position with fewer than two coordinates in {}",
                        id
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Ring)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon { rings })
}
