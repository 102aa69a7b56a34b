//! Geographic dataset: country features with identifiers, names and borders
//!
//! A `Dataset` is immutable once built and is shared read-only by every
//! query (usually behind an `Arc`).

pub mod geometry;
pub mod load;
pub mod names;

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bail_dataset;
use crate::error::{BorderpathError, Result};

pub use geometry::{BoundingBox, Coord, Geometry, Polygon, Ring, Segment};
pub use load::{from_geojson_str, load_from_path};
pub use names::Language;

/// Stable identifier of one country feature (e.g. an ISO 3166 alpha-3 code)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(String);

impl CountryId {
    pub fn new(id: impl Into<String>) -> Self {
        CountryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryId {
    fn from(id: &str) -> Self {
        CountryId(id.to_string())
    }
}

impl From<String> for CountryId {
    fn from(id: String) -> Self {
        CountryId(id)
    }
}

impl Borrow<str> for CountryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One country: identifier, localized names and boundary geometry
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFeature {
    pub id: CountryId,
    /// Fallback name (`NAME` / `ADMIN` property)
    pub name: Option<String>,
    pub names: BTreeMap<Language, String>,
    /// `None` when the source feature had no usable polygon geometry
    pub geometry: Option<Geometry>,
}

impl CountryFeature {
    pub fn new(id: impl Into<CountryId>) -> Self {
        CountryFeature {
            id: id.into(),
            name: None,
            names: BTreeMap::new(),
            geometry: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_localized_name(mut self, language: Language, name: impl Into<String>) -> Self {
        self.names.insert(language, name.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Geometry with at least one boundary segment
    pub fn boundary(&self) -> Option<&Geometry> {
        self.geometry.as_ref().filter(|g| !g.is_empty())
    }

    /// Name in `language`, then English, then the fallback name, then the id
    pub fn display_name(&self, language: Language) -> &str {
        self.names
            .get(&language)
            .or_else(|| self.names.get(&Language::En))
            .map(String::as_str)
            .or(self.name.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

/// Immutable collection of country features with unique identifiers
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    features: Vec<CountryFeature>,
    index: HashMap<CountryId, usize>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate identifiers
    pub fn new(features: Vec<CountryFeature>) -> Result<Self> {
        let mut index = HashMap::with_capacity(features.len());
        for (pos, feature) in features.iter().enumerate() {
            if index.insert(feature.id.clone(), pos).is_some() {
                bail_dataset!("duplicate country identifier {}", feature.id);
            }
        }
        Ok(Dataset { features, index })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[CountryFeature] {
        &self.features
    }

    pub fn ids(&self) -> impl Iterator<Item = &CountryId> {
        self.features.iter().map(|f| &f.id)
    }

    pub fn get(&self, id: &str) -> Option<&CountryFeature> {
        self.index.get(id).map(|&pos| &self.features[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Like `get`, but a missing country is a `CountryNotFound` error
    pub fn require(&self, id: &str) -> Result<&CountryFeature> {
        self.get(id)
            .ok_or_else(|| BorderpathError::country_not_found(id))
    }

    /// Resolve user input to an identifier.
    ///
    /// Tries, in order: exact id, case-insensitive id, name in `language`,
    /// English name, fallback name (names compared case-insensitively).
    pub fn resolve(&self, query: &str, language: Language) -> Result<CountryId> {
        let query = query.trim();
        if let Some(feature) = self.get(query) {
            return Ok(feature.id.clone());
        }

        let lowered = query.to_lowercase();
        let matches = |name: Option<&String>| name.is_some_and(|n| n.to_lowercase() == lowered);

        let found = self
            .features
            .iter()
            .find(|f| f.id.as_str().eq_ignore_ascii_case(query))
            .or_else(|| self.features.iter().find(|f| matches(f.names.get(&language))))
            .or_else(|| {
                self.features
                    .iter()
                    .find(|f| matches(f.names.get(&Language::En)))
            })
            .or_else(|| self.features.iter().find(|f| matches(f.name.as_ref())));

        found
            .map(|f| f.id.clone())
            .ok_or_else(|| BorderpathError::country_not_found(query))
    }
}
