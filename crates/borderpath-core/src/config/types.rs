//! Configuration type definitions

use crate::dataset::Language;
use crate::graph::types::{SearchAlgorithm, SymmetryPolicy, WeightKind};
use serde::{Deserialize, Serialize};

/// Natural Earth properties tried, in order, when picking a country identifier
pub const DEFAULT_ID_PROPERTIES: &[&str] = &["ISO_A3", "ADM0_A3", "ISO_A2"];

/// Default distance (in degrees) under which two boundary segments touch
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderpathConfig {
    /// How features are read from the GeoJSON dataset
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// How adjacency is derived from geometry
    #[serde(default)]
    pub adjacency: AdjacencyConfig,

    /// Default search behavior
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for dataset loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Feature properties tried in order for the country identifier
    #[serde(default = "default_id_properties")]
    pub id_properties: Vec<String>,

    /// Language used when displaying and resolving country names
    #[serde(default)]
    pub language: Language,
}

/// Configuration for adjacency derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyConfig {
    /// Maximum segment distance (degrees) still counted as a shared border
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// What to do when the provider reports A-B but not B-A
    #[serde(default)]
    pub symmetry: SymmetryPolicy,
}

/// Configuration for route searches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used by `path` unless overridden
    #[serde(default)]
    pub algorithm: SearchAlgorithm,

    /// Edge weight used by the weighted algorithm
    #[serde(default)]
    pub weight: WeightKind,
}

fn default_id_properties() -> Vec<String> {
    DEFAULT_ID_PROPERTIES.iter().map(|s| s.to_string()).collect()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            id_properties: default_id_properties(),
            language: Language::default(),
        }
    }
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        AdjacencyConfig {
            tolerance: default_tolerance(),
            symmetry: SymmetryPolicy::default(),
        }
    }
}
