//! Configuration for borderpath
//!
//! Configuration is read from a TOML file (`config.toml`). Every field has a
//! default, so a missing file or a partial file is valid.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{BorderpathError, Result};

pub use global::resolve_config_path;
pub use types::{
    AdjacencyConfig, BorderpathConfig, DatasetConfig, SearchConfig, DEFAULT_ID_PROPERTIES,
    DEFAULT_TOLERANCE,
};

impl BorderpathConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BorderpathError::io_operation("read config", path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BorderpathConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration at `explicit`, or the discovered config file,
    /// or defaults when neither exists.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit)? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let tolerance = self.adjacency.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            bail_invalid!("adjacency.tolerance", tolerance);
        }
        if self.dataset.id_properties.is_empty() {
            bail_invalid!("dataset.id_properties", "[]");
        }
        Ok(())
    }
}
