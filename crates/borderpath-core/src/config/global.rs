//! Config file discovery (`~/.config/borderpath/config.toml`)

use std::path::{Path, PathBuf};

use crate::error::Result;

const CONFIG_DIR: &str = "borderpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "BORDERPATH_CONFIG_DIR";

/// Find the config file to load.
///
/// An explicit path always wins, even when it does not exist (loading it
/// then reports the error). Otherwise `$BORDERPATH_CONFIG_DIR/config.toml`
/// or the platform config directory is used if the file is present.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }

    let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => dirs::config_dir().map(|dir| dir.join(CONFIG_DIR)),
    };

    Ok(existing_config_in(config_dir.as_deref()))
}

fn existing_config_in(dir: Option<&Path>) -> Option<PathBuf> {
    let path = dir?.join(CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Returns the source description for display purposes
pub fn source_display() -> String {
    if std::env::var_os(CONFIG_DIR_ENV_VAR).is_some() {
        format!("${}/{}", CONFIG_DIR_ENV_VAR, CONFIG_FILE)
    } else {
        format!("~/.config/{}/{}", CONFIG_DIR, CONFIG_FILE)
    }
}
