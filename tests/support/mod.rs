use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for borderpath, isolated from any user config
pub fn borderpath() -> Command {
    let mut cmd = cargo_bin_cmd!("borderpath");
    cmd.env_remove("BORDERPATH_DATASET")
        .env_remove("BORDERPATH_LOG")
        .env("BORDERPATH_CONFIG_DIR", "/nonexistent-borderpath-config");
    cmd
}

fn square(id: &str, name: &str, name_de: &str, lon: f64, lat: f64) -> String {
    format!(
        r#"{{
            "type": "Feature",
            "properties": {{ "ISO_A3": "{id}", "NAME": "{name}", "NAME_EN": "{name}", "NAME_DE": "{name_de}" }},
            "geometry": {{ "type": "Polygon", "coordinates": [[
                [{lon},{lat}],[{lon1},{lat}],[{lon1},{lat1}],[{lon},{lat1}],[{lon},{lat}]
            ]] }}
        }}"#,
        lon1 = lon + 1.0,
        lat1 = lat + 1.0,
    )
}

/// A row of four countries, a distant island and a feature without geometry:
///
/// ```text
/// PRT ESP FRA DEU        ISL (far away)
/// ```
pub fn fixture_geojson() -> String {
    let features = [
        square("PRT", "Portugal", "Portugal", 0.0, 0.0),
        square("ESP", "Spain", "Spanien", 1.0, 0.0),
        square("FRA", "France", "Frankreich", 2.0, 0.0),
        square("DEU", "Germany", "Deutschland", 3.0, 0.0),
        square("ISL", "Iceland", "Island", 20.0, 20.0),
        r#"{ "type": "Feature", "properties": { "ISO_A3": "ATA", "NAME": "Antarctica" }, "geometry": null }"#
            .to_string(),
    ];
    format!(
        r#"{{ "type": "FeatureCollection", "features": [{}] }}"#,
        features.join(",")
    )
}

/// Temporary directory holding `countries.geojson`
pub fn setup_dataset() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("countries.geojson");
    fs::write(&path, fixture_geojson()).unwrap();
    (dir, path)
}

/// Write a config file next to the dataset and return its path
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}
