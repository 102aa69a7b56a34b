//! Integration tests for the borderpath CLI
//!
//! These tests run the borderpath binary against a small GeoJSON fixture.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{borderpath, setup_dataset, write_config};

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    borderpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: borderpath"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("neighbors"));
}

#[test]
fn test_missing_dataset_is_usage_error() {
    borderpath()
        .args(["path", "DEU", "ESP"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--dataset"));
}

#[test]
fn test_dataset_file_not_found() {
    borderpath()
        .args(["--dataset", "/nonexistent/countries.geojson", "countries"])
        .assert()
        .code(3);
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_human() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["path", "PRT", "DEU"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Portugal (PRT) -> Spain (ESP) -> France (FRA) -> Germany (DEU)",
        ))
        .stdout(predicate::str::contains("3 border crossings"));
}

#[test]
fn test_path_by_localized_name() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--language", "de", "path", "Spanien", "Deutschland"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Spanien (ESP) -> Frankreich (FRA) -> Deutschland (DEU)",
        ));
}

#[test]
fn test_path_same_country() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["path", "FRA", "FRA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("France (FRA)"))
        .stdout(predicate::str::contains("0 border crossings"));
}

#[test]
fn test_path_json() {
    let (_dir, dataset) = setup_dataset();
    let output = borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--format", "json", "path", "ESP", "DEU"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "ESP");
    assert_eq!(json["to"], "DEU");
    assert_eq!(json["hops"], 2);
    let ids: Vec<&str> = json["path"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ESP", "FRA", "DEU"]);
}

#[test]
fn test_path_records() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--format", "records", "path", "PRT", "FRA"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H borderpath=1 records=1 mode=path from=PRT to=FRA",
        ))
        .stdout(predicate::str::contains("P PRT FRA hops=2"))
        .stdout(predicate::str::contains(r#"N ESP "Spain""#));
}

#[test]
fn test_path_weighted() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["path", "PRT", "FRA", "--weighted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 border crossings, about"))
        .stdout(predicate::str::contains("km"));
}

#[test]
fn test_path_unknown_country_exits_2() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["path", "DEU", "ZZ_NOT_A_COUNTRY"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ZZ_NOT_A_COUNTRY"));
}

#[test]
fn test_path_no_route_exits_1() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["path", "ISL", "DEU"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ISL"));
}

#[test]
fn test_path_unavailable_exits_3() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["path", "ATA", "DEU"])
        .assert()
        .code(3);
}

#[test]
fn test_json_error_envelope() {
    let (_dir, dataset) = setup_dataset();
    let output = borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--format", "json", "path", "DEU", "ZZ_NOT_A_COUNTRY"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "country_not_found");
    assert_eq!(json["error"]["code"], 2);
}

// ============================================================================
// neighbors / countries
// ============================================================================

#[test]
fn test_neighbors() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["neighbors", "ESP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FRA\tFrance"))
        .stdout(predicate::str::contains("PRT\tPortugal"))
        .stdout(predicate::str::contains("DEU").not());
}

#[test]
fn test_neighbors_records() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--format", "records", "neighbors", "ESP"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H borderpath=1 records=1 mode=neighbors id=ESP count=2",
        ))
        .stdout(predicate::str::contains(r#"N ESP "Spain""#))
        .stdout(predicate::str::contains("E ESP FRA"))
        .stdout(predicate::str::contains("E ESP PRT"));
}

#[test]
fn test_neighbors_island() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["neighbors", "Iceland"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no land borders"));
}

#[test]
fn test_countries_lists_all() {
    let (_dir, dataset) = setup_dataset();
    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--language", "NAME_DE", "countries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEU\tDeutschland"))
        .stdout(predicate::str::contains("ATA\tAntarctica"))
        .stdout(predicate::str::contains("6 countries, names in German"));
}

// ============================================================================
// graph export and --adjacency
// ============================================================================

#[test]
fn test_graph_export_reloads_as_adjacency_list() {
    let (dir, dataset) = setup_dataset();
    let output = borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--format", "json", "graph"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let graph: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(graph["FRA"], serde_json::json!(["DEU", "ESP"]));
    assert!(graph.get("ATA").is_none());

    let list = dir.path().join("adjacency.json");
    fs::write(&list, &output.stdout).unwrap();

    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .arg("--adjacency")
        .arg(&list)
        .args(["path", "PRT", "DEU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 border crossings"));
}

#[test]
fn test_graph_records_list_each_border_once() {
    let (_dir, dataset) = setup_dataset();
    let output = borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .args(["--format", "records", "graph"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "H borderpath=1 records=1 mode=graph countries=6 borders=3 unavailable=1"
    ));
    let edges: Vec<&str> = stdout.lines().filter(|l| l.starts_with("E ")).collect();
    assert_eq!(edges, vec!["E DEU FRA", "E ESP FRA", "E ESP PRT"]);
}

#[test]
fn test_adjacency_list_with_unknown_country() {
    let (dir, dataset) = setup_dataset();
    let list = dir.path().join("adjacency.json");
    fs::write(&list, r#"{"FRA": ["XXX"]}"#).unwrap();

    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .arg("--adjacency")
        .arg(&list)
        .args(["neighbors", "FRA"])
        .assert()
        .code(3);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_language() {
    let (dir, dataset) = setup_dataset();
    let config = write_config(dir.path(), "[dataset]\nlanguage = \"NAME_DE\"\n");

    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .arg("--config")
        .arg(&config)
        .args(["path", "ESP", "FRA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spanien (ESP) -> Frankreich (FRA)"));
}

#[test]
fn test_invalid_config_rejected() {
    let (dir, dataset) = setup_dataset();
    let config = write_config(dir.path(), "[adjacency]\ntolerance = -1.0\n");

    borderpath()
        .arg("--dataset")
        .arg(&dataset)
        .arg("--config")
        .arg(&config)
        .arg("countries")
        .assert()
        .code(2);
}
