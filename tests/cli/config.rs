use crate::cli::support::{wgraph, write_graph, write_triangle};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_mode_applies_to_show() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B 4\n");
    fs::write(dir.path().join("wgraph.toml"), "[graph]\nmode = \"undirected\"\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .arg("show")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("undirected graph"));
}

#[test]
fn test_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());
    fs::write(dir.path().join("wgraph.toml"), "[output]\nformat = \"records\"\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .arg("mst")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H wgraph=1"));

    wgraph()
        .current_dir(dir.path())
        .args(["--format", "human", "mst"])
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight: 3"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[graph]\nmode = \"directed\"\n").unwrap();

    wgraph()
        .arg("--config")
        .arg(&config)
        .args(["--format", "records", "mst"])
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted=2 total_weight=3"));
}

#[test]
fn test_invalid_config() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[graph]\nmode = \"sideways\"\n").unwrap();

    wgraph()
        .arg("--config")
        .arg(&config)
        .arg("mst")
        .args(files.args())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_config_json_format_applies_to_errors() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A Z 1\n");
    fs::write(dir.path().join("wgraph.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let output = wgraph()
        .current_dir(dir.path())
        .arg("mst")
        .args(files.args())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
}
