use crate::cli::support::{wgraph, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_vertex_file_is_usage_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    wgraph()
        .arg("mst")
        .arg(&missing)
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_malformed_edge_file() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B one\n");

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("format error"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_negative_weight() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B -2\n");

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn test_edge_to_unknown_vertex() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A Z 1\n");

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex Z is not in the graph"));
}

#[test]
fn test_error_as_json() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A Z 1\n");

    let output = wgraph()
        .args(["--format", "json", "mst"])
        .args(files.args())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A Z 1\n");

    wgraph()
        .args(["--quiet", "mst"])
        .args(files.args())
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
