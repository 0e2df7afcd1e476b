use crate::cli::support::{wgraph, write_flights, write_graph, write_triangle};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_triangle() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("cost: 3"));
}

#[test]
fn test_path_prefers_cheaper_multi_hop_route() {
    let dir = tempdir().unwrap();
    let files = write_flights(dir.path());

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["SEA", "SFO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEA -> JFK -> SFO"))
        .stdout(predicate::str::contains("cost: 79"));
}

#[test]
fn test_path_to_self() {
    let dir = tempdir().unwrap();
    let files = write_flights(dir.path());

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["X", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 0"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "");

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from A to B"));
}

#[test]
fn test_path_unknown_vertex() {
    let dir = tempdir().unwrap();
    let files = write_flights(dir.path());

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["YUP", "SFO"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex YUP is not in the graph"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    let output = wgraph()
        .args(["--format", "json", "path"])
        .args(files.args())
        .args(["A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 3);
    assert_eq!(json["vertices"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_path_json_not_found() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "");

    let output = wgraph()
        .args(["--format", "json", "path"])
        .args(files.args())
        .args(["A", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert!(json["cost"].is_null());
    assert_eq!(json["vertices"], serde_json::json!([]));
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .args(["--format", "records", "path"])
        .args(files.args())
        .args(["A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H wgraph=1 records=1 mode=path from=A to=C found=true cost=3 hops=2",
        ))
        .stdout(predicate::str::contains("V B"));
}

#[test]
fn test_path_respects_edge_direction() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B 4\n");

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["B", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from B to A"));
}

#[test]
fn test_path_cost_at_weight_limit() {
    let dir = tempdir().unwrap();
    let max = i64::MAX;
    let files = write_graph(dir.path(), "A B\n", &format!("A B {max}\n"));

    wgraph()
        .arg("path")
        .args(files.args())
        .args(["A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("cost: {max}")));
}
