use crate::cli::support::{wgraph, write_graph, write_triangle};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_mst_triangle() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertices are [A, B, C]"))
        .stdout(predicate::str::contains(
            "Edges are [(A, B, 1), (A, C, 5), (B, C, 2)]",
        ))
        .stdout(predicate::str::contains("(A, B, 1) (B, C, 2)"))
        .stdout(predicate::str::contains("total weight: 3"))
        .stdout(predicate::str::contains("components: 1"));
}

#[test]
fn test_mst_quiet_skips_preamble() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .args(["--quiet", "mst"])
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertices are").not())
        .stdout(predicate::str::contains("total weight: 3"));
}

#[test]
fn test_mst_disconnected() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "");

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight: 0"))
        .stdout(predicate::str::contains("components: 2"));
}

#[test]
fn test_mst_folds_antiparallel_duplicates() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B 3\nB A 3\n");

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges are [(A, B, 3)]"))
        .stdout(predicate::str::contains("total weight: 3"));
}

#[test]
fn test_mst_conflicting_antiparallel_edges() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B 3\nB A 8\n");

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("conflicting edges"));
}

#[test]
fn test_mst_json() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    let output = wgraph()
        .args(["--format", "json", "mst"])
        .args(files.args())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "undirected");
    assert_eq!(json["total_weight"], 3);
    assert_eq!(json["components"], 1);
    assert_eq!(
        json["forest"],
        serde_json::json!([
            {"source": "A", "destination": "B", "weight": 1},
            {"source": "B", "destination": "C", "weight": 2},
        ])
    );
}

#[test]
fn test_mst_records() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .args(["--format", "records", "mst"])
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H wgraph=1 records=1 mode=mst vertices=3 edges=3 accepted=2 total_weight=3 components=1",
        ))
        .stdout(predicate::str::contains("E A B 1"))
        .stdout(predicate::str::contains("E B C 2"));
}

#[test]
fn test_mst_total_weight_overflow() {
    let dir = tempdir().unwrap();
    let max = i64::MAX;
    let files = write_graph(dir.path(), "A B C\n", &format!("A B {max}\nB C {max}\n"));

    wgraph()
        .arg("mst")
        .args(files.args())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds the largest representable weight"));
}
