use crate::cli::support::{wgraph, write_graph, write_triangle};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_adjacency() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .arg("show")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("directed graph: 3 vertices, 3 edges"))
        .stdout(predicate::str::contains("A -> B (1), C (5)"))
        .stdout(predicate::str::contains("B -> C (2)"));
}

#[test]
fn test_show_deduplicates_identical_edges() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B 4\nA B 4\n");

    wgraph()
        .arg("show")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 vertices, 1 edges"));
}

#[test]
fn test_show_conflicting_duplicate() {
    let dir = tempdir().unwrap();
    let files = write_graph(dir.path(), "A B\n", "A B 4\nA B 5\n");

    wgraph()
        .arg("show")
        .args(files.args())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("conflicting edges between A and B"));
}

#[test]
fn test_show_records() {
    let dir = tempdir().unwrap();
    let files = write_triangle(dir.path());

    wgraph()
        .args(["--format", "records", "--mode", "undirected", "show"])
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H wgraph=1 records=1 mode=show graph=undirected vertices=3 edges=3",
        ))
        .stdout(predicate::str::contains("E A C 5"));
}
