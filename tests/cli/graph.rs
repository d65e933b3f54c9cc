//! Tests for `--graph` export.

use crate::support::*;
use std::fs;

#[test]
fn test_graph_dot_written_directly() {
    let t = Test::ops();
    let output = t.run(&["--graph", "--graph-format", "dot", "--graph-output", "acl"]);
    assert_success(&output);
    assert_stdout_contains(&output, "graph written to acl.dot");

    let dot = fs::read_to_string(t.dir.path().join("acl.dot")).unwrap();
    assert!(dot.starts_with("digraph SOPS_Hierarchy {"));
    assert!(dot.contains("\"user_alice\" -> \"group_ops\""));
    assert!(dot.contains("\"machine_db1\" -> \"group_ops\""));
    assert!(dot.contains("\"user_bob\" -> \"secret_backup-key\""));
    assert!(dot.contains("\"group_ops\" -> \"secret_backup-key\""));
    assert!(dot.contains("alice\\n[age1ql3z...]"));
}

#[test]
fn test_graph_format_from_config() {
    let t = Test::ops();
    t.config("[graph]\nformat = \"dot\"\noutput = \"from-config\"\n");

    let output = t.run(&["--graph"]);
    assert_success(&output);
    assert!(t.dir.path().join("from-config.dot").exists());
}

#[test]
fn test_missing_graphviz_warns_and_succeeds() {
    let t = Test::ops();
    // An empty PATH hides any installed graphviz
    let output = t
        .cmd()
        .args(["--all", "--graph-format", "png"])
        .env("PATH", t.dir.path())
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "graphviz `dot` not found");
    assert_stdout_contains(&output, "SOPS Access Control Hierarchy");
    assert_stdout_contains(&output, "Secret Access Matrix");
    assert_stdout_contains(&output, "Access records");
    assert!(!t.dir.path().join("sops_hierarchy.png").exists());
}

#[test]
fn test_graph_write_failure_is_reported() {
    let t = Test::ops();
    let output = t.run(&[
        "--graph",
        "--graph-format",
        "dot",
        "--graph-output",
        "missing/dir/acl",
    ]);

    assert_success(&output);
    assert_stderr_contains(&output, "failed to write graph");
    assert_stdout_contains(&output, "Summary");
}

#[test]
fn test_graph_only_skips_tree() {
    let t = Test::ops();
    let output = t.run(&["--graph", "--graph-format", "dot"]);
    assert_success(&output);
    assert_stdout_excludes(&output, "SOPS Access Control Hierarchy");
    assert!(t.dir.path().join("sops_hierarchy.dot").exists());
}
