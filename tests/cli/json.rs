//! Tests for `--json` output.

use crate::support::*;

#[test]
fn test_json_default_has_hierarchy_and_summary() {
    let t = Test::ops();
    let report = t.json(&[]);

    assert!(report.get("hierarchy").is_some());
    assert!(report.get("matrix").is_none());
    assert_eq!(report["summary"]["users"], 2);
    assert_eq!(report["summary"]["access_records"], 3);
}

#[test]
fn test_json_resolved_access() {
    let t = Test::ops();
    let report = t.json(&[]);

    let users = report["hierarchy"]["users"].as_array().unwrap();
    let alice = users.iter().find(|u| u["name"] == "alice").unwrap();
    assert_eq!(alice["kind"], "user");
    assert_eq!(alice["groups"][0], "ops");
    assert_eq!(alice["secrets"][0]["secret"], "backup-key");
    assert_eq!(alice["secrets"][0]["direct"], false);
    assert_eq!(alice["secrets"][0]["via_groups"][0], "ops");

    let bob = users.iter().find(|u| u["name"] == "bob").unwrap();
    assert_eq!(bob["secrets"][0]["direct"], true);
}

#[test]
fn test_json_matrix_and_keys() {
    let t = Test::ops();
    let report = t.json(&["--table", "--keys", "--no-summary"]);

    assert!(report.get("hierarchy").is_none());
    assert!(report.get("summary").is_none());

    let row = &report["matrix"]["rows"][0];
    assert_eq!(row["secret"], "backup-key");
    assert_eq!(row["users"][0], "bob");
    assert_eq!(row["groups"][0], "ops");
    assert!(row["machines"].as_array().unwrap().is_empty());

    let entries = report["keys"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
}

#[test]
fn test_json_graph_is_model_not_export() {
    let t = Test::ops();
    let report = t.json(&["--graph"]);

    let nodes = report["graph"]["nodes"].as_array().unwrap();
    assert!(nodes.iter().any(|n| n["id"] == "group_ops"));
    assert!(!t.dir.path().join("sops_hierarchy.png").exists());
}

#[test]
fn test_json_excludes_dangling_names() {
    let t = Test::ops();
    t.member("ops", "users", "ghost");

    let output = t.run(&["--json", "--all"]);
    assert_success(&output);
    assert_stdout_excludes(&output, "ghost");
}
