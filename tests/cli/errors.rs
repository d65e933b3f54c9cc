//! Tests for fatal errors and exit codes.

use crate::support::*;

#[test]
fn test_missing_root_exits_1() {
    let t = Test::bare();
    let output = t.tree();

    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");
    assert_stdout_contains(&output, "--root");
}

#[test]
fn test_root_pointing_at_file_exits_1() {
    let t = Test::bare();
    std::fs::write(t.dir.path().join("sops"), "").unwrap();

    let output = t.tree();
    assert_failure(&output);
}

#[test]
fn test_invalid_config_exits_1() {
    let t = Test::ops();
    t.config("[graph]\nformat = \"gif\"\n");

    let output = t.tree();
    assert_failure(&output);
    assert_stderr_contains(&output, "graph.format");
}

#[test]
fn test_unparsable_config_exits_1() {
    let t = Test::ops();
    t.config("root = [");

    let output = t.tree();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_explicit_missing_config_exits_1() {
    let t = Test::ops();
    let output = t.run(&["--config", "nope.toml"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config file");
}

#[test]
fn test_unknown_graph_format_rejected_by_parser() {
    let t = Test::ops();
    let output = t.run(&["--graph-format", "gif"]);
    assert!(!output.status.success());
}
