//! Tests for `--table` (secret access matrix).

use crate::support::*;

#[test]
fn test_table_shows_raw_grants() {
    let t = Test::ops();
    let output = t.table();
    assert_success(&output);

    assert_has_line(&output, "Secret Access Matrix");
    assert_has_line(&output, "Secret      Users  Machines  Groups");
    assert_has_line(&output, "backup-key  bob    -         ops");
}

#[test]
fn test_table_replaces_tree() {
    let t = Test::ops();
    let output = t.table();
    assert_stdout_excludes(&output, "SOPS Access Control Hierarchy");
}

#[test]
fn test_table_does_not_expand_groups() {
    let t = Test::ops();
    let output = t.table();
    // alice and db1 reach backup-key only through ops
    assert_stdout_excludes(&output, "alice");
    assert_stdout_excludes(&output, "db1");
}

#[test]
fn test_secret_without_grants_has_dashes() {
    let t = Test::ops();
    t.secret("unused");

    let output = t.table();
    assert_has_line(&output, "unused      -      -         -");
}
