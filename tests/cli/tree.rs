//! Tests for the default hierarchy tree view.

use crate::support::*;

#[test]
fn test_tree_is_default_view() {
    let t = Test::ops();
    let output = t.tree();
    assert_success(&output);

    assert_has_line(&output, "SOPS Access Control Hierarchy");
    assert_has_line(&output, "├── Users");
    assert_has_line(&output, "├── Machines");
    assert_has_line(&output, "├── Groups");
    assert_has_line(&output, "└── Secrets");
    assert_stdout_excludes(&output, "Secret Access Matrix");
}

#[test]
fn test_tree_shows_attribution() {
    let t = Test::ops();
    let output = t.tree();
    assert_success(&output);

    assert_has_line(&output, "│   │   └── backup-key (via ops)");
    assert_has_line(&output, "│       └── backup-key (direct)");
    assert_stdout_contains(&output, "Groups: ops");
}

#[test]
fn test_tree_lists_grants_per_secret() {
    let t = Test::ops();
    let output = t.tree();

    assert_stdout_contains(&output, "Access granted to");
    assert_stdout_contains(&output, "User: bob");
    assert_stdout_contains(&output, "Group: ops");
}

#[test]
fn test_direct_and_inherited_share_one_line() {
    let t = Test::new();
    t.user("dave", &[])
        .member("eng", "users", "dave")
        .grant("s", "users", "dave")
        .grant("s", "groups", "eng");

    let output = t.tree();
    assert_success(&output);
    assert_stdout_contains(&output, "s (direct + via eng)");
    assert_eq!(stdout(&output).matches("s (").count(), 1);
}

#[test]
fn test_multiple_groups_merge() {
    let t = Test::new();
    t.user("carol", &[])
        .member("g1", "users", "carol")
        .member("g2", "users", "carol")
        .grant("shared", "groups", "g1")
        .grant("shared", "groups", "g2");

    let output = t.tree();
    assert_stdout_contains(&output, "shared (via g1, g2)");
}

#[test]
fn test_dangling_names_never_shown() {
    let t = Test::ops();
    t.member("ops", "users", "ghost")
        .grant("backup-key", "machines", "retired")
        .grant("backup-key", "groups", "nobody");

    for output in [t.tree(), t.table(), t.run(&["--all", "--graph-format", "dot"])] {
        assert_success(&output);
        assert_stdout_excludes(&output, "ghost");
        assert_stdout_excludes(&output, "retired");
        assert_stdout_excludes(&output, "nobody");
    }
}

#[test]
fn test_empty_root_prints_title_only() {
    let t = Test::new();
    let output = t.tree();
    assert_success(&output);
    assert_has_line(&output, "SOPS Access Control Hierarchy");
    assert_stdout_excludes(&output, "├──");
}

#[test]
fn test_basic_output_is_plain() {
    let t = Test::ops();
    let output = t.cmd().arg("--basic").env_remove("NO_COLOR").output().unwrap();
    assert_success(&output);

    let out = stdout(&output);
    assert!(!out.contains('\u{1b}'), "basic output has ANSI codes: {out}");
    assert!(!out.contains('🔐'));
}

#[test]
fn test_summary_after_views() {
    let t = Test::ops();
    let output = t.tree();

    assert_has_line(&output, "Summary");
    assert_stdout_contains(&output, "Users            2");
    assert_stdout_contains(&output, "Secrets          1");
    assert_stdout_contains(&output, "Access records   3");
}

#[test]
fn test_summary_section_layout() {
    let t = Test::ops();
    let output = t.tree();

    assert_has_line(&output, &"─".repeat(40));
    assert_has_line(&output, "  Machine grants   0");
    assert_has_line(&output, "  Group grants     1");
    assert_has_line(&output, "  User grants      1");
}

#[test]
fn test_no_summary() {
    let t = Test::ops();
    let output = t.run(&["--no-summary"]);
    assert_success(&output);
    assert_stdout_excludes(&output, "Access records");
}

#[test]
fn test_root_from_env_and_flag() {
    let t = Test::ops();
    let elsewhere = Test::bare();

    let output = elsewhere
        .cmd()
        .env("SOPS_ACL_ROOT", t.root())
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "alice");

    let output = elsewhere
        .cmd()
        .arg("--root")
        .arg(t.root())
        .env("SOPS_ACL_ROOT", "/does/not/exist")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "alice");
}

#[test]
fn test_root_from_config() {
    let t = Test::ops();
    let elsewhere = Test::bare();
    elsewhere.config(&format!("root = {:?}\n", t.root().display().to_string()));

    let output = elsewhere.tree();
    assert_success(&output);
    assert_stdout_contains(&output, "backup-key");
}
