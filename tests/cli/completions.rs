//! Tests for `sops-acl completions`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    let t = Test::bare();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sops-acl"))
        .stdout(predicate::str::contains("--graph-format"));
}

#[test]
fn test_completions_need_no_root() {
    let t = Test::bare();
    for shell in ["zsh", "fish", "powershell"] {
        let output = t.run(&["completions", shell]);
        assert_success(&output);
        assert!(!stdout(&output).is_empty());
    }
}

#[test]
fn test_completions_reject_unknown_shell() {
    let t = Test::bare();
    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tcsh"));
}
