//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sops-acl command running in the project directory.
    ///
    /// Root and log overrides from the outer environment are cleared and
    /// colours are disabled so output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sops-acl").expect("failed to find sops-acl binary");
        cmd.env_remove("SOPS_ACL_ROOT");
        cmd.env_remove("SOPS_ACL_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run sops-acl with the given arguments against the default root.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run sops-acl")
    }

    /// Default tree view.
    pub fn tree(&self) -> Output {
        self.run(&[])
    }

    /// `--table` view.
    pub fn table(&self) -> Output {
        self.run(&["--table"])
    }

    /// `--keys` view.
    pub fn keys(&self) -> Output {
        self.run(&["--keys"])
    }

    /// `--json` output with the given extra arguments, parsed.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut argv = vec!["--json"];
        argv.extend_from_slice(args);
        let output = self.run(&argv);
        assert!(
            output.status.success(),
            "sops-acl --json failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
    }
}
