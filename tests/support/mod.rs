//! Test support utilities for sops-acl integration tests.
//!
//! Provides an isolated SOPS root builder and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// The SOPS root lives at `<dir>/sops`, which is also the binary's default
/// root when run from `dir`. No process-global state is mutated; child
/// processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary project directory
    pub dir: TempDir,
}

impl Test {
    /// Create an environment with an empty SOPS root.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("sops")).expect("failed to create sops root");
        Self { dir }
    }

    /// Create an environment without any SOPS root.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path of the SOPS root.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("sops")
    }

    /// Add a user, optionally with age keys.
    pub fn user(&self, name: &str, keys: &[&str]) -> &Self {
        self.principal("users", name, keys)
    }

    /// Add a machine, optionally with age keys.
    pub fn machine(&self, name: &str, keys: &[&str]) -> &Self {
        self.principal("machines", name, keys)
    }

    /// Write a raw `key.json` for an existing or new principal.
    pub fn key_file(&self, kind_dir: &str, name: &str, contents: &str) -> &Self {
        let dir = self.root().join(kind_dir).join(name);
        fs::create_dir_all(&dir).expect("failed to create principal dir");
        fs::write(dir.join("key.json"), contents).expect("failed to write key.json");
        self
    }

    /// Declare a group directory.
    pub fn group(&self, name: &str) -> &Self {
        fs::create_dir_all(self.root().join("groups").join(name)).expect("failed to create group");
        self
    }

    /// Add a membership marker: `groups/<group>/<kind_dir>/<name>`.
    pub fn member(&self, group: &str, kind_dir: &str, name: &str) -> &Self {
        self.marker(&["groups", group, kind_dir, name])
    }

    /// Declare a secret directory.
    pub fn secret(&self, name: &str) -> &Self {
        fs::create_dir_all(self.root().join("secrets").join(name))
            .expect("failed to create secret");
        self
    }

    /// Add an access marker: `secrets/<secret>/<kind_dir>/<name>`.
    pub fn grant(&self, secret: &str, kind_dir: &str, name: &str) -> &Self {
        self.marker(&["secrets", secret, kind_dir, name])
    }

    /// Write a config file in the project directory.
    pub fn config(&self, contents: &str) -> &Self {
        fs::write(self.dir.path().join(".sops-acl.toml"), contents)
            .expect("failed to write config");
        self
    }

    fn principal(&self, kind_dir: &str, name: &str, keys: &[&str]) -> &Self {
        let dir = self.root().join(kind_dir).join(name);
        fs::create_dir_all(&dir).expect("failed to create principal dir");
        if !keys.is_empty() {
            let records: Vec<_> = keys
                .iter()
                .map(|k| serde_json::json!({ "type": "age", "publickey": k }))
                .collect();
            fs::write(
                dir.join("key.json"),
                serde_json::to_string_pretty(&records).expect("failed to encode keys"),
            )
            .expect("failed to write key.json");
        }
        self
    }

    fn marker(&self, parts: &[&str]) -> &Self {
        let path = parts.iter().fold(self.root(), |p, part| p.join(part));
        let parent = path.parent().expect("marker has a parent");
        fs::create_dir_all(parent).expect("failed to create marker dir");
        fs::write(&path, "").expect("failed to write marker");
        self
    }
}
