//! Repository scan.
//!
//! Walks a SOPS root and populates a [`Hierarchy`]:
//!
//! ```text
//! sops/
//! ├── users/<name>/key.json
//! ├── machines/<name>/key.json
//! ├── groups/<group>/{users,machines}/<name>
//! └── secrets/<secret>/{users,machines,groups}/<name>
//! ```
//!
//! Markers are usually symlinks; only the entry name matters, so broken
//! links still count. Missing directories are empty, unreadable ones are
//! logged and skipped. The scan never fails once the root exists.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::domain::PrincipalKind;
use crate::core::hierarchy::Hierarchy;
use crate::core::keyfile;

/// Scanner for one SOPS root.
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    key_types: Vec<String>,
}

impl Scanner {
    /// Create a scanner keeping the given key record types.
    pub fn new(root: impl Into<PathBuf>, key_types: Vec<String>) -> Self {
        Self {
            root: root.into(),
            key_types,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the whole tree.
    pub fn scan(&self) -> Hierarchy {
        let mut hierarchy = Hierarchy::new();

        for kind in PrincipalKind::ALL {
            self.scan_principals(&mut hierarchy, kind);
        }
        self.scan_groups(&mut hierarchy);
        self.scan_secrets(&mut hierarchy);

        debug!(
            root = %self.root.display(),
            users = hierarchy.catalog.count(PrincipalKind::User),
            machines = hierarchy.catalog.count(PrincipalKind::Machine),
            groups = hierarchy.membership.len(),
            secrets = hierarchy.grants.len(),
            "scan complete"
        );
        hierarchy
    }

    fn scan_principals(&self, hierarchy: &mut Hierarchy, kind: PrincipalKind) {
        let dir = self.root.join(kind.dir_name());
        for (name, path) in subdirectories(&dir) {
            let keys = keyfile::load_or_empty(&path.join(constants::KEY_FILE), &self.key_types);
            hierarchy.catalog.register(kind, &name, keys);
        }
    }

    fn scan_groups(&self, hierarchy: &mut Hierarchy) {
        let dir = self.root.join(constants::GROUPS_DIR);
        for (group, path) in subdirectories(&dir) {
            hierarchy.membership.declare_group(&group);
            for kind in PrincipalKind::ALL {
                for member in marker_names(&path.join(kind.dir_name())) {
                    hierarchy.membership.add_member(&group, kind, &member);
                }
            }
        }
    }

    fn scan_secrets(&self, hierarchy: &mut Hierarchy) {
        let dir = self.root.join(constants::SECRETS_DIR);
        for (secret, path) in subdirectories(&dir) {
            hierarchy.grants.declare_secret(&secret);
            for kind in PrincipalKind::ALL {
                for name in marker_names(&path.join(kind.dir_name())) {
                    hierarchy.grants.grant_direct(&secret, kind, &name);
                }
            }
            for group in marker_names(&path.join(constants::GROUPS_DIR)) {
                hierarchy.grants.grant_via_group(&secret, &group);
            }
        }
    }
}

/// Visible entry names of a directory. Missing or unreadable means empty.
fn entries(dir: &Path) -> Vec<(String, PathBuf)> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %dir.display(), "skipping unreadable directory: {}", e);
            return Vec::new();
        }
    };

    let mut found: Vec<_> = read
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(path = %dir.display(), "skipping unreadable entry: {}", e);
                None
            }
        })
        .filter_map(|entry| {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str().map(str::to_string) else {
                warn!(path = %entry.path().display(), "skipping entry with non-UTF-8 name");
                return None;
            };
            if name.starts_with('.') {
                return None;
            }
            Some((name, entry.path()))
        })
        .collect();
    found.sort();
    found
}

/// Entity directories: entries that are (or link to) directories.
fn subdirectories(dir: &Path) -> Vec<(String, PathBuf)> {
    entries(dir)
        .into_iter()
        .filter(|(_, path)| path.is_dir())
        .collect()
}

/// Marker names: every visible entry, whatever it points to.
fn marker_names(dir: &Path) -> Vec<String> {
    entries(dir).into_iter().map(|(name, _)| name).collect()
}
