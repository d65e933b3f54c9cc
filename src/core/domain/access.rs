//! Access records.
//!
//! The resolved fact that a principal can reach a secret, and how.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::core::types::GroupName;

/// How one principal reaches one secret.
///
/// A record always carries at least one attribution: it is direct, or it
/// names at least one group, or both. No access is expressed by the absence
/// of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    direct: bool,
    via_groups: BTreeSet<GroupName>,
}

impl AccessRecord {
    /// A record for a direct grant.
    pub fn direct() -> Self {
        Self {
            direct: true,
            via_groups: BTreeSet::new(),
        }
    }

    /// A record inherited through a single group.
    pub fn via(group: impl Into<GroupName>) -> Self {
        let mut via_groups = BTreeSet::new();
        via_groups.insert(group.into());
        Self {
            direct: false,
            via_groups,
        }
    }

    /// Whether the secret grants to the principal directly.
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Whether at least one group grants the secret to the principal.
    pub fn is_inherited(&self) -> bool {
        !self.via_groups.is_empty()
    }

    /// Groups the access is inherited through, ordered by name.
    pub fn via_groups(&self) -> &BTreeSet<GroupName> {
        &self.via_groups
    }

    pub(crate) fn mark_direct(&mut self) {
        self.direct = true;
    }

    pub(crate) fn add_group(&mut self, group: &str) {
        if !self.via_groups.contains(group) {
            self.via_groups.insert(group.to_string());
        }
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self
            .via_groups
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        match (self.direct, self.via_groups.is_empty()) {
            (true, true) => write!(f, "direct"),
            (true, false) => write!(f, "direct + via {}", groups),
            (false, _) => write!(f, "via {}", groups),
        }
    }
}
