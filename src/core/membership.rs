//! Membership index.
//!
//! Group → members, with a reverse index maintained on every insert so that
//! "which groups contain this principal" never needs a scan over all groups.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::domain::{PrincipalId, PrincipalKind};
use crate::core::types::GroupName;

#[derive(Debug, Default, Clone)]
pub struct MembershipIndex {
    members: BTreeMap<GroupName, BTreeSet<PrincipalId>>,
    groups_of: BTreeMap<PrincipalId, BTreeSet<GroupName>>,
}

impl MembershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a group, with or without members.
    pub fn declare_group(&mut self, group: &str) {
        if !self.members.contains_key(group) {
            self.members.insert(group.to_string(), BTreeSet::new());
        }
    }

    /// Record a principal as a member of a group.
    ///
    /// Declares the group if needed. Returns `false` if the membership was
    /// already recorded.
    pub fn add_member(&mut self, group: &str, kind: PrincipalKind, name: &str) -> bool {
        let id = PrincipalId::new(kind, name);
        self.declare_group(group);

        let added = self
            .members
            .get_mut(group)
            .map(|set| set.insert(id.clone()))
            .unwrap_or(false);

        if added {
            self.groups_of
                .entry(id)
                .or_default()
                .insert(group.to_string());
        }
        added
    }

    /// Members of a group, ordered by (kind, name). Empty for unknown groups.
    pub fn members_of(&self, group: &str) -> impl Iterator<Item = &PrincipalId> + '_ {
        self.members.get(group).into_iter().flatten()
    }

    /// Groups containing a principal, ordered by name.
    pub fn groups_containing(&self, id: &PrincipalId) -> impl Iterator<Item = &GroupName> + '_ {
        self.groups_of.get(id).into_iter().flatten()
    }

    pub fn is_member(&self, group: &str, id: &PrincipalId) -> bool {
        self.members
            .get(group)
            .map(|set| set.contains(id))
            .unwrap_or(false)
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.members.contains_key(group)
    }

    /// All declared groups, ordered by name.
    pub fn groups(&self) -> impl Iterator<Item = &GroupName> + '_ {
        self.members.keys()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
