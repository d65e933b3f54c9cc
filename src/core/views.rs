//! View projections.
//!
//! Read-only projections of a [`Hierarchy`] and its [`Resolution`]. Every
//! projection walks the catalog and declared groups, so names that do not
//! resolve (a membership marker for a deleted user, a grant to a group that
//! has no directory) never show up here.
//!
//! The hierarchy view shows *resolved* access. The matrix view shows *raw*
//! direct grants and never expands groups.

use serde::Serialize;

use crate::core::domain::{AccessRecord, PrincipalId, PrincipalKind};
use crate::core::grants::Grants;
use crate::core::hierarchy::Hierarchy;
use crate::core::resolver::Resolution;
use crate::core::types::{GroupName, PrincipalName, PublicKey, SecretName};

/// One reachable secret with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretAccess {
    pub secret: SecretName,
    #[serde(flatten)]
    pub access: AccessRecord,
}

/// A principal with its keys, groups and resolved access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipalView {
    #[serde(flatten)]
    pub id: PrincipalId,
    pub public_keys: Vec<PublicKey>,
    pub groups: Vec<GroupName>,
    pub secrets: Vec<SecretAccess>,
}

/// A declared group with its known members and the secrets granted to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub name: GroupName,
    pub users: Vec<PrincipalName>,
    pub machines: Vec<PrincipalName>,
    pub secrets: Vec<SecretName>,
}

/// The raw direct grants on one secret, restricted to known entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrantRow {
    pub secret: SecretName,
    pub users: Vec<PrincipalName>,
    pub machines: Vec<PrincipalName>,
    pub groups: Vec<GroupName>,
}

impl GrantRow {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.machines.is_empty() && self.groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyView {
    pub users: Vec<PrincipalView>,
    pub machines: Vec<PrincipalView>,
    pub groups: Vec<GroupView>,
    pub secrets: Vec<GrantRow>,
}

impl HierarchyView {
    /// Users then machines.
    pub fn principals(&self) -> impl Iterator<Item = &PrincipalView> + '_ {
        self.users.iter().chain(self.machines.iter())
    }

    pub fn principal(&self, id: &PrincipalId) -> Option<&PrincipalView> {
        self.principals().find(|p| &p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixView {
    pub rows: Vec<GrantRow>,
}

impl MatrixView {
    pub fn row(&self, secret: &str) -> Option<&GrantRow> {
        self.rows.iter().find(|row| row.secret == secret)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    #[serde(flatten)]
    pub id: PrincipalId,
    pub keys: Vec<PublicKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyListing {
    pub entries: Vec<KeyEntry>,
}

impl KeyListing {
    /// Entries that declare at least one key.
    pub fn with_keys(&self) -> impl Iterator<Item = &KeyEntry> + '_ {
        self.entries.iter().filter(|entry| !entry.keys.is_empty())
    }
}

/// Entity and grant counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub users: usize,
    pub machines: usize,
    pub groups: usize,
    pub secrets: usize,
    pub user_grants: usize,
    pub machine_grants: usize,
    pub group_grants: usize,
    pub access_records: usize,
}

/// Per-principal nested listing of groups and reachable secrets, plus the
/// group and secret sections.
pub fn hierarchy_view(hierarchy: &Hierarchy, resolution: &Resolution) -> HierarchyView {
    let principal_view = |kind: PrincipalKind| -> Vec<PrincipalView> {
        hierarchy
            .catalog
            .all_of_kind(kind)
            .map(|principal| PrincipalView {
                id: principal.id().clone(),
                public_keys: principal.public_keys().to_vec(),
                groups: hierarchy
                    .membership
                    .groups_containing(principal.id())
                    .cloned()
                    .collect(),
                secrets: resolution
                    .access_of_id(principal.id())
                    .into_iter()
                    .map(|(secret, access)| SecretAccess {
                        secret: secret.clone(),
                        access: access.clone(),
                    })
                    .collect(),
            })
            .collect()
    };

    let groups = hierarchy
        .membership
        .groups()
        .map(|group| {
            let known_members = |kind: PrincipalKind| -> Vec<PrincipalName> {
                hierarchy
                    .membership
                    .members_of(group)
                    .filter(|id| id.kind == kind && hierarchy.is_known(id))
                    .map(|id| id.name.clone())
                    .collect()
            };
            GroupView {
                name: group.clone(),
                users: known_members(PrincipalKind::User),
                machines: known_members(PrincipalKind::Machine),
                secrets: hierarchy.grants.secrets_granted_to(group).cloned().collect(),
            }
        })
        .collect();

    HierarchyView {
        users: principal_view(PrincipalKind::User),
        machines: principal_view(PrincipalKind::Machine),
        groups,
        secrets: grant_rows(hierarchy),
    }
}

/// Secrets by name with their direct grants. Groups are not expanded.
pub fn matrix_view(hierarchy: &Hierarchy) -> MatrixView {
    MatrixView {
        rows: grant_rows(hierarchy),
    }
}

/// Every principal with its public keys, independent of access.
pub fn key_listing(hierarchy: &Hierarchy) -> KeyListing {
    KeyListing {
        entries: hierarchy
            .catalog
            .iter()
            .map(|principal| KeyEntry {
                id: principal.id().clone(),
                keys: principal.public_keys().to_vec(),
            })
            .collect(),
    }
}

pub fn summary(hierarchy: &Hierarchy, resolution: &Resolution) -> Summary {
    let rows = grant_rows(hierarchy);
    Summary {
        users: hierarchy.catalog.count(PrincipalKind::User),
        machines: hierarchy.catalog.count(PrincipalKind::Machine),
        groups: hierarchy.membership.len(),
        secrets: hierarchy.grants.len(),
        user_grants: rows.iter().map(|row| row.users.len()).sum(),
        machine_grants: rows.iter().map(|row| row.machines.len()).sum(),
        group_grants: rows.iter().map(|row| row.groups.len()).sum(),
        access_records: resolution
            .records()
            .filter(|(principal, _, _)| hierarchy.is_known(principal))
            .count(),
    }
}

fn grant_rows(hierarchy: &Hierarchy) -> Vec<GrantRow> {
    hierarchy
        .grants
        .iter()
        .map(|(secret, grants)| grant_row(hierarchy, secret, grants))
        .collect()
}

fn grant_row(hierarchy: &Hierarchy, secret: &str, grants: &Grants) -> GrantRow {
    let known = |kind: PrincipalKind| -> Vec<PrincipalName> {
        grants
            .of_kind(kind)
            .filter(|id| hierarchy.is_known(id))
            .map(|id| id.name.clone())
            .collect()
    };
    GrantRow {
        secret: secret.to_string(),
        users: known(PrincipalKind::User),
        machines: known(PrincipalKind::Machine),
        groups: grants
            .groups()
            .filter(|group| hierarchy.is_known_group(group))
            .cloned()
            .collect(),
    }
}
