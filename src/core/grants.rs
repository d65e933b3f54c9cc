//! Grant index.
//!
//! Secret → directly granted users, machines and groups. Grants are additive
//! and never removed; the index is read-only once the scan has finished.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::domain::{PrincipalId, PrincipalKind};
use crate::core::types::{GroupName, SecretName};

/// Raw direct grants recorded against one secret.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Grants {
    principals: BTreeSet<PrincipalId>,
    groups: BTreeSet<GroupName>,
}

impl Grants {
    /// Directly granted principals, users first.
    pub fn principals(&self) -> impl Iterator<Item = &PrincipalId> + '_ {
        self.principals.iter()
    }

    /// Directly granted principals of one kind, ordered by name.
    pub fn of_kind(&self, kind: PrincipalKind) -> impl Iterator<Item = &PrincipalId> + '_ {
        self.principals.iter().filter(move |id| id.kind == kind)
    }

    pub fn users(&self) -> impl Iterator<Item = &PrincipalId> + '_ {
        self.of_kind(PrincipalKind::User)
    }

    pub fn machines(&self) -> impl Iterator<Item = &PrincipalId> + '_ {
        self.of_kind(PrincipalKind::Machine)
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupName> + '_ {
        self.groups.iter()
    }

    pub fn grants_principal(&self, id: &PrincipalId) -> bool {
        self.principals.contains(id)
    }

    pub fn grants_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty() && self.groups.is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct GrantIndex {
    secrets: BTreeMap<SecretName, Grants>,
    by_group: BTreeMap<GroupName, BTreeSet<SecretName>>,
}

impl GrantIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a secret, with or without grants.
    pub fn declare_secret(&mut self, secret: &str) {
        self.entry(secret);
    }

    /// Grant a principal direct access to a secret.
    ///
    /// Returns `false` if the grant was already recorded.
    pub fn grant_direct(&mut self, secret: &str, kind: PrincipalKind, name: &str) -> bool {
        self.entry(secret)
            .principals
            .insert(PrincipalId::new(kind, name))
    }

    /// Grant a group access to a secret.
    ///
    /// Returns `false` if the grant was already recorded.
    pub fn grant_via_group(&mut self, secret: &str, group: &str) -> bool {
        let added = self.entry(secret).groups.insert(group.to_string());
        if added {
            self.by_group
                .entry(group.to_string())
                .or_default()
                .insert(secret.to_string());
        }
        added
    }

    /// Principals granted directly on a secret. Empty for unknown secrets.
    pub fn direct_principals(&self, secret: &str) -> impl Iterator<Item = &PrincipalId> + '_ {
        self.secrets
            .get(secret)
            .into_iter()
            .flat_map(|grants| grants.principals())
    }

    /// Groups granted directly on a secret. Empty for unknown secrets.
    pub fn direct_groups(&self, secret: &str) -> impl Iterator<Item = &GroupName> + '_ {
        self.secrets
            .get(secret)
            .into_iter()
            .flat_map(|grants| grants.groups())
    }

    /// Secrets granting directly to a group, ordered by name.
    pub fn secrets_granted_to(&self, group: &str) -> impl Iterator<Item = &SecretName> + '_ {
        self.by_group.get(group).into_iter().flatten()
    }

    pub fn get(&self, secret: &str) -> Option<&Grants> {
        self.secrets.get(secret)
    }

    pub fn contains_secret(&self, secret: &str) -> bool {
        self.secrets.contains_key(secret)
    }

    /// All declared secrets, ordered by name.
    pub fn secrets(&self) -> impl Iterator<Item = &SecretName> + '_ {
        self.secrets.keys()
    }

    /// All secrets with their grants, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&SecretName, &Grants)> + '_ {
        self.secrets.iter()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    fn entry(&mut self, secret: &str) -> &mut Grants {
        self.secrets.entry(secret.to_string()).or_default()
    }
}
