//! Access resolver.
//!
//! Merges direct grants and group-derived grants into one [`AccessRecord`]
//! per (principal, secret) pair. Both merge steps are set unions plus a
//! boolean OR, so the result does not depend on the order in which secrets,
//! groups or members are visited.
//!
//! The resolver works on names only. Whether a principal is known to the
//! catalog is a question for the views, which hide dangling references.

use std::collections::BTreeMap;

use crate::core::domain::{AccessRecord, PrincipalId, PrincipalKind};
use crate::core::grants::GrantIndex;
use crate::core::membership::MembershipIndex;
use crate::core::types::SecretName;

/// Resolved access, keyed by (principal, secret).
///
/// [`Resolution::access_of`] and [`Resolution::access_to`] read the same map,
/// so they always agree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    records: BTreeMap<(PrincipalId, SecretName), AccessRecord>,
}

impl Resolution {
    /// Every secret a principal can reach, ordered by secret name.
    pub fn access_of(&self, kind: PrincipalKind, name: &str) -> BTreeMap<&SecretName, &AccessRecord> {
        self.access_of_id(&PrincipalId::new(kind, name))
    }

    pub fn access_of_id(&self, id: &PrincipalId) -> BTreeMap<&SecretName, &AccessRecord> {
        self.records
            .range((id.clone(), SecretName::new())..)
            .take_while(|((principal, _), _)| principal == id)
            .map(|((_, secret), record)| (secret, record))
            .collect()
    }

    /// Every principal that can reach a secret, users first.
    pub fn access_to(&self, secret: &str) -> BTreeMap<&PrincipalId, &AccessRecord> {
        self.records
            .iter()
            .filter(|((_, s), _)| s == secret)
            .map(|((principal, _), record)| (principal, record))
            .collect()
    }

    /// All records, ordered by principal then secret.
    pub fn records(&self) -> impl Iterator<Item = (&PrincipalId, &SecretName, &AccessRecord)> + '_ {
        self.records
            .iter()
            .map(|((principal, secret), record)| (principal, secret, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_direct(&mut self, principal: &PrincipalId, secret: &str) {
        self.records
            .entry((principal.clone(), secret.to_string()))
            .and_modify(AccessRecord::mark_direct)
            .or_insert_with(AccessRecord::direct);
    }

    fn record_via(&mut self, principal: &PrincipalId, secret: &str, group: &str) {
        self.records
            .entry((principal.clone(), secret.to_string()))
            .and_modify(|record| record.add_group(group))
            .or_insert_with(|| AccessRecord::via(group));
    }
}

/// Compute the access records for a membership and grant index.
///
/// Cannot fail: both indices are plain in-memory sets.
pub fn resolve(membership: &MembershipIndex, grants: &GrantIndex) -> Resolution {
    let mut resolution = Resolution::default();

    for (secret, secret_grants) in grants.iter() {
        for principal in secret_grants.principals() {
            resolution.record_direct(principal, secret);
        }
    }

    for (secret, secret_grants) in grants.iter() {
        for group in secret_grants.groups() {
            for member in membership.members_of(group) {
                resolution.record_via(member, secret, group);
            }
        }
    }

    resolution
}
