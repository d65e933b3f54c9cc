//! Entity catalog.
//!
//! Holds every known user and machine with its declared public keys.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::core::domain::{Principal, PrincipalId, PrincipalKind};
use crate::core::types::PublicKey;

/// Registry of known principals, ordered by (kind, name).
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    principals: BTreeMap<PrincipalId, Principal>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a principal, or replace the keys of an existing one.
    ///
    /// Relations elsewhere are keyed by (kind, name), so overwriting keys
    /// never leaves a dangling reference.
    pub fn register(
        &mut self,
        kind: PrincipalKind,
        name: &str,
        public_keys: Vec<PublicKey>,
    ) -> &Principal {
        match self.principals.entry(PrincipalId::new(kind, name)) {
            Entry::Occupied(entry) => {
                let principal = entry.into_mut();
                principal.set_public_keys(public_keys);
                principal
            }
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(Principal::new(id, public_keys))
            }
        }
    }

    /// Look up a principal by kind and name.
    pub fn lookup(&self, kind: PrincipalKind, name: &str) -> Option<&Principal> {
        self.principals.get(&PrincipalId::new(kind, name))
    }

    pub fn get(&self, id: &PrincipalId) -> Option<&Principal> {
        self.principals.get(id)
    }

    pub fn contains(&self, id: &PrincipalId) -> bool {
        self.principals.contains_key(id)
    }

    /// All principals of one kind, ordered by name.
    pub fn all_of_kind(&self, kind: PrincipalKind) -> impl Iterator<Item = &Principal> + '_ {
        self.principals.values().filter(move |p| p.kind() == kind)
    }

    /// All principals: users first, then machines, each ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Principal> + '_ {
        self.principals.values()
    }

    pub fn count(&self, kind: PrincipalKind) -> usize {
        self.all_of_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}
