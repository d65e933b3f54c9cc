//! The scanned hierarchy.
//!
//! Bundles the catalog with the membership and grant indices. Populated once
//! by the repository scan and only read afterwards.

use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::domain::PrincipalId;
use crate::core::grants::GrantIndex;
use crate::core::membership::MembershipIndex;
use crate::core::resolver::{self, Resolution};

#[derive(Debug, Default, Clone)]
pub struct Hierarchy {
    pub catalog: Catalog,
    pub membership: MembershipIndex,
    pub grants: GrantIndex,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a principal reference resolves to a registered principal.
    pub fn is_known(&self, id: &PrincipalId) -> bool {
        self.catalog.contains(id)
    }

    /// Whether a group reference resolves to a declared group.
    pub fn is_known_group(&self, group: &str) -> bool {
        self.membership.contains_group(group)
    }

    /// Resolve every (principal, secret) access pair.
    pub fn resolve(&self) -> Resolution {
        let resolution = resolver::resolve(&self.membership, &self.grants);
        debug!(
            principals = self.catalog.len(),
            groups = self.membership.len(),
            secrets = self.grants.len(),
            records = resolution.len(),
            "hierarchy resolved"
        );
        resolution
    }
}
