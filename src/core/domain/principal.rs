//! Principal representation.
//!
//! A principal is a user or machine that can be granted access to secrets.
//! Identity is the (kind, name) pair; everything else hangs off it.

use serde::Serialize;
use std::fmt;

use crate::core::constants;
use crate::core::types::{PrincipalName, PublicKey};

/// The two kinds of principal in a SOPS hierarchy.
///
/// Ordering puts users before machines, which is the order every view
/// lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    User,
    Machine,
}

impl PrincipalKind {
    /// Both kinds, in display order.
    pub const ALL: [PrincipalKind; 2] = [PrincipalKind::User, PrincipalKind::Machine];

    /// Name of the directory holding principals (and markers) of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::User => constants::USERS_DIR,
            Self::Machine => constants::MACHINES_DIR,
        }
    }

    /// Capitalised label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Machine => "Machine",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Machine => write!(f, "machine"),
        }
    }
}

/// Identity of a principal: its kind and its name.
///
/// All relations (memberships, grants, access records) are keyed by this,
/// never by a reference to a [`Principal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PrincipalId {
    pub kind: PrincipalKind,
    pub name: PrincipalName,
}

impl PrincipalId {
    pub fn new(kind: PrincipalKind, name: impl Into<PrincipalName>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn user(name: impl Into<PrincipalName>) -> Self {
        Self::new(PrincipalKind::User, name)
    }

    pub fn machine(name: impl Into<PrincipalName>) -> Self {
        Self::new(PrincipalKind::Machine, name)
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// A registered user or machine with its declared public keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    #[serde(flatten)]
    id: PrincipalId,
    public_keys: Vec<PublicKey>,
}

impl Principal {
    pub fn new(id: PrincipalId, public_keys: Vec<PublicKey>) -> Self {
        Self { id, public_keys }
    }

    pub fn id(&self) -> &PrincipalId {
        &self.id
    }

    pub fn kind(&self) -> PrincipalKind {
        self.id.kind
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }

    /// Public keys in the order they were declared.
    pub fn public_keys(&self) -> &[PublicKey] {
        &self.public_keys
    }

    pub(crate) fn set_public_keys(&mut self, keys: Vec<PublicKey>) {
        self.public_keys = keys;
    }
}
