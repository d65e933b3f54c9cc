//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A user or machine name (the directory name under `users/` or `machines/`).
pub type PrincipalName = String;

/// A group name (the directory name under `groups/`).
pub type GroupName = String;

/// A secret name (the directory name under `secrets/`).
pub type SecretName = String;

/// An opaque public key string (e.g. `age1...`).
///
/// Never parsed or validated, only carried through to the views.
pub type PublicKey = String;
