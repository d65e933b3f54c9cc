//! sops-acl - Inspect who can decrypt what in a SOPS secrets repository.
//!
//! A SOPS root lists users and machines (each with public keys), groups of
//! them, and secrets granted to principals directly or through groups. This
//! crate scans that layout, resolves effective access for every
//! (principal, secret) pair with its attribution, and renders the result.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── view          # Default command: scan, resolve, render
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! ├── core/             # Core library components
//! │   ├── config        # .sops-acl.toml management
//! │   ├── domain/       # Principal and access record types
//! │   ├── catalog       # Known principals and their keys
//! │   ├── membership    # Group → members, with reverse index
//! │   ├── grants        # Secret → direct grants, with reverse index
//! │   ├── hierarchy     # The three indices together
//! │   ├── resolver      # Effective access computation
//! │   ├── views         # Hierarchy, matrix, key and summary projections
//! │   ├── graph         # Node/edge model for export
//! │   ├── analysis      # Per-run hierarchy + resolution
//! │   ├── keyfile       # key.json parsing
//! │   └── scan          # Directory walk
//! └── render/           # Tree, table, key and DOT renderers
//! ```
//!
//! # Example
//!
//! ```
//! use sops_acl::core::analysis::Analysis;
//! use sops_acl::core::domain::{PrincipalId, PrincipalKind};
//! use sops_acl::core::hierarchy::Hierarchy;
//!
//! let mut h = Hierarchy::new();
//! h.catalog.register(PrincipalKind::User, "alice", Vec::new());
//! h.membership.add_member("ops", PrincipalKind::User, "alice");
//! h.grants.grant_via_group("backup-key", "ops");
//!
//! let analysis = Analysis::new(h);
//! let access = analysis.resolution().access_of_id(&PrincipalId::user("alice"));
//! assert_eq!(access.len(), 1);
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod render;

pub use crate::core::analysis::Analysis;
pub use crate::core::hierarchy::Hierarchy;
pub use crate::core::resolver::Resolution;
pub use crate::error::{Error, Result};
