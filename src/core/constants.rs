//! Constants used throughout sops-acl.
//!
//! Centralizes directory layout names and configuration defaults.

/// Default SOPS root directory, relative to the working directory.
pub const DEFAULT_ROOT: &str = "./sops";

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".sops-acl.toml";

/// Environment variable overriding the SOPS root.
pub const ROOT_ENV: &str = "SOPS_ACL_ROOT";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SOPS_ACL_LOG";

/// Directory holding one subdirectory per user.
pub const USERS_DIR: &str = "users";

/// Directory holding one subdirectory per machine.
pub const MACHINES_DIR: &str = "machines";

/// Directory holding one subdirectory per group.
pub const GROUPS_DIR: &str = "groups";

/// Directory holding one subdirectory per secret.
pub const SECRETS_DIR: &str = "secrets";

/// Key material file inside a user or machine directory.
pub const KEY_FILE: &str = "key.json";

/// Key record types retained by default.
pub const DEFAULT_KEY_TYPES: &[&str] = &["age"];

/// Default graph output format.
pub const DEFAULT_GRAPH_FORMAT: &str = "png";

/// Default graph output file stem.
pub const DEFAULT_GRAPH_OUTPUT: &str = "sops_hierarchy";

/// Graphviz executable used to render non-DOT formats.
pub const GRAPHVIZ_BIN: &str = "dot";
