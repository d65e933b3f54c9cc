//! Error types.
//!
//! A top-level [`Error`] wraps the configuration and graph domains. Only
//! configuration errors are fatal; key file and graph errors are recovered
//! close to where they happen and surface as warnings.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration and invocation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SOPS root directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Key material file errors.
///
/// Never propagated past the scan: a bad key file means zero keys.
#[derive(Error, Debug)]
pub enum KeyFileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed key file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed key file {}: record {index} has no publickey", path.display())]
    MissingPublicKey { path: PathBuf, index: usize },
}

/// Graph export errors.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("graphviz `dot` executable not found")]
    ToolMissing,

    #[error("failed to write graph: {0}")]
    Write(#[source] std::io::Error),

    #[error("graphviz failed: {0}")]
    RenderFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
