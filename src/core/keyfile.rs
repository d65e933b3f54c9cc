//! Key material files.
//!
//! A `key.json` holds a JSON array of key records:
//!
//! ```json
//! [
//!   { "type": "age", "publickey": "age1..." },
//!   { "type": "ssh", "publickey": "ssh-ed25519 ..." }
//! ]
//! ```
//!
//! Only records whose `type` is recognised are kept, in file order. Keys are
//! carried as opaque strings and never validated.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

use crate::core::types::PublicKey;
use crate::error::KeyFileError;

/// Parse key file contents, keeping keys of the given types.
///
/// # Errors
///
/// Returns `KeyFileError::Parse` if the contents are not a JSON array of
/// objects, or `KeyFileError::MissingPublicKey` if a record of a recognised
/// type has no string `publickey`. Fields of other records are not inspected.
pub fn parse(path: &Path, contents: &str, types: &[String]) -> Result<Vec<PublicKey>, KeyFileError> {
    let records: Vec<Map<String, Value>> =
        serde_json::from_str(contents).map_err(|source| KeyFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut keys = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let recognised = record
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| types.iter().any(|known| known == t));
        if !recognised {
            continue;
        }
        match record.get("publickey").and_then(Value::as_str) {
            Some(key) => keys.push(key.to_string()),
            None => {
                return Err(KeyFileError::MissingPublicKey {
                    path: path.to_path_buf(),
                    index,
                })
            }
        }
    }
    Ok(keys)
}

/// Read and parse a key file.
///
/// # Errors
///
/// Returns `KeyFileError::Read` if the file cannot be read, or any error
/// from [`parse`].
pub fn load(path: &Path, types: &[String]) -> Result<Vec<PublicKey>, KeyFileError> {
    let contents = fs::read_to_string(path).map_err(|source| KeyFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &contents, types)
}

/// Load the keys declared in a principal directory.
///
/// A missing key file means no keys. A malformed one is logged and also
/// treated as no keys.
pub fn load_or_empty(path: &Path, types: &[String]) -> Vec<PublicKey> {
    if !path.exists() {
        return Vec::new();
    }
    match load(path, types) {
        Ok(keys) => {
            trace!(path = %path.display(), keys = keys.len(), "key file loaded");
            keys
        }
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}
