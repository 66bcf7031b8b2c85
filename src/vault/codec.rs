//! JSON codec for the vault document.
//!
//! Encoding is pretty-printed for hand inspection; only field values are
//! guaranteed stable, not exact bytes.  Decoding is two-staged so the
//! caller can tell "not JSON at all" (`MalformedDocument`) apart from
//! "JSON of the wrong shape" (`SchemaMismatch`).  Business invariants
//! such as entry uniqueness are not checked here.

use crate::errors::{PassKeepError, Result};

use super::entry::VaultDocument;

/// Serialize a vault document to pretty-printed JSON bytes.
pub fn encode(doc: &VaultDocument) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(doc).map_err(|e| PassKeepError::SerializationError(e.to_string()))
}

/// Deserialize vault bytes back into a document.
pub fn decode(bytes: &[u8]) -> Result<VaultDocument> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| PassKeepError::MalformedDocument(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| PassKeepError::SchemaMismatch(e.to_string()))
}
