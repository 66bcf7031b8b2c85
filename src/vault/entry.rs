//! The vault document and its entries.
//!
//! `VaultDocument` is the whole persisted state: a passphrase verifier
//! plus an ordered list of entries.  Insertion order is preserved — the
//! CLI numbers entries by position — and the document is always loaded
//! and saved as a unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One credential record.
///
/// The `password` field holds base64-wrapped `nonce || ciphertext || tag`
/// at rest.  Copies returned by the service carry the decrypted plaintext
/// instead; those copies are never written back to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Unique identifier, generated at creation, never changed.
    pub id: Uuid,

    /// Label for the service this credential belongs to (e.g. "github.com").
    pub site: String,

    pub username: String,

    /// Encrypted password blob (plaintext in decrypted copies).
    pub password: String,

    /// When this entry was first created.
    pub created_at: DateTime<Utc>,

    /// When this entry was last modified.
    pub updated_at: DateTime<Utc>,
}

impl VaultEntry {
    /// Build a new entry around an already-encrypted password.
    pub fn new(site: &str, username: &str, encrypted_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            site: site.to_string(),
            username: username.to_string(),
            password: encrypted_password,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The full persisted vault state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultDocument {
    /// Argon2id PHC hash of the master passphrase.  Empty until the first
    /// mutating operation installs it; verified on every operation after.
    #[serde(default)]
    pub master_password_hash: String,

    /// All entries in insertion order.
    #[serde(default)]
    pub entries: Vec<VaultEntry>,
}
