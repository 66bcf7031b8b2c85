//! Master passphrase verifier.
//!
//! The vault document stores an Argon2id hash (PHC string format) of the
//! master passphrase so a wrong passphrase is rejected up front instead
//! of surfacing later as per-entry decryption failures.  The hash cannot
//! be used to recover the passphrase or the encryption key.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::errors::{PassKeepError, Result};

/// Hash the master passphrase into a PHC-format string with a random salt.
pub fn hash_passphrase(passphrase: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| PassKeepError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Verify the master passphrase against a stored PHC string.
///
/// A mismatch is `PassphraseMismatch`; an unparseable stored hash means
/// the vault file was edited by hand and is reported as `SchemaMismatch`.
pub fn verify_passphrase(passphrase: &str, stored: &str) -> Result<()> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| PassKeepError::SchemaMismatch(format!("master_password_hash: {e}")))?;

    Argon2::default()
        .verify_password(passphrase.as_bytes(), &parsed)
        .map_err(|_| PassKeepError::PassphraseMismatch)
}
