//! Passphrase-based AES-256-GCM encryption for individual password fields.
//!
//! The 32-byte key is the SHA-256 digest of the master passphrase.  Each
//! call to `encrypt` generates a fresh random 12-byte nonce and prepends
//! it to the ciphertext, so encrypting the same plaintext twice never
//! yields the same blob.  The whole buffer is base64-encoded for storage
//! inside the JSON vault document.
//!
//! Layout of the decoded blob:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::errors::{PassKeepError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Derive the 32-byte AES key from the master passphrase.
fn derive_key(passphrase: &str) -> [u8; 32] {
    Sha256::digest(passphrase.as_bytes()).into()
}

/// Encrypt `plaintext` under `passphrase`.
///
/// Returns `base64(nonce || ciphertext || tag)`.  Two calls with the same
/// inputs produce different blobs because the nonce is random per call.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    let key = derive_key(passphrase);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| PassKeepError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| PassKeepError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the vault only stores one blob per entry.
    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(blob))
}

/// Decrypt a blob produced by `encrypt`.
///
/// Fails with `MalformedCiphertext` when the blob is not valid base64 or
/// is too short to contain a nonce (checked before any decryption), and
/// with `AuthenticationFailure` when the GCM tag does not verify — wrong
/// passphrase, tampered, or truncated data.
pub fn decrypt(blob: &str, passphrase: &str) -> Result<String> {
    let data = BASE64
        .decode(blob)
        .map_err(|_| PassKeepError::MalformedCiphertext)?;

    if data.len() < NONCE_LEN {
        return Err(PassKeepError::MalformedCiphertext);
    }

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let key = derive_key(passphrase);
    let cipher =
        Aes256Gcm::new_from_slice(&key).map_err(|_| PassKeepError::AuthenticationFailure)?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassKeepError::AuthenticationFailure)?;

    String::from_utf8(plaintext).map_err(|_| PassKeepError::MalformedCiphertext)
}
