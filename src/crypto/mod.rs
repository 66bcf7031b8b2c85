//! Cryptographic primitives for PassKeep.
//!
//! This module provides:
//! - AES-256-GCM encryption of password fields under a SHA-256-derived
//!   key from the master passphrase (`cipher`)
//! - Argon2id hashing and verification of the master passphrase (`verifier`)

pub mod cipher;
pub mod verifier;

// Re-export the most commonly used items.
pub use cipher::{decrypt, encrypt};
pub use verifier::{hash_passphrase, verify_passphrase};
