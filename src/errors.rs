use thiserror::Error;

/// All errors that can occur in PassKeep.
#[derive(Debug, Error)]
pub enum PassKeepError {
    // --- Session errors ---
    #[error("Master passphrase not set — unlock the vault first")]
    PassphraseNotSet,

    #[error("Master passphrase does not match this vault")]
    PassphraseMismatch,

    // --- Entry errors ---
    #[error("An entry for {username}@{site} already exists (use `update` to change it)")]
    DuplicateEntry { site: String, username: String },

    #[error("No entry found for site '{0}'")]
    NotFound(String),

    // --- Store errors ---
    #[error("Vault file is not valid JSON: {0}")]
    MalformedDocument(String),

    #[error("Vault file has an unexpected shape: {0}")]
    SchemaMismatch(String),

    // --- Crypto errors ---
    #[error("Stored password is too short or not valid base64 — vault may be corrupted")]
    MalformedCiphertext,

    #[error("Decryption failed — wrong passphrase or tampered data")]
    AuthenticationFailure,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for PassKeep results.
pub type Result<T> = std::result::Result<T, PassKeepError>;
