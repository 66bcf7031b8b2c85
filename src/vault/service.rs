//! High-level vault operations used by CLI commands.
//!
//! `VaultService` holds the session master passphrase and runs every
//! operation as one load-mutate-save cycle against the repository, under
//! the repository's exclusive lock.  Plaintext passwords exist only in
//! the decrypted copies returned to the caller; they are never persisted.

use chrono::Utc;
use zeroize::Zeroizing;

use crate::crypto::{cipher, verifier};
use crate::errors::{PassKeepError, Result};

use super::entry::{VaultDocument, VaultEntry};
use super::repository::VaultRepository;

/// The business core: session state plus CRUD over vault entries.
pub struct VaultService {
    repo: VaultRepository,

    /// Session master passphrase, set once per invocation.
    /// Wiped from memory when the service is dropped.
    passphrase: Option<Zeroizing<String>>,
}

impl VaultService {
    pub fn new(repo: VaultRepository) -> Self {
        Self {
            repo,
            passphrase: None,
        }
    }

    /// Supply the master passphrase for this session.
    ///
    /// Pure in-memory assignment; verification against the vault's stored
    /// hash happens at the start of each operation, once the document has
    /// been loaded.
    pub fn set_master_passphrase(&mut self, passphrase: &str) {
        self.passphrase = Some(Zeroizing::new(passphrase.to_string()));
    }

    /// Session passphrase, or `PassphraseNotSet` if none was supplied.
    fn passphrase(&self) -> Result<&str> {
        self.passphrase
            .as_ref()
            .map(|p| p.as_str())
            .ok_or(PassKeepError::PassphraseNotSet)
    }

    /// Check the session passphrase against the document's verifier.
    ///
    /// An empty `master_password_hash` means no verifier has been
    /// installed yet (fresh vault, or one written by an older build).
    /// Mutating operations install it then; read operations let the
    /// document pass unchanged since installing would require a write.
    fn check_passphrase(&self, doc: &mut VaultDocument, install: bool) -> Result<()> {
        let passphrase = self.passphrase()?;

        if doc.master_password_hash.is_empty() {
            if install {
                doc.master_password_hash = verifier::hash_passphrase(passphrase)?;
            }
            return Ok(());
        }

        verifier::verify_passphrase(passphrase, &doc.master_password_hash)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Add a new entry.
    ///
    /// The `(site, username)` pair must not already exist.  Returns the
    /// stored entry (password still encrypted) for display purposes.
    pub fn add_password(&self, site: &str, username: &str, password: &str) -> Result<VaultEntry> {
        let passphrase = self.passphrase()?;

        let _lock = self.repo.lock()?;
        let mut doc = self.repo.load()?;
        self.check_passphrase(&mut doc, true)?;

        if doc
            .entries
            .iter()
            .any(|e| e.site == site && e.username == username)
        {
            return Err(PassKeepError::DuplicateEntry {
                site: site.to_string(),
                username: username.to_string(),
            });
        }

        let encrypted = cipher::encrypt(password, passphrase)?;
        let entry = VaultEntry::new(site, username, encrypted);
        doc.entries.push(entry.clone());

        self.repo.save(&doc)?;
        Ok(entry)
    }

    /// Return the first entry for `site` with its password decrypted.
    ///
    /// Username is not disambiguated: when several entries share a site,
    /// the earliest in stored order wins.
    pub fn get_password(&self, site: &str) -> Result<VaultEntry> {
        let passphrase = self.passphrase()?;

        let _lock = self.repo.lock()?;
        let mut doc = self.repo.load()?;
        self.check_passphrase(&mut doc, false)?;

        let entry = doc
            .entries
            .iter()
            .find(|e| e.site == site)
            .ok_or_else(|| PassKeepError::NotFound(site.to_string()))?;

        let mut decrypted = entry.clone();
        decrypted.password = cipher::decrypt(&entry.password, passphrase)?;
        Ok(decrypted)
    }

    /// Return all entries in stored order, passwords decrypted.
    ///
    /// Fail-fast: a single undecryptable entry fails the whole listing.
    pub fn list_passwords(&self) -> Result<Vec<VaultEntry>> {
        let passphrase = self.passphrase()?;

        let _lock = self.repo.lock()?;
        let mut doc = self.repo.load()?;
        self.check_passphrase(&mut doc, false)?;

        let mut entries = Vec::with_capacity(doc.entries.len());
        for entry in &doc.entries {
            let mut decrypted = entry.clone();
            decrypted.password = cipher::decrypt(&entry.password, passphrase)?;
            entries.push(decrypted);
        }
        Ok(entries)
    }

    /// Replace the password of the first entry matching both `site` and
    /// `username`, refreshing `updated_at`.  `id` and `created_at` are
    /// untouched.
    pub fn update_password(&self, site: &str, username: &str, password: &str) -> Result<()> {
        let passphrase = self.passphrase()?;

        let _lock = self.repo.lock()?;
        let mut doc = self.repo.load()?;
        self.check_passphrase(&mut doc, true)?;

        let entry = doc
            .entries
            .iter_mut()
            .find(|e| e.site == site && e.username == username)
            .ok_or_else(|| PassKeepError::NotFound(site.to_string()))?;

        entry.password = cipher::encrypt(password, passphrase)?;
        entry.updated_at = Utc::now();

        self.repo.save(&doc)
    }

    /// Remove the first entry matching `site` (username not considered),
    /// preserving the relative order of the rest.
    pub fn delete_password(&self, site: &str) -> Result<()> {
        self.passphrase()?;

        let _lock = self.repo.lock()?;
        let mut doc = self.repo.load()?;
        self.check_passphrase(&mut doc, true)?;

        let index = doc
            .entries
            .iter()
            .position(|e| e.site == site)
            .ok_or_else(|| PassKeepError::NotFound(site.to_string()))?;

        doc.entries.remove(index);
        self.repo.save(&doc)
    }
}
