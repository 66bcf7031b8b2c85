//! Vault file lifecycle: existence check, load, atomic save, locking.
//!
//! The repository is the only component that touches the filesystem.
//! Saves go through a temp file in the same directory followed by a
//! rename, so a crash mid-write can never leave a truncated file that
//! still parses.  Directory and file are created owner-only (0700/0600).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;

use crate::errors::Result;

use super::codec;
use super::entry::VaultDocument;

/// Owns the vault file on disk.
pub struct VaultRepository {
    path: PathBuf,
}

/// Exclusive advisory lock over the vault file, held for the duration of
/// one load-mutate-save cycle.  Released on drop.
///
/// Two concurrent invocations of the tool against the same vault would
/// otherwise race: whichever save lands last silently discards the
/// other's change.  On non-Unix targets this is a no-op guard.
pub struct VaultLock {
    #[cfg(unix)]
    file: fs::File,
}

impl Drop for VaultLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        unsafe {
            libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
        }
    }
}

impl VaultRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff the vault file is present.  Plain not-found is not an error.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Take an exclusive advisory lock scoped to the vault file path.
    ///
    /// Blocks until any other holder releases it.
    #[cfg(unix)]
    pub fn lock(&self) -> Result<VaultLock> {
        self.ensure_dir()?;

        let lock_path = self.path.with_extension("lock");
        let file = open_owner_only(&lock_path)?;

        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX) };
        if rc != 0 {
            return Err(std::io::Error::last_os_error().into());
        }

        Ok(VaultLock { file })
    }

    /// No-op lock on targets without flock.
    #[cfg(not(unix))]
    pub fn lock(&self) -> Result<VaultLock> {
        Ok(VaultLock {})
    }

    /// Load the full vault document.
    ///
    /// A missing file is first-run, not an error: an empty document is
    /// returned.  A present file is read in full and decoded; a corrupt
    /// file is never partially applied.
    pub fn load(&self) -> Result<VaultDocument> {
        if !self.exists() {
            return Ok(VaultDocument::default());
        }

        let bytes = fs::read(&self.path)?;
        codec::decode(&bytes)
    }

    /// Encode the document and write it to the vault file atomically.
    ///
    /// The temp file lives in the same directory so the rename cannot
    /// cross filesystems.
    pub fn save(&self, doc: &VaultDocument) -> Result<()> {
        self.ensure_dir()?;

        let bytes = codec::encode(doc)?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        let mut tmp = open_owner_only(&tmp_path)?;
        tmp.write_all(&bytes)?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Create the containing directory with owner-only permissions.
    fn ensure_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                let mut builder = fs::DirBuilder::new();
                builder.recursive(true);
                #[cfg(unix)]
                builder.mode(0o700);
                builder.create(dir)?;
            }
        }
        Ok(())
    }
}

/// Open (create/truncate) a file readable and writable only by the owner.
fn open_owner_only(path: &Path) -> std::io::Result<fs::File> {
    let mut opts = fs::OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    opts.mode(0o600);
    opts.open(path)
}
