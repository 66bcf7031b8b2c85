//! Vault module — the encrypted credential store.
//!
//! This module provides:
//! - `VaultEntry` and `VaultDocument` types (`entry`)
//! - JSON codec for the on-disk document (`codec`)
//! - File lifecycle with atomic writes and locking (`repository`)
//! - High-level `VaultService` CRUD operations (`service`)

pub mod codec;
pub mod entry;
pub mod repository;
pub mod service;

// Re-export the most commonly used items.
pub use entry::{VaultDocument, VaultEntry};
pub use repository::VaultRepository;
pub use service::VaultService;
