//! Durable key-value storage.
//!
//! The storefront persists everything as string-keyed JSON documents, the
//! same shape the legacy web client kept in browser local storage. Keys are
//! fixed and listed in [`keys`]; values are whole collections, rewritten on
//! every mutation (one logical writer, no locking).
//!
//! Two backends:
//!
//! - [`FileStore`] - one file per key under a data directory, for real runs
//! - [`MemoryStore`] - a hash map, for tests and ephemeral sessions

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Well-known store keys, preserved for compatibility with existing data.
pub mod keys {
    /// Array of registered accounts.
    pub const USERS: &str = "users";
    /// The single active session, absent when logged out.
    pub const CURRENT_USER: &str = "currentUser";
    /// Array of promotions.
    pub const PROMOTIONS: &str = "promotions";
    /// Array of cart lines for the active session.
    pub const CART: &str = "cart";
    /// Append-only array of checked-out orders.
    pub const ORDERS: &str = "orders";
    /// Last-used login identifier, optional convenience.
    pub const REMEMBERED_EMAIL: &str = "rememberedEmail";
}

/// Errors from the durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed.
    #[error("failed to read key {key:?}: {source}")]
    Read {
        /// The key being read.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a key failed (e.g. disk full). The caller's in-memory state
    /// is still valid and the write can be retried.
    #[error("failed to write key {key:?}: {source}")]
    Write {
        /// The key being written.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// String-keyed durable storage surviving restarts.
///
/// Implementations are synchronous: a returned `Ok` from [`Store::write`]
/// means the value is durable.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the value cannot be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
