//! Read-modify-write accessors over the durable store.
//!
//! Each repository owns one store key and presents typed operations over the
//! JSON collection behind it. There is exactly one logical writer (the
//! single running client), so every mutation is a plain read-modify-write
//! with no locking.
//!
//! Corrupted documents degrade gracefully: reads fall back to the empty
//! collection with a warning rather than failing the operation, per the
//! recovery policy for storage faults.

pub mod cart;
pub mod orders;
pub mod promotions;
pub mod session;
pub mod users;

pub use cart::CartRepository;
pub use orders::OrderRepository;
pub use promotions::PromotionRepository;
pub use session::SessionRepository;
pub use users::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::store::{Store, StoreError};

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The durable store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A record could not be serialized.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g. duplicate username or email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read a JSON array from `key`, falling back to empty when the key is
/// absent or its document does not parse.
pub(crate) fn read_collection<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Vec<T>, RepositoryError> {
    let Some(raw) = store.read(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!(key, error = %e, "corrupted collection in store, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize `items` and write them under `key`.
pub(crate) fn write_collection<T: Serialize>(
    store: &dyn Store,
    key: &str,
    items: &[T],
) -> Result<(), RepositoryError> {
    let json = serde_json::to_string(items)
        .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
    store.write(key, &json)?;
    Ok(())
}
