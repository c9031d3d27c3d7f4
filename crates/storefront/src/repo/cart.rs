//! Cart line storage.
//!
//! Only the line array persists; promo code and delivery method are
//! transient per-session state owned by the cart engine.

use super::{RepositoryError, read_collection, write_collection};
use crate::models::CartLine;
use crate::store::{Store, keys};

/// Repository for the persisted cart lines.
pub struct CartRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// The persisted cart lines, empty when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn load(&self) -> Result<Vec<CartLine>, RepositoryError> {
        read_collection(self.store, keys::CART)
    }

    /// Persist the full line array, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` on storage failure.
    pub fn save(&self, lines: &[CartLine]) -> Result<(), RepositoryError> {
        write_collection(self.store, keys::CART, lines)
    }
}
