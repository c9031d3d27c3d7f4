//! Order log storage.

use quickbite_core::AccountId;

use super::{RepositoryError, read_collection, write_collection};
use crate::models::Order;
use crate::store::{Store, keys};

/// Repository for the append-only order log.
pub struct OrderRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// All placed orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        read_collection(self.store, keys::ORDERS)
    }

    /// Orders placed by one account, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn list_for(&self, user_id: AccountId) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.list()?;
        Ok(orders.into_iter().filter(|o| o.user_id == user_id).collect())
    }

    /// Append a freshly created order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` on storage failure.
    pub fn append(&self, order: Order) -> Result<(), RepositoryError> {
        let mut orders = self.list()?;
        orders.push(order);
        write_collection(self.store, keys::ORDERS, &orders)
    }
}
