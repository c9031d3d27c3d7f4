//! Promotion catalog storage.

use quickbite_core::PromotionId;

use super::{RepositoryError, read_collection, write_collection};
use crate::models::Promotion;
use crate::store::{Store, keys};

/// Repository for the promotions collection.
pub struct PromotionRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> PromotionRepository<'a> {
    /// Create a new promotion repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// All stored promotions, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Promotion>, RepositoryError> {
        read_collection(self.store, keys::PROMOTIONS)
    }

    /// Append a promotion.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` on storage failure.
    pub fn insert(&self, promotion: Promotion) -> Result<(), RepositoryError> {
        let mut promotions = self.list()?;
        promotions.push(promotion);
        write_collection(self.store, keys::PROMOTIONS, &promotions)
    }

    /// Replace the promotion with `updated.id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no promotion has that ID,
    /// `RepositoryError::Store` on storage failure.
    pub fn update(&self, updated: Promotion) -> Result<(), RepositoryError> {
        let mut promotions = self.list()?;
        let slot = promotions
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = updated;
        write_collection(self.store, keys::PROMOTIONS, &promotions)
    }

    /// Delete the promotion with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no promotion has that ID,
    /// `RepositoryError::Store` on storage failure.
    pub fn remove(&self, id: PromotionId) -> Result<(), RepositoryError> {
        let mut promotions = self.list()?;
        let before = promotions.len();
        promotions.retain(|p| p.id != id);
        if promotions.len() == before {
            return Err(RepositoryError::NotFound);
        }
        write_collection(self.store, keys::PROMOTIONS, &promotions)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;
    use quickbite_core::AccountId;

    fn promotion(title: &str) -> Promotion {
        Promotion {
            id: PromotionId::generate(),
            title: title.to_owned(),
            description: "details".to_owned(),
            image: String::new(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-06-30".parse().unwrap(),
            active: true,
            created_at: Utc::now(),
            created_by: AccountId::generate(),
        }
    }

    #[test]
    fn test_insert_and_list() {
        let store = MemoryStore::new();
        let repo = PromotionRepository::new(&store);
        repo.insert(promotion("Summer deal")).unwrap();
        repo.insert(promotion("Happy hour")).unwrap();
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let repo = PromotionRepository::new(&store);
        let promo = promotion("Summer deal");
        let id = promo.id;
        repo.insert(promo).unwrap();

        repo.remove(id).unwrap();
        assert!(repo.list().unwrap().is_empty());
        assert!(matches!(repo.remove(id), Err(RepositoryError::NotFound)));
    }

    #[test]
    fn test_update() {
        let store = MemoryStore::new();
        let repo = PromotionRepository::new(&store);
        let mut promo = promotion("Summer deal");
        repo.insert(promo.clone()).unwrap();

        promo.title = "Autumn deal".to_owned();
        repo.update(promo.clone()).unwrap();
        assert_eq!(repo.list().unwrap()[0].title, "Autumn deal");

        promo.id = PromotionId::generate();
        assert!(matches!(repo.update(promo), Err(RepositoryError::NotFound)));
    }
}
