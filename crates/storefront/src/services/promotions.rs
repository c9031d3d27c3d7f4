//! Promotion catalog service.
//!
//! Mutations are admin-gated; listing is open. "Currently running" is always
//! derived from the clock, never stored.

use chrono::NaiveDate;
use thiserror::Error;

use quickbite_core::PromotionId;

use crate::clock::Clock;
use crate::models::{Account, Promotion};
use crate::repo::{PromotionRepository, RepositoryError};
use crate::state::AppState;

/// Banner image used when the form leaves the image field blank.
const DEFAULT_IMAGE: &str = "images/promo-default.svg";

/// Errors that can occur during promotion-catalog operations.
#[derive(Debug, Error)]
pub enum PromotionError {
    /// The acting account is not an admin.
    #[error("admin privileges required")]
    Forbidden,

    /// Malformed input (empty title/description, inverted date range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No promotion with the given ID.
    #[error("promotion not found")]
    NotFound,

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Form data for creating or updating a promotion.
#[derive(Debug, Clone)]
pub struct NewPromotion {
    /// Banner headline.
    pub title: String,
    /// Banner body text.
    pub description: String,
    /// Banner image URI; a default placeholder is used when `None`.
    pub image: Option<String>,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

impl NewPromotion {
    fn validate(&self) -> Result<(), PromotionError> {
        if self.title.trim().is_empty() {
            return Err(PromotionError::Validation("title cannot be empty".to_owned()));
        }
        if self.description.trim().is_empty() {
            return Err(PromotionError::Validation(
                "description cannot be empty".to_owned(),
            ));
        }
        if self.start_date > self.end_date {
            return Err(PromotionError::Validation(
                "end date cannot be before start date".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Promotion catalog service.
pub struct PromotionService<'a> {
    promotions: PromotionRepository<'a>,
    clock: &'a dyn Clock,
}

impl<'a> PromotionService<'a> {
    /// Create a new promotion catalog service.
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            promotions: PromotionRepository::new(state.store()),
            clock: state.clock(),
        }
    }

    /// Create a promotion. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `PromotionError::Forbidden` for non-admin actors and
    /// `PromotionError::Validation` for malformed input; in both cases the
    /// catalog is unchanged.
    pub fn add(&self, actor: &Account, data: NewPromotion) -> Result<Promotion, PromotionError> {
        require_admin(actor)?;
        data.validate()?;

        let promotion = Promotion {
            id: PromotionId::generate(),
            title: data.title.trim().to_owned(),
            description: data.description.trim().to_owned(),
            image: data.image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
            start_date: data.start_date,
            end_date: data.end_date,
            active: true,
            created_at: self.clock.now(),
            created_by: actor.id,
        };

        self.promotions.insert(promotion.clone())?;
        tracing::info!(id = %promotion.id, title = %promotion.title, "promotion created");
        Ok(promotion)
    }

    /// Rewrite an existing promotion's content and window. Admin only.
    ///
    /// # Errors
    ///
    /// As for [`Self::add`], plus `PromotionError::NotFound` when `id` does
    /// not exist.
    pub fn update(
        &self,
        actor: &Account,
        id: PromotionId,
        data: NewPromotion,
    ) -> Result<Promotion, PromotionError> {
        require_admin(actor)?;
        data.validate()?;

        let existing = self
            .promotions
            .list()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(PromotionError::NotFound)?;

        let image = data.image.unwrap_or_else(|| existing.image.clone());
        let updated = Promotion {
            title: data.title.trim().to_owned(),
            description: data.description.trim().to_owned(),
            image,
            start_date: data.start_date,
            end_date: data.end_date,
            ..existing
        };

        self.promotions.update(updated.clone()).map_err(|e| match e {
            RepositoryError::NotFound => PromotionError::NotFound,
            other => PromotionError::Repository(other),
        })?;
        Ok(updated)
    }

    /// Delete a promotion. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `PromotionError::Forbidden` for non-admin actors and
    /// `PromotionError::NotFound` when `id` does not exist.
    pub fn remove(&self, actor: &Account, id: PromotionId) -> Result<(), PromotionError> {
        require_admin(actor)?;

        self.promotions.remove(id).map_err(|e| match e {
            RepositoryError::NotFound => PromotionError::NotFound,
            other => PromotionError::Repository(other),
        })?;
        tracing::info!(%id, "promotion deleted");
        Ok(())
    }

    /// All switched-on promotions, regardless of date window.
    ///
    /// # Errors
    ///
    /// Returns `PromotionError::Repository` on storage failure.
    pub fn list(&self) -> Result<Vec<Promotion>, PromotionError> {
        let promotions = self.promotions.list()?;
        Ok(promotions.into_iter().filter(|p| p.active).collect())
    }

    /// Every stored promotion, for the admin view.
    ///
    /// # Errors
    ///
    /// Returns `PromotionError::Repository` on storage failure.
    pub fn list_all(&self) -> Result<Vec<Promotion>, PromotionError> {
        Ok(self.promotions.list()?)
    }

    /// Promotions running today, for the front-page display.
    ///
    /// # Errors
    ///
    /// Returns `PromotionError::Repository` on storage failure.
    pub fn list_current(&self) -> Result<Vec<Promotion>, PromotionError> {
        let today = self.clock.today();
        let promotions = self.promotions.list()?;
        Ok(promotions
            .into_iter()
            .filter(|p| p.is_running(today))
            .collect())
    }
}

fn require_admin(actor: &Account) -> Result<(), PromotionError> {
    if actor.role.is_admin() {
        Ok(())
    } else {
        Err(PromotionError::Forbidden)
    }
}
