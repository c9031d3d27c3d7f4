//! Application-level error type.
//!
//! Service errors carry precise variants; front ends fold them into
//! [`AppError`] and render [`AppError::user_message`]. Storage and
//! configuration failures are logged in full and shown to the user only as
//! a generic message.

use thiserror::Error;

use crate::config::ConfigError;
use crate::repo::RepositoryError;
use crate::services::{AuthError, CartError, PromotionError};
use crate::store::StoreError;

/// Convenience alias used throughout the front ends.
pub type Result<T> = std::result::Result<T, AppError>;

/// Any error surfaced by the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Promotion(#[from] PromotionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// A message safe to show the user.
    ///
    /// Validation and precondition errors pass through as-is; internal
    /// failures (storage, hashing, configuration) are logged and masked.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(AuthError::Repository(e))
            | Self::Cart(CartError::Repository(e))
            | Self::Promotion(PromotionError::Repository(e))
            | Self::Repository(e) => {
                tracing::error!(error = %e, "storage failure");
                "something went wrong, please try again".to_owned()
            }
            Self::Auth(AuthError::PasswordHash) => {
                tracing::error!("password hashing failure");
                "something went wrong, please try again".to_owned()
            }
            Self::Store(e) => {
                tracing::error!(error = %e, "store failure");
                "something went wrong, please try again".to_owned()
            }
            Self::Config(e) => {
                tracing::error!(error = %e, "configuration failure");
                "invalid configuration, check your environment".to_owned()
            }
            Self::Auth(e) => e.to_string(),
            Self::Cart(e) => e.to_string(),
            Self::Promotion(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_pass_through() {
        let err = AppError::from(CartError::EmptyCart);
        assert_eq!(err.user_message(), "cart is empty");

        let err = AppError::from(AuthError::InvalidCredentials);
        assert!(err.user_message().contains("invalid"));
    }

    #[test]
    fn test_internal_errors_are_masked() {
        let err = AppError::from(RepositoryError::DataCorruption("users".to_owned()));
        assert_eq!(err.user_message(), "something went wrong, please try again");
    }
}
