//! Promo code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PromoCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PromoCodeError {
    /// The input is empty after trimming.
    #[error("promo code cannot be empty")]
    Empty,
}

/// A normalized promo code token.
///
/// Codes are compared case-insensitively: parsing trims surrounding
/// whitespace and uppercases, so `" savor10 "` and `"SAVOR10"` are the same
/// code. Whether a code is *known* is decided by the cart engine, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    /// Normalize and wrap a raw promo code entry.
    ///
    /// # Errors
    ///
    /// Returns [`PromoCodeError::Empty`] if nothing remains after trimming.
    pub fn parse(s: &str) -> Result<Self, PromoCodeError> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(PromoCodeError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PromoCode {
    type Err = PromoCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
