//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `QUICKBITE_DATA_DIR` - Directory for the durable store (default: `./data`)
//! - `QUICKBITE_DELIVERY_FEE` - Flat delivery surcharge in minor currency
//!   units (default: 200)
//! - `QUICKBITE_ADMIN_PASSWORD` - Password for the seed admin account
//!   (default: a documented placeholder, not a security control)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use quickbite_core::Money;

/// Default flat delivery surcharge, in minor currency units.
const DEFAULT_DELIVERY_FEE: i64 = 200;

/// Placeholder credential for the seed admin account. Documented as such;
/// deployments set `QUICKBITE_ADMIN_PASSWORD`.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the durable store files.
    pub data_dir: PathBuf,
    /// Flat surcharge applied when the delivery method is `delivery`.
    pub delivery_fee: Money,
    /// Password used when seeding the bootstrap admin account.
    pub admin_password: SecretString,
}

impl Config {
    /// Load configuration from the environment (reading `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `QUICKBITE_DELIVERY_FEE` is
    /// set but not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_dir = std::env::var("QUICKBITE_DATA_DIR")
            .map_or_else(|_| PathBuf::from("data"), PathBuf::from);

        let delivery_fee = match std::env::var("QUICKBITE_DELIVERY_FEE") {
            Ok(raw) => {
                let units: i64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "QUICKBITE_DELIVERY_FEE".to_owned(),
                        format!("expected a non-negative integer, got {raw:?}"),
                    )
                })?;
                if units < 0 {
                    return Err(ConfigError::InvalidEnvVar(
                        "QUICKBITE_DELIVERY_FEE".to_owned(),
                        "delivery fee cannot be negative".to_owned(),
                    ));
                }
                Money::from_minor_units(units)
            }
            Err(_) => Money::from_minor_units(DEFAULT_DELIVERY_FEE),
        };

        let admin_password = std::env::var("QUICKBITE_ADMIN_PASSWORD")
            .map_or_else(|_| SecretString::from(DEFAULT_ADMIN_PASSWORD), SecretString::from);

        Ok(Self {
            data_dir,
            delivery_fee,
            admin_password,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            delivery_fee: Money::from_minor_units(DEFAULT_DELIVERY_FEE),
            admin_password: SecretString::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delivery_fee, Money::from_minor_units(200));
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }
}
