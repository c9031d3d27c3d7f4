//! Core types for QuickBite.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod promo;
pub mod status;
pub mod username;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::Money;
pub use promo::{PromoCode, PromoCodeError};
pub use status::{DeliveryMethod, OrderStatus, Role};
pub use username::{Username, UsernameError};
