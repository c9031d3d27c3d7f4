//! The storefront operations.
//!
//! - [`auth`] - account directory: register, login, logout, seed admin
//! - [`promotions`] - admin-gated promotion catalog
//! - [`cart`] - the cart & checkout engine

pub mod auth;
pub mod cart;
pub mod promotions;

pub use auth::{AuthError, AuthService, Registration};
pub use cart::{CartError, CartService};
pub use promotions::{NewPromotion, PromotionError, PromotionService};
