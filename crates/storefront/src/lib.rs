//! QuickBite storefront - the client-side ordering engine.
//!
//! Everything the kiosk front end needs: a durable key-value store (the
//! browser-local-storage analog), account registration and login, an
//! admin-gated promotion catalog, and the cart/checkout engine that turns
//! line items into immutable orders.
//!
//! There is no server. All state lives in the [`store`] and is re-read on
//! startup; every mutating operation persists synchronously before returning.
//!
//! # Layers
//!
//! - [`store`] - durable string-keyed JSON documents
//! - [`repo`] - read-modify-write accessors per collection
//! - [`models`] - persisted record shapes
//! - [`services`] - the operations: [`services::auth`], [`services::promotions`],
//!   [`services::cart`]
//! - [`catalog`] - the built-in product menu
//! - [`state`] - the application context wiring store, clock, and config
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod services;
pub mod state;
pub mod store;

pub use error::{AppError, Result};
pub use state::AppState;
