//! QuickBite Core - Shared domain types.
//!
//! This crate provides common types used across all QuickBite components:
//! - `storefront` - The ordering engine (accounts, promotions, cart, checkout)
//! - `cli` - Command-line front end driving the storefront operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, usernames,
//!   promo codes, and statuses
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
