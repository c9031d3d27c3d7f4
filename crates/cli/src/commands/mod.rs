//! CLI command implementations.
//!
//! Each module wraps one group of storefront operations and renders the
//! result for the terminal.

pub mod account;
pub mod cart;
pub mod menu;
pub mod promo;
