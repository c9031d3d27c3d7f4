//! Persisted record shapes.
//!
//! These serialize with the exact field names the legacy web client wrote
//! to local storage (camelCase keys), so an existing data directory keeps
//! working.

pub mod account;
pub mod cart;
pub mod order;
pub mod product;
pub mod promotion;

pub use account::{Account, Session};
pub use cart::CartLine;
pub use order::Order;
pub use product::{Category, ParseCategoryError, Product};
pub use promotion::Promotion;
