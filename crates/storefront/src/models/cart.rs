//! Cart line records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickbite_core::{Money, ProductId};

use super::product::Product;

/// One product-and-quantity entry in the cart.
///
/// Quantity is always at least 1: a line whose quantity would reach zero is
/// removed from the cart, never persisted at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name, snapshotted at add time.
    pub name: String,
    /// Unit price, snapshotted at add time.
    pub unit_price: Money,
    /// How many units. Always >= 1.
    pub quantity: u32,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Build a fresh line for `product`.
    #[must_use]
    pub fn new(product: &Product, quantity: u32, added_at: DateTime<Utc>) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            added_at,
        }
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}
