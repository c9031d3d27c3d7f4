//! Immutable order snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickbite_core::{AccountId, Money, OrderId, OrderStatus};

use super::cart::CartLine;

/// An order, created once at checkout and never mutated afterwards.
///
/// All monetary fields are frozen copies of the cart computation at checkout
/// time; later promo or price changes do not touch placed orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The purchased lines.
    pub items: Vec<CartLine>,
    /// Sum of line totals at checkout.
    pub subtotal: Money,
    /// Promo discount applied at checkout.
    pub discount: Money,
    /// Delivery surcharge at checkout.
    pub delivery_cost: Money,
    /// `max(0, subtotal - discount) + delivery_cost`.
    pub total: Money,
    /// Lifecycle status; always `pending` when created.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// The account that placed the order.
    pub user_id: AccountId,
}
