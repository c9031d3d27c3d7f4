//! Cart and checkout engine.
//!
//! Lines persist across sessions; the applied promo code and delivery method
//! are transient and reset whenever the cart is cleared. All money figures
//! (subtotal, discount, delivery, total) are derived on demand from the
//! current lines, never cached.

use thiserror::Error;

use quickbite_core::{
    DeliveryMethod, Money, OrderId, OrderStatus, ProductId, PromoCode, PromoCodeError,
};

use crate::clock::Clock;
use crate::models::{Account, CartLine, Order, Product};
use crate::repo::{CartRepository, OrderRepository, RepositoryError};
use crate::state::AppState;

/// Recognized promo codes and their discount percentages.
const PROMO_CODES: &[(&str, u8)] = &[("SAVOR10", 10), ("SAVOR20", 20)];

/// Errors that can occur during cart and checkout operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product is flagged unavailable.
    #[error("product is currently unavailable")]
    Unavailable,

    /// No catalog product under the given name. Produced by front ends that
    /// look products up by name before calling [`CartService::add_item`].
    #[error("no such product: {0}")]
    UnknownProduct(String),

    /// The code is empty or not in the promo table.
    #[error("unknown promo code")]
    InvalidPromoCode,

    /// Checkout was attempted on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Checkout was attempted without a signed-in account.
    #[error("not signed in")]
    NotAuthenticated,

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<PromoCodeError> for CartError {
    fn from(_: PromoCodeError) -> Self {
        Self::InvalidPromoCode
    }
}

/// Cart and checkout engine.
///
/// Holds the working line set in memory and writes it through to the store
/// on every mutation, so a freshly constructed engine always sees the last
/// persisted cart.
pub struct CartService<'a> {
    cart: CartRepository<'a>,
    orders: OrderRepository<'a>,
    clock: &'a dyn Clock,
    delivery_fee: Money,
    lines: Vec<CartLine>,
    promo_code: Option<PromoCode>,
    delivery: DeliveryMethod,
}

impl<'a> CartService<'a> {
    /// Create a cart engine over `state`, loading any persisted lines.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store cannot be read.
    pub fn new(state: &'a AppState) -> Result<Self, CartError> {
        let cart = CartRepository::new(state.store());
        let lines = cart.load()?;
        Ok(Self {
            cart,
            orders: OrderRepository::new(state.store()),
            clock: state.clock(),
            delivery_fee: state.config().delivery_fee,
            lines,
            promo_code: None,
            delivery: DeliveryMethod::default(),
        })
    }

    /// The current cart lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The applied promo code, if any.
    #[must_use]
    pub fn promo_code(&self) -> Option<&PromoCode> {
        self.promo_code.as_ref()
    }

    /// The chosen delivery method.
    #[must_use]
    pub const fn delivery_method(&self) -> DeliveryMethod {
        self.delivery
    }

    /// Add `quantity` units of `product`, merging into an existing line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` if the product is flagged
    /// unavailable (the cart is unchanged) and `CartError::Repository` on
    /// storage failure.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if !product.available {
            return Err(CartError::Unavailable);
        }
        if quantity == 0 {
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines
                .push(CartLine::new(product, quantity, self.clock.now()));
        }
        self.persist()
    }

    /// Remove the line for `product_id`. Removing an absent line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` on storage failure.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of zero or below removes the line; setting the quantity of
    /// an absent line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` on storage failure.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return Ok(());
        };
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.persist()
    }

    /// Empty the cart and reset the promo code and delivery method.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` on storage failure.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.lines.clear();
        self.promo_code = None;
        self.delivery = DeliveryMethod::default();
        self.persist()
    }

    /// Apply a promo code, replacing any previously applied one.
    ///
    /// The code is trimmed and matched case-insensitively. Codes never
    /// stack: at most one is in effect.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidPromoCode` for empty or unrecognized
    /// codes; the previously applied code stays in effect.
    pub fn apply_promo_code(&mut self, raw: &str) -> Result<u8, CartError> {
        let code = PromoCode::parse(raw)?;
        let percent = promo_percent(&code).ok_or(CartError::InvalidPromoCode)?;
        self.promo_code = Some(code);
        Ok(percent)
    }

    /// Switch between pickup and delivery.
    pub fn set_delivery_method(&mut self, method: DeliveryMethod) {
        self.delivery = method;
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Discount from the applied promo code, rounded half away from zero.
    #[must_use]
    pub fn discount(&self) -> Money {
        match self.promo_code.as_ref().and_then(promo_percent) {
            Some(percent) => self.subtotal().percent(percent),
            None => Money::ZERO,
        }
    }

    /// Delivery surcharge for the chosen method (zero for pickup).
    #[must_use]
    pub fn delivery_cost(&self) -> Money {
        match self.delivery {
            DeliveryMethod::Pickup => Money::ZERO,
            DeliveryMethod::Delivery => self.delivery_fee,
        }
    }

    /// `max(0, subtotal - discount) + delivery_cost`.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal().saturating_sub_to_zero(self.discount()) + self.delivery_cost()
    }

    /// Place an order for the cart contents, then empty the cart.
    ///
    /// The order is appended to the log before the cart is cleared, so a
    /// storage failure never loses a placed order.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotAuthenticated` when `actor` is `None` and
    /// `CartError::EmptyCart` when there is nothing to order; in both cases
    /// the cart is unchanged. Returns `CartError::Repository` on storage
    /// failure.
    pub fn checkout(&mut self, actor: Option<&Account>) -> Result<Order, CartError> {
        let actor = actor.ok_or(CartError::NotAuthenticated)?;
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let order = Order {
            id: OrderId::generate(),
            items: self.lines.clone(),
            subtotal: self.subtotal(),
            discount: self.discount(),
            delivery_cost: self.delivery_cost(),
            total: self.total(),
            status: OrderStatus::Pending,
            created_at: self.clock.now(),
            user_id: actor.id,
        };

        self.orders.append(order.clone())?;
        tracing::info!(id = %order.id, total = %order.total, "order placed");
        self.clear()?;
        Ok(order)
    }

    /// Orders previously placed by `actor`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store cannot be read.
    pub fn orders_for(&self, actor: &Account) -> Result<Vec<Order>, CartError> {
        Ok(self.orders.list_for(actor.id)?)
    }

    fn persist(&self) -> Result<(), CartError> {
        Ok(self.cart.save(&self.lines)?)
    }
}

fn promo_percent(code: &PromoCode) -> Option<u8> {
    PROMO_CODES
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map(|&(_, percent)| percent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::models::Category;
    use crate::store::{MemoryStore, Store, StoreError};
    use chrono::Utc;
    use quickbite_core::{AccountId, Email, Role, Username};

    /// Reads work, every write fails. For exercising storage-failure paths.
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl Store for ReadOnlyStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_owned(),
                source: std::io::Error::other("disk full"),
            })
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    fn state() -> AppState {
        AppState::new(Config::default(), MemoryStore::new(), crate::clock::SystemClock)
    }

    fn account() -> Account {
        Account {
            id: AccountId::generate(),
            username: Username::parse("hungry").unwrap(),
            email: Email::parse("hungry@example.com").unwrap(),
            password_hash: "$argon2id$stub".to_owned(),
            role: Role::User,
            created_at: Utc::now(),
            active: true,
        }
    }

    fn burger(catalog: &Catalog) -> &Product {
        catalog.find_by_name("Classic Burger").unwrap()
    }

    fn fries(catalog: &Catalog) -> &Product {
        catalog.find_by_name("French Fries").unwrap()
    }

    #[test]
    fn test_add_merges_lines() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();

        cart.add_item(burger(state.catalog()), 1).unwrap();
        cart.add_item(burger(state.catalog()), 1).unwrap();
        cart.add_item(fries(state.catalog()), 3).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 3);
    }

    #[test]
    fn test_add_unavailable_rejected() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        let product = Product {
            id: ProductId::generate(),
            name: "Seasonal Shake".to_owned(),
            price: Money::from_minor_units(199),
            category: Category::Drinks,
            description: String::new(),
            image: String::new(),
            available: false,
            ingredients: vec![],
        };

        assert!(matches!(
            cart.add_item(&product, 1),
            Err(CartError::Unavailable)
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_failed_write_reported_and_line_retained() {
        // A write failure reaches the caller, but the in-memory cart keeps
        // the new line so the mutation can be retried.
        let state = AppState::new(
            Config::default(),
            ReadOnlyStore::default(),
            crate::clock::SystemClock,
        );
        let mut cart = CartService::new(&state).unwrap();

        let err = cart.add_item(burger(state.catalog()), 1).unwrap_err();
        assert!(matches!(err, CartError::Repository(_)));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.subtotal(), Money::from_minor_units(299));
    }

    #[test]
    fn test_cart_persists_across_instances() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 2).unwrap();

        let reloaded = CartService::new(&state).unwrap();
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.lines()[0].quantity, 2);
        // Promo code and delivery method do not persist.
        assert!(reloaded.promo_code().is_none());
        assert_eq!(reloaded.delivery_method(), DeliveryMethod::Pickup);
    }

    #[test]
    fn test_set_quantity() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        let id = burger(state.catalog()).id;
        cart.add_item(burger(state.catalog()), 1).unwrap();

        cart.set_quantity(id, 5).unwrap();
        assert_eq!(cart.lines()[0].quantity, 5);

        // Zero or negative removes the line.
        cart.set_quantity(id, 0).unwrap();
        assert!(cart.is_empty());

        // Absent line is a no-op.
        cart.set_quantity(id, 3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        let id = burger(state.catalog()).id;
        cart.add_item(burger(state.catalog()), 1).unwrap();

        cart.remove_item(id).unwrap();
        cart.remove_item(id).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_worked_example_totals() {
        // Two burgers at 299 with SAVOR10 and delivery:
        // subtotal 598, discount 60 (59.8 rounded half up), delivery 200.
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 2).unwrap();
        cart.apply_promo_code("SAVOR10").unwrap();
        cart.set_delivery_method(DeliveryMethod::Delivery);

        assert_eq!(cart.subtotal(), Money::from_minor_units(598));
        assert_eq!(cart.discount(), Money::from_minor_units(60));
        assert_eq!(cart.delivery_cost(), Money::from_minor_units(200));
        assert_eq!(cart.total(), Money::from_minor_units(738));
    }

    #[test]
    fn test_promo_codes_replace_not_stack() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 2).unwrap();

        assert_eq!(cart.apply_promo_code(" savor10 ").unwrap(), 10);
        assert_eq!(cart.apply_promo_code("SAVOR10").unwrap(), 10);
        assert_eq!(cart.discount(), Money::from_minor_units(60));

        assert_eq!(cart.apply_promo_code("SAVOR20").unwrap(), 20);
        assert_eq!(cart.discount(), Money::from_minor_units(120));
    }

    #[test]
    fn test_unknown_promo_keeps_previous() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 2).unwrap();
        cart.apply_promo_code("SAVOR10").unwrap();

        assert!(matches!(
            cart.apply_promo_code("FREELUNCH"),
            Err(CartError::InvalidPromoCode)
        ));
        assert!(matches!(
            cart.apply_promo_code("   "),
            Err(CartError::InvalidPromoCode)
        ));
        assert_eq!(cart.promo_code().unwrap().as_str(), "SAVOR10");
    }

    #[test]
    fn test_discount_tracks_subtotal() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 2).unwrap();
        cart.apply_promo_code("SAVOR20").unwrap();
        assert_eq!(cart.discount(), Money::from_minor_units(120));

        // The discount is recomputed from the current subtotal.
        cart.add_item(fries(state.catalog()), 2).unwrap();
        assert_eq!(cart.subtotal(), Money::from_minor_units(896));
        assert_eq!(cart.discount(), Money::from_minor_units(179));
    }

    #[test]
    fn test_checkout_places_order_and_clears() {
        let state = state();
        let user = account();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 2).unwrap();
        cart.apply_promo_code("SAVOR10").unwrap();
        cart.set_delivery_method(DeliveryMethod::Delivery);

        let order = cart.checkout(Some(&user)).unwrap();
        assert_eq!(order.total, Money::from_minor_units(738));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, user.id);
        assert_eq!(order.items.len(), 1);

        assert!(cart.is_empty());
        assert!(cart.promo_code().is_none());
        assert_eq!(cart.delivery_method(), DeliveryMethod::Pickup);

        let orders = cart.orders_for(&user).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, order.id);
    }

    #[test]
    fn test_checkout_requires_sign_in() {
        let state = state();
        let mut cart = CartService::new(&state).unwrap();
        cart.add_item(burger(state.catalog()), 1).unwrap();

        assert!(matches!(
            cart.checkout(None),
            Err(CartError::NotAuthenticated)
        ));
        // Nothing changed.
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.orders_for(&account()).unwrap().is_empty());
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let state = state();
        let user = account();
        let mut cart = CartService::new(&state).unwrap();

        assert!(matches!(
            cart.checkout(Some(&user)),
            Err(CartError::EmptyCart)
        ));
        assert!(cart.orders_for(&user).unwrap().is_empty());
    }

    #[test]
    fn test_orders_are_scoped_per_user() {
        let state = state();
        let alice = account();
        let bob = account();
        let mut cart = CartService::new(&state).unwrap();

        cart.add_item(burger(state.catalog()), 1).unwrap();
        cart.checkout(Some(&alice)).unwrap();
        cart.add_item(fries(state.catalog()), 1).unwrap();
        cart.checkout(Some(&bob)).unwrap();

        assert_eq!(cart.orders_for(&alice).unwrap().len(), 1);
        assert_eq!(cart.orders_for(&bob).unwrap().len(), 1);
    }
}
