//! The full ordering flow against the file store: browse, fill the cart,
//! apply a promo, check out, and read the order log back after a restart.

use quickbite_core::{DeliveryMethod, Money, OrderStatus};
use quickbite_integration_tests::TestContext;
use quickbite_storefront::services::{AuthService, CartError, CartService, Registration};

fn sign_up(ctx: &TestContext, username: &str, email: &str) {
    let auth = AuthService::new(ctx.state());
    auth.register(&Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
    })
    .expect("registration failed");
    auth.login(username, "hunter22", false).expect("login failed");
}

#[test]
fn test_full_ordering_flow() {
    let ctx = TestContext::new();
    sign_up(&ctx, "alice", "alice@example.com");

    let state = ctx.state();
    let burger = state
        .catalog()
        .find_by_name("Classic Burger")
        .expect("menu item missing");

    let mut cart = CartService::new(state).expect("store read failed");
    cart.add_item(burger, 2).expect("add failed");
    cart.apply_promo_code("savor10").expect("promo rejected");
    cart.set_delivery_method(DeliveryMethod::Delivery);

    assert_eq!(cart.subtotal(), Money::from_minor_units(598));
    assert_eq!(cart.total(), Money::from_minor_units(738));

    let actor = AuthService::new(state)
        .require_user()
        .expect("not signed in");
    let order = cart.checkout(Some(&actor)).expect("checkout failed");
    assert_eq!(order.total, Money::from_minor_units(738));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(cart.is_empty());

    // Restart: the cart stays empty and the order log survives.
    let reopened = ctx.reopen();
    let cart = CartService::new(&reopened).expect("store read failed");
    assert!(cart.is_empty());

    let orders = cart.orders_for(&actor).expect("store read failed");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].items.len(), 1);
    assert_eq!(orders[0].items[0].quantity, 2);
}

#[test]
fn test_cart_survives_restart_without_promo() {
    let ctx = TestContext::new();
    let state = ctx.state();
    let fries = state
        .catalog()
        .find_by_name("French Fries")
        .expect("menu item missing");

    let mut cart = CartService::new(state).expect("store read failed");
    cart.add_item(fries, 3).expect("add failed");
    cart.apply_promo_code("SAVOR20").expect("promo rejected");

    let reopened = ctx.reopen();
    let cart = CartService::new(&reopened).expect("store read failed");
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 3);
    // The promo was transient; only the lines persist.
    assert!(cart.promo_code().is_none());
    assert_eq!(cart.discount(), Money::ZERO);
}

#[test]
fn test_checkout_requires_session() {
    let ctx = TestContext::new();
    let state = ctx.state();
    let cola = state
        .catalog()
        .find_by_name("Cola")
        .expect("menu item missing");

    let mut cart = CartService::new(state).expect("store read failed");
    cart.add_item(cola, 1).expect("add failed");

    let current = AuthService::new(state).current_user().expect("store read failed");
    assert!(current.is_none());
    assert!(matches!(
        cart.checkout(current.as_ref()),
        Err(CartError::NotAuthenticated)
    ));
    assert_eq!(cart.lines().len(), 1);
}

#[test]
fn test_orders_are_per_account() {
    let ctx = TestContext::new();
    let state = ctx.state();
    let burger = state
        .catalog()
        .find_by_name("Cheeseburger")
        .expect("menu item missing");

    sign_up(&ctx, "alice", "alice@example.com");
    let alice = AuthService::new(state).require_user().expect("not signed in");
    let mut cart = CartService::new(state).expect("store read failed");
    cart.add_item(burger, 1).expect("add failed");
    cart.checkout(Some(&alice)).expect("checkout failed");

    sign_up(&ctx, "bob", "bob@example.com");
    let bob = AuthService::new(state).require_user().expect("not signed in");
    cart.add_item(burger, 2).expect("add failed");
    cart.checkout(Some(&bob)).expect("checkout failed");

    assert_eq!(cart.orders_for(&alice).expect("store read failed").len(), 1);
    assert_eq!(cart.orders_for(&bob).expect("store read failed").len(), 1);
}
