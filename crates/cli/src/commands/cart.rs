//! Cart, checkout, and order-history commands.

use quickbite_core::DeliveryMethod;
use quickbite_storefront::models::Product;
use quickbite_storefront::services::{AuthService, CartError, CartService};
use quickbite_storefront::AppState;

/// Add `qty` units of a product, looked up by name.
pub fn add(state: &AppState, product: &str, qty: u32) -> quickbite_storefront::Result<()> {
    let product = find_product(state, product)?;
    let mut cart = CartService::new(state)?;
    cart.add_item(product, qty)?;
    println!("added {qty} x {}", product.name);
    print_totals(&cart);
    Ok(())
}

/// Remove a product's line, looked up by name.
pub fn remove(state: &AppState, product: &str) -> quickbite_storefront::Result<()> {
    let product = find_product(state, product)?;
    let mut cart = CartService::new(state)?;
    cart.remove_item(product.id)?;
    println!("removed {}", product.name);
    Ok(())
}

/// Set a line's quantity; zero or less removes the line.
pub fn set_qty(state: &AppState, product: &str, qty: i64) -> quickbite_storefront::Result<()> {
    let product = find_product(state, product)?;
    let mut cart = CartService::new(state)?;
    cart.set_quantity(product.id, qty)?;
    print_totals(&cart);
    Ok(())
}

/// Print the cart contents and subtotal.
pub fn show(state: &AppState) -> quickbite_storefront::Result<()> {
    let cart = CartService::new(state)?;
    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }
    for line in cart.lines() {
        println!(
            "  {:<18} {} x {} = {}",
            line.name,
            line.quantity,
            line.unit_price,
            line.line_total()
        );
    }
    print_totals(&cart);
    Ok(())
}

/// Empty the cart.
pub fn clear(state: &AppState) -> quickbite_storefront::Result<()> {
    let mut cart = CartService::new(state)?;
    cart.clear()?;
    println!("cart cleared");
    Ok(())
}

/// Place an order for the cart contents.
///
/// The promo code and delivery choice are given per invocation because they
/// do not persist between runs.
pub fn checkout(
    state: &AppState,
    promo: Option<&str>,
    delivery: bool,
) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    let actor = auth.current_user()?;

    let mut cart = CartService::new(state)?;
    if let Some(code) = promo {
        let percent = cart.apply_promo_code(code)?;
        println!("promo applied: {percent}% off");
    }
    if delivery {
        cart.set_delivery_method(DeliveryMethod::Delivery);
    }

    let order = cart.checkout(actor.as_ref())?;
    println!("order {} placed", order.id);
    println!("  subtotal  {}", order.subtotal);
    println!("  discount  -{}", order.discount);
    println!("  delivery  {}", order.delivery_cost);
    println!("  total     {}", order.total);
    Ok(())
}

/// List the signed-in account's orders, oldest first.
pub fn orders(state: &AppState) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    let actor = auth.require_user()?;
    let cart = CartService::new(state)?;

    let orders = cart.orders_for(&actor)?;
    if orders.is_empty() {
        println!("no orders yet");
        return Ok(());
    }
    for order in orders {
        println!(
            "{}  {}  {:?}  total {}",
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.id,
            order.status,
            order.total
        );
        for line in &order.items {
            println!("    {} x {}", line.quantity, line.name);
        }
    }
    Ok(())
}

fn find_product<'a>(state: &'a AppState, name: &str) -> Result<&'a Product, CartError> {
    state
        .catalog()
        .find_by_name(name)
        .ok_or_else(|| CartError::UnknownProduct(name.to_owned()))
}

fn print_totals(cart: &CartService<'_>) {
    println!("subtotal: {}", cart.subtotal());
}
