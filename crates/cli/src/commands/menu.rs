//! Menu display.

use quickbite_storefront::models::{Category, Product};
use quickbite_storefront::AppState;

/// Print the product menu, optionally limited to one category.
pub fn show(state: &AppState, category: Option<Category>) -> quickbite_storefront::Result<()> {
    let catalog = state.catalog();

    let products: Vec<&Product> = match category {
        Some(category) => catalog.by_category(category),
        None => catalog.list().iter().collect(),
    };

    for product in products {
        let marker = if product.available { " " } else { "*" };
        println!(
            "{marker} {:<18} {:>8}  [{}]  {}",
            product.name, product.price, product.category, product.description
        );
    }
    println!("(* = currently unavailable)");
    Ok(())
}
