//! The built-in product menu.
//!
//! There is no backend, so the menu ships with the application. IDs are
//! fixed so cart lines persisted by one run still match the catalog in the
//! next.

use quickbite_core::{Money, ProductId};
use uuid::Uuid;

use crate::models::{Category, Product};

/// The product menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Stable catalog IDs; index into the built-in menu.
const fn builtin_id(n: u128) -> ProductId {
    ProductId::from_uuid(Uuid::from_u128(n))
}

impl Catalog {
    /// The menu shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let products = vec![
            Product {
                id: builtin_id(1),
                name: "Classic Burger".to_owned(),
                price: Money::from_minor_units(299),
                category: Category::Burgers,
                description: "Juicy beef patty with fresh vegetables".to_owned(),
                image: "images/classic-burger.jpg".to_owned(),
                available: true,
                ingredients: vec![
                    "Beef patty".to_owned(),
                    "Cheese".to_owned(),
                    "Vegetables".to_owned(),
                    "Sauce".to_owned(),
                ],
            },
            Product {
                id: builtin_id(2),
                name: "French Fries".to_owned(),
                price: Money::from_minor_units(149),
                category: Category::Snacks,
                description: "Crispy salted fries".to_owned(),
                image: "images/french-fries.jpg".to_owned(),
                available: true,
                ingredients: vec!["Potato".to_owned(), "Salt".to_owned(), "Oil".to_owned()],
            },
            Product {
                id: builtin_id(3),
                name: "Cola".to_owned(),
                price: Money::from_minor_units(99),
                category: Category::Drinks,
                description: "Refreshing soft drink".to_owned(),
                image: "images/cola.jpg".to_owned(),
                available: true,
                ingredients: vec![
                    "Carbonated water".to_owned(),
                    "Sugar".to_owned(),
                    "Flavoring".to_owned(),
                ],
            },
            Product {
                id: builtin_id(4),
                name: "Cheeseburger".to_owned(),
                price: Money::from_minor_units(259),
                category: Category::Burgers,
                description: "Burger with double cheese".to_owned(),
                image: "images/cheeseburger.jpg".to_owned(),
                available: true,
                ingredients: vec![
                    "Beef patty".to_owned(),
                    "Cheddar".to_owned(),
                    "Vegetables".to_owned(),
                    "Sauce".to_owned(),
                ],
            },
            Product {
                id: builtin_id(5),
                name: "Chicken Nuggets".to_owned(),
                price: Money::from_minor_units(189),
                category: Category::Snacks,
                description: "Crispy chicken nuggets".to_owned(),
                image: "images/chicken-nuggets.jpg".to_owned(),
                available: true,
                ingredients: vec![
                    "Chicken fillet".to_owned(),
                    "Breading".to_owned(),
                    "Spices".to_owned(),
                ],
            },
        ];

        Self { products }
    }

    /// All products, menu order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products in one menu section.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by its display name (case-insensitive), a
    /// convenience for the CLI front end.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
