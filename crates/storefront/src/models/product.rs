//! Product records for the built-in menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quickbite_core::{Money, ProductId};

/// Menu section a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Burgers,
    Snacks,
    Drinks,
    Desserts,
}

/// Error parsing a [`Category`] from its lowercase name.
#[derive(Debug, Error)]
#[error("unknown category {0:?} (expected burgers, snacks, drinks, or desserts)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "burgers" => Ok(Self::Burgers),
            "snacks" => Ok(Self::Snacks),
            "drinks" => Ok(Self::Drinks),
            "desserts" => Ok(Self::Desserts),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Burgers => "burgers",
            Self::Snacks => "snacks",
            Self::Drinks => "drinks",
            Self::Desserts => "desserts",
        };
        f.write_str(name)
    }
}

/// A menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in minor currency units.
    pub price: Money,
    /// Menu section.
    pub category: Category,
    /// One-line description.
    pub description: String,
    /// Image URI for the product card.
    pub image: String,
    /// Whether the product can currently be ordered.
    pub available: bool,
    /// Listed ingredients.
    #[serde(default)]
    pub ingredients: Vec<String>,
}
