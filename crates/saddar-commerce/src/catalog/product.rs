//! Product and brand types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock threshold above which a product is considered well stocked.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// A wholesale product in the catalog.
///
/// Products are immutable after the catalog is loaded. Adding to the
/// cart never decrements `stock`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name, also the key the AI search answers with.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Brand name.
    pub brand: String,
    /// Price per unit.
    pub price: Money,
    /// Unit label (e.g. "Carton", "Bundle").
    pub unit: String,
    /// Units in stock.
    pub stock: u32,
    /// Image reference.
    pub image: String,
    /// Short description.
    pub description: String,
    /// Shown with a "Popular" badge.
    #[serde(default)]
    pub is_popular: bool,
    /// Shown with a "New" badge.
    #[serde(default)]
    pub is_new: bool,
    /// Bulk discount text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_discount: Option<String>,
}

impl Product {
    /// Create a product with the required fields; flags default to off.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        brand: impl Into<String>,
        price: Money,
        unit: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            brand: brand.into(),
            price,
            unit: unit.into(),
            stock,
            image: String::new(),
            description: String::new(),
            is_popular: false,
            is_new: false,
            bulk_discount: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn with_bulk_discount(mut self, text: impl Into<String>) -> Self {
        self.bulk_discount = Some(text.into());
        self
    }

    /// Stock badge level.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }

    /// Whether the product can be ordered at all.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Case-insensitive substring match against name or brand.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.brand.to_lowercase().contains(needle_lower)
    }
}

/// Stock badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    OutOfStock,
    Low(u32),
    Healthy(u32),
}

impl StockLevel {
    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => StockLevel::OutOfStock,
            n if n > LOW_STOCK_THRESHOLD => StockLevel::Healthy(n),
            n => StockLevel::Low(n),
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::OutOfStock => f.write_str("Out of Stock"),
            StockLevel::Low(n) | StockLevel::Healthy(n) => write!(f, "{n} left"),
        }
    }
}

/// A partner brand shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
}

impl Brand {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }
}
