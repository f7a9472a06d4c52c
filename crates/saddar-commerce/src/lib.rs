//! Wholesale storefront domain types and logic.
//!
//! This crate provides the synchronous core of the storefront:
//!
//! - **Catalog**: Products, brands, the closed category set, the read-only catalog store
//! - **Search**: The filter pipeline (AI subset, category, free text)
//! - **Cart**: Quantity management keyed by product id
//! - **Checkout**: Confirmation receipts
//!
//! # Example
//!
//! ```rust
//! use saddar_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let criteria = FilterCriteria::new().with_category(Some(Category::Beverages));
//! let visible = visible_products(catalog.products(), &criteria, None);
//! assert_eq!(visible.len(), 1);
//!
//! let mut cart = Cart::new();
//! cart.add(&visible[0]);
//! cart.add(&visible[0]);
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Brand, Catalog, Category, Product, StockLevel};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartPricing};

    // Checkout
    pub use crate::checkout::{checkout, OrderReceipt, OrderStatus, CHECKOUT_CONFIRMATION};

    // Search
    pub use crate::search::{results_caption, visible_products, FilterCriteria, SectionTitle};
}
