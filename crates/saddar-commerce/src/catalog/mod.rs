//! Product catalog module.
//!
//! Contains product, brand and category types plus the read-only catalog store.

mod category;
mod product;
mod seed;
mod store;

pub use category::Category;
pub use product::{Brand, Product, StockLevel, LOW_STOCK_THRESHOLD};
pub use store::Catalog;
