//! Storefront application layer.
//!
//! [`StorefrontState`] holds the filter, search, cart, cart-view and insight
//! containers with synchronous transitions. [`Storefront`] wraps it with the
//! AI clients: debounced smart search and the insight banner.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use saddar_ai::DisabledCompletion;
//! use saddar_commerce::prelude::*;
//! use saddar_storefront::Storefront;
//!
//! let store = Storefront::new(Arc::new(Catalog::seed()), Arc::new(DisabledCompletion));
//! store.select_category(Some(Category::Dairy));
//! store.add_to_cart(&ProductId::new("1")).unwrap();
//!
//! assert_eq!(store.section_title().to_string(), "Dairy & Eggs");
//! assert_eq!(store.cart_badge(), 1);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod state;

pub use config::{AiConfig, CatalogConfig, StorefrontConfig};
pub use error::StorefrontError;
pub use logging::init_tracing;
pub use session::Storefront;
pub use state::{CartView, InsightState, SearchDecision, StorefrontState, StorefrontView};
