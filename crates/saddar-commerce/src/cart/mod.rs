//! Shopping cart module.
//!
//! Contains the cart store and its pricing summary.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartEntry};
pub use pricing::CartPricing;
