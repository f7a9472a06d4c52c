//! Checkout module.
//!
//! Checkout only confirms and clears the cart; there is no payment or
//! order submission.

mod order;

pub use order::{checkout, OrderReceipt, OrderStatus, CHECKOUT_CONFIRMATION};
