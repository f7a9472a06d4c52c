//! Cart pricing summary.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown shown in the cart drawer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery is free for wholesale orders.
    pub delivery_fee: Money,
    /// Subtotal plus delivery.
    pub grand_total: Money,
    /// Total units.
    pub item_count: u64,
}

impl CartPricing {
    /// Whether delivery costs nothing.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}
