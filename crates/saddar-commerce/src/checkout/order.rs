//! Order receipts produced at checkout.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message shown once a wholesale order is confirmed.
pub const CHECKOUT_CONFIRMATION: &str =
    "Wholesale order submitted! Our representative will call your shop for delivery timing.";

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting a call from a representative.
    #[default]
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
        }
    }
}

/// Summary of a confirmed cart.
///
/// Display only: receipts are never persisted or sent anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub total: Money,
    pub status: OrderStatus,
    /// Total units ordered.
    pub items: u64,
}

impl OrderReceipt {
    /// Summarize a cart as a pending order.
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        let pricing = cart.calculate_pricing()?;
        Ok(Self {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            total: pricing.grand_total,
            status: OrderStatus::Pending,
            items: pricing.item_count,
        })
    }
}

/// Confirm the cart: summarize it and clear it.
///
/// An empty cart yields `None` and is left untouched. The cart is cleared
/// even if the total cannot be computed.
pub fn checkout(cart: &mut Cart) -> Result<Option<OrderReceipt>, CommerceError> {
    if cart.is_empty() {
        return Ok(None);
    }
    let receipt = OrderReceipt::from_cart(cart);
    cart.clear();
    receipt.map(Some)
}
