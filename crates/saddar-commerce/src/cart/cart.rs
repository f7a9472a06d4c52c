//! Cart and cart entry types.

use crate::cart::CartPricing;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Entries are keyed by product id, at most one per id, in the order they
/// were first added. A stored entry always has a quantity of at least 1.
/// Every mutation is total: unknown ids and over-decrements are no-ops or
/// clamp, never errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry for the product's id, or inserts a new
    /// entry with quantity 1. Returns the resulting quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Change an entry's quantity by `delta`.
    ///
    /// The result is clamped at 0; an entry that reaches 0 is removed.
    /// Returns the new quantity, or `None` if the id is not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<u32> {
        let index = self.entries.iter().position(|e| &e.product.id == id)?;

        let current = i64::from(self.entries[index].quantity);
        let next = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));
        // Lossless: clamped into u32 range above.
        let next = next as u32;

        if next == 0 {
            self.entries.remove(index);
        } else {
            self.entries[index].quantity = next;
        }
        Some(next)
    }

    /// Remove an entry regardless of its quantity.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.product.id != id);
        self.entries.len() < len_before
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get an entry by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product.id == id)
    }

    /// Quantity for a product, 0 when absent.
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.get(id).map_or(0, |e| e.quantity)
    }

    /// Total units across entries (the cart badge).
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let lines = self
            .entries
            .iter()
            .map(CartEntry::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Amount payable. Delivery is free, so this equals the subtotal.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(self.calculate_pricing()?.grand_total)
    }

    /// Calculate the cart drawer's pricing summary.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let subtotal = self.subtotal()?;
        let delivery_fee = Money::zero(self.currency);
        let grand_total = subtotal
            .try_add(&delivery_fee)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            delivery_fee,
            grand_total,
            item_count: self.item_count(),
        })
    }
}

/// A product in the cart with the quantity to order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn milk() -> Product {
        Product::new(
            "1",
            "Fresh Milk 1L Pack of 12",
            Category::Dairy,
            "MilkPure",
            Money::pkr(2400),
            "Carton",
            45,
        )
    }

    fn cola() -> Product {
        Product::new(
            "2",
            "Cola Classic 500ml Pack of 24",
            Category::Beverages,
            "FizzCo",
            Money::pkr(1800),
            "Case",
            120,
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&milk()), 1);
        assert_eq!(cart.add(&milk()), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("1")), 2);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&cola());
        cart.add(&milk());
        cart.add(&cola());

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut cart = Cart::new();
        cart.add(&milk());
        assert_eq!(cart.update_quantity(&ProductId::new("1"), 0), Some(1));
        assert_eq!(cart.quantity_of(&ProductId::new("1")), 1);
    }

    #[test]
    fn test_decrement_to_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.add(&milk());

        assert_eq!(cart.update_quantity(&ProductId::new("1"), -2), Some(0));
        assert!(cart.get(&ProductId::new("1")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_over_decrement_clamps_and_removes() {
        let mut cart = Cart::new();
        cart.add(&milk());
        assert_eq!(cart.update_quantity(&ProductId::new("1"), -10), Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let mut cart = Cart::new();
        cart.add(&milk());
        assert_eq!(cart.update_quantity(&ProductId::new("1"), i64::MAX), Some(u32::MAX));
        assert_eq!(cart.update_quantity(&ProductId::new("1"), i64::MIN), Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&milk());
        assert_eq!(cart.update_quantity(&ProductId::new("missing"), 1), None);
        assert!(!cart.remove(&ProductId::new("missing")));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.add(&milk());
        cart.add(&cola());

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.subtotal, Money::pkr(6600));
        assert!(pricing.delivery_fee.is_zero());
        assert_eq!(pricing.grand_total, Money::pkr(6600));
        assert_eq!(pricing.item_count, 3);
        assert_eq!(cart.total().unwrap(), pricing.subtotal);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&milk());
        cart.add(&cola());
        cart.clear();
        assert!(cart.is_empty());
    }
}
