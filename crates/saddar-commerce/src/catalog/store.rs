//! Read-only catalog store.

use std::collections::HashSet;

use crate::catalog::{seed, Brand, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Deserialize;

/// The full, immutable set of products and brands for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    brands: Vec<Brand>,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    brands: Vec<Brand>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and price positivity.
    pub fn new(products: Vec<Product>, brands: Vec<Brand>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProductId(product.id.to_string()));
            }
            if !product.price.is_positive() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.to_string(),
                    amount: product.price.amount,
                });
            }
        }
        Ok(Self { products, brands })
    }

    /// The built-in mock data set.
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
            brands: seed::brands(),
        }
    }

    /// Load `{ "products": [...], "brands": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products, file.brands)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Products in a category, catalog order preserved.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Compact "name (category), ..." listing sent as AI context.
    pub fn summary(&self) -> String {
        self.products
            .iter()
            .map(|p| format!("{} ({})", p.name, p.category))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve a list of product names to catalog entries.
    ///
    /// Catalog order is kept. Names without a product are dropped and
    /// repeated names do not repeat products.
    pub fn select_by_names<S: AsRef<str>>(&self, names: &[S]) -> Vec<Product> {
        let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        self.products
            .iter()
            .filter(|p| wanted.contains(p.name.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
