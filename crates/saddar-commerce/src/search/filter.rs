//! The filter pipeline: catalog (or AI subset) to visible products.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// User-chosen filter inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected category; `None` means all products.
    pub category: Option<Category>,
    /// Raw free-text query as typed.
    pub query: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// The query if it has any non-whitespace content.
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// No category and no query.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.text().is_none()
    }

    /// The home view: nothing selected and no AI subset in play.
    pub fn is_home(&self, has_ai_subset: bool) -> bool {
        self.is_empty() && !has_ai_subset
    }
}

/// Produce the ordered list of products to display.
///
/// 1. An AI subset, when present, replaces the catalog as the starting set.
/// 2. A selected category keeps only products in that category.
/// 3. A free-text query keeps only products whose name or brand contains
///    it (case-insensitive), but only when there is no AI subset.
///
/// Relative order of the starting set is preserved.
pub fn visible_products(
    catalog: &[Product],
    criteria: &FilterCriteria,
    ai_subset: Option<&[Product]>,
) -> Vec<Product> {
    let base = ai_subset.unwrap_or(catalog);
    let needle = match ai_subset {
        Some(_) => None,
        None => criteria.text().map(str::to_lowercase),
    };

    base.iter()
        .filter(|p| criteria.category.map_or(true, |c| p.category == c))
        .filter(|p| needle.as_deref().map_or(true, |n| p.matches_text(n)))
        .cloned()
        .collect()
}
