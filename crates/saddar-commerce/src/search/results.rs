//! Presentation state derived from the filter pipeline.

use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading shown above the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionTitle {
    /// A smart search request is outstanding.
    Thinking,
    Category(Category),
    AiCurated,
    InventoryPicks,
}

impl SectionTitle {
    /// Pick the heading. Searching wins, then category, then AI results.
    pub fn resolve(is_searching: bool, category: Option<Category>, has_ai_results: bool) -> Self {
        if is_searching {
            SectionTitle::Thinking
        } else if let Some(category) = category {
            SectionTitle::Category(category)
        } else if has_ai_results {
            SectionTitle::AiCurated
        } else {
            SectionTitle::InventoryPicks
        }
    }
}

impl fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionTitle::Thinking => f.write_str("Thinking..."),
            SectionTitle::Category(c) => f.write_str(c.label()),
            SectionTitle::AiCurated => f.write_str("AI Curated Selection"),
            SectionTitle::InventoryPicks => f.write_str("Inventory Picks"),
        }
    }
}

/// Line under the heading, e.g. "3 Wholesale Units Ready".
pub fn results_caption(count: usize) -> String {
    format!("{count} Wholesale Units Ready")
}
