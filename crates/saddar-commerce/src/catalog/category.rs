//! The closed set of product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category.
///
/// The set is fixed. "No filter" is expressed as `Option::<Category>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Snacks")]
    Snacks,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Household")]
    Household,
    #[serde(rename = "Dairy & Eggs")]
    Dairy,
    #[serde(rename = "Pulses & Grains")]
    Pulses,
    #[serde(rename = "Frozen Foods")]
    Frozen,
    #[serde(rename = "Pharmacy")]
    Pharmacy,
    #[serde(rename = "Men's Fashion")]
    MensFashion,
    #[serde(rename = "Women's Fashion")]
    WomensFashion,
    #[serde(rename = "Kids' Clothing")]
    KidsClothing,
    #[serde(rename = "Footwear")]
    Footwear,
    #[serde(rename = "Accessories")]
    Accessories,
}

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Category; 13] = [
        Category::Beverages,
        Category::Snacks,
        Category::PersonalCare,
        Category::Household,
        Category::Dairy,
        Category::Pulses,
        Category::Frozen,
        Category::Pharmacy,
        Category::MensFashion,
        Category::WomensFashion,
        Category::KidsClothing,
        Category::Footwear,
        Category::Accessories,
    ];

    /// Display label, also used in AI prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::PersonalCare => "Personal Care",
            Category::Household => "Household",
            Category::Dairy => "Dairy & Eggs",
            Category::Pulses => "Pulses & Grains",
            Category::Frozen => "Frozen Foods",
            Category::Pharmacy => "Pharmacy",
            Category::MensFashion => "Men's Fashion",
            Category::WomensFashion => "Women's Fashion",
            Category::KidsClothing => "Kids' Clothing",
            Category::Footwear => "Footwear",
            Category::Accessories => "Accessories",
        }
    }

    /// Short machine-friendly slug (e.g. "mens-fashion").
    pub fn slug(&self) -> String {
        self.label()
            .to_lowercase()
            .replace(" & ", "-")
            .replace('\'', "")
            .replace(' ', "-")
    }

    /// Parse a display label or slug, ignoring case.
    ///
    /// Accepts "Dairy & Eggs", "dairy-eggs", "dairy_eggs" and the
    /// enum-style short name "dairy".
    pub fn from_label(s: &str) -> Option<Self> {
        let needle = normalize(s);
        Category::ALL.into_iter().find(|c| {
            normalize(c.label()) == needle || normalize(&format!("{c:?}")) == needle
        })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}
