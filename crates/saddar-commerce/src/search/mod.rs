//! Search module.
//!
//! Contains the filter pipeline and the headings derived from it.

mod filter;
mod results;

pub use filter::{visible_products, FilterCriteria};
pub use results::{results_caption, SectionTitle};
