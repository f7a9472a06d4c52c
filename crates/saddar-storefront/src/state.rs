//! Explicit storefront state.
//!
//! Each concern lives in its own container and every transition here is
//! synchronous. Network work happens in [`crate::Storefront`], which feeds
//! results back through [`StorefrontState::apply_search_result`].

use std::sync::Arc;

use saddar_ai::{SearchSequencer, SearchTicket, INSIGHT_PLACEHOLDER, MIN_SMART_QUERY_LEN};
use saddar_commerce::prelude::*;
use serde::Serialize;

use crate::error::StorefrontError;

/// Selected category and the raw query text.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub criteria: FilterCriteria,
}

/// Smart-search results and progress.
#[derive(Debug, Default)]
pub struct SearchState {
    /// `None` when no AI subset is in effect.
    pub ai_results: Option<Vec<Product>>,
    pub is_searching: bool,
    sequencer: SearchSequencer,
}

impl SearchState {
    fn clear(&mut self) {
        self.sequencer.invalidate();
        self.ai_results = None;
        self.is_searching = false;
    }
}

/// Whether the cart drawer is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartView {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub cart: Cart,
    pub view: CartView,
}

/// The insight banner text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InsightState {
    #[default]
    Pending,
    Ready(String),
}

impl InsightState {
    /// Text to display; the placeholder until an answer arrives.
    pub fn text(&self) -> &str {
        match self {
            InsightState::Pending => INSIGHT_PLACEHOLDER,
            InsightState::Ready(text) => text,
        }
    }
}

/// What a query change requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDecision {
    /// Query too short: the AI subset was cleared and the substring filter applies.
    Skip,
    /// Run a smart search for `query` under `ticket`.
    Smart { ticket: SearchTicket, query: String },
}

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, Serialize)]
pub struct StorefrontView {
    pub title: String,
    pub caption: String,
    pub products: Vec<Product>,
    pub is_home: bool,
    pub is_searching: bool,
    pub category: Option<Category>,
    pub query: String,
    pub cart_badge: u64,
    pub cart_view: CartView,
    pub insight: String,
}

/// The storefront's state containers.
#[derive(Debug)]
pub struct StorefrontState {
    catalog: Arc<Catalog>,
    filter: FilterState,
    search: SearchState,
    cart: CartState,
    insight: InsightState,
    min_query_len: usize,
}

impl StorefrontState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            search: SearchState::default(),
            cart: CartState::default(),
            insight: InsightState::default(),
            min_query_len: MIN_SMART_QUERY_LEN,
        }
    }

    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.set_min_query_len(min_query_len);
        self
    }

    pub fn set_min_query_len(&mut self, min_query_len: usize) {
        self.min_query_len = min_query_len;
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.filter.criteria
    }

    pub fn ai_results(&self) -> Option<&[Product]> {
        self.search.ai_results.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_searching
    }

    pub fn cart(&self) -> &Cart {
        &self.cart.cart
    }

    pub fn cart_view(&self) -> CartView {
        self.cart.view
    }

    pub fn insight(&self) -> &InsightState {
        &self.insight
    }

    /// Select a category; `None` shows all.
    pub fn select_category(&mut self, category: Option<Category>) {
        tracing::debug!(category = ?category, "category selected");
        self.filter.criteria.category = category;
    }

    /// Record the query text and decide whether it needs a smart search.
    ///
    /// Short queries clear the AI subset at once and supersede any
    /// outstanding request.
    pub fn set_query(&mut self, query: impl Into<String>) -> SearchDecision {
        self.filter.criteria.query = query.into();
        let trimmed = self.filter.criteria.query.trim();
        if trimmed.chars().count() > self.min_query_len {
            let query = trimmed.to_string();
            SearchDecision::Smart {
                ticket: self.search.sequencer.issue(),
                query,
            }
        } else {
            self.search.clear();
            SearchDecision::Skip
        }
    }

    /// Mark a request as in flight. Returns false if it is already stale.
    pub fn begin_search(&mut self, ticket: SearchTicket) -> bool {
        if !self.search.sequencer.is_current(ticket) {
            return false;
        }
        self.search.is_searching = true;
        true
    }

    /// Apply a smart-search result if `ticket` is still the newest request.
    ///
    /// Returns whether the result was applied.
    pub fn apply_search_result(&mut self, ticket: SearchTicket, result: Vec<Product>) -> bool {
        if !self.search.sequencer.is_current(ticket) {
            tracing::debug!(%ticket, "discarding stale search result");
            return false;
        }
        tracing::debug!(%ticket, products = result.len(), "search result applied");
        self.search.ai_results = Some(result);
        self.search.is_searching = false;
        true
    }

    /// Clear category, query and AI subset.
    pub fn go_home(&mut self) {
        self.filter.criteria = FilterCriteria::default();
        self.search.clear();
    }

    /// Add one unit of a catalog product.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<u32, StorefrontError> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;
        if !product.is_in_stock() {
            return Err(StorefrontError::OutOfStock(product.name.clone()));
        }
        let quantity = self.cart.cart.add(product);
        tracing::debug!(product = %id, quantity, "added to cart");
        Ok(quantity)
    }

    /// Change a cart entry's quantity. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<u32> {
        self.cart.cart.update_quantity(id, delta)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        self.cart.cart.remove(id)
    }

    pub fn open_cart(&mut self) {
        self.cart.view = CartView::Open;
    }

    pub fn close_cart(&mut self) {
        self.cart.view = CartView::Closed;
    }

    /// Confirm the cart and close the drawer. An empty cart yields no receipt.
    pub fn checkout(&mut self) -> Result<Option<OrderReceipt>, StorefrontError> {
        self.cart.view = CartView::Closed;
        let receipt = checkout(&mut self.cart.cart)?;
        if let Some(r) = &receipt {
            tracing::info!(order = %r.id, items = r.items, total = %r.total, "order submitted");
        }
        Ok(receipt)
    }

    pub fn set_insight(&mut self, text: String) {
        self.insight = InsightState::Ready(text);
    }

    /// Products to display for the current state.
    pub fn visible_products(&self) -> Vec<Product> {
        visible_products(
            self.catalog.products(),
            &self.filter.criteria,
            self.search.ai_results.as_deref(),
        )
    }

    pub fn section_title(&self) -> SectionTitle {
        SectionTitle::resolve(
            self.search.is_searching,
            self.filter.criteria.category,
            self.search.ai_results.is_some(),
        )
    }

    /// Total units in the cart.
    pub fn cart_badge(&self) -> u64 {
        self.cart.cart.item_count()
    }

    pub fn is_home(&self) -> bool {
        self.filter.criteria.is_home(self.search.ai_results.is_some())
    }

    pub fn view(&self) -> StorefrontView {
        let products = self.visible_products();
        StorefrontView {
            title: self.section_title().to_string(),
            caption: results_caption(products.len()),
            products,
            is_home: self.is_home(),
            is_searching: self.search.is_searching,
            category: self.filter.criteria.category,
            query: self.filter.criteria.query.clone(),
            cart_badge: self.cart_badge(),
            cart_view: self.cart.view,
            insight: self.insight.text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> StorefrontState {
        StorefrontState::new(Arc::new(Catalog::seed()))
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn smart_ticket(decision: SearchDecision) -> SearchTicket {
        match decision {
            SearchDecision::Smart { ticket, .. } => ticket,
            SearchDecision::Skip => panic!("expected a smart search"),
        }
    }

    #[test]
    fn test_initial_state_is_home() {
        let s = state();
        assert!(s.is_home());
        assert_eq!(s.section_title(), SectionTitle::InventoryPicks);
        assert_eq!(s.visible_products().len(), 10);
        assert_eq!(s.cart_badge(), 0);
        assert_eq!(s.cart_view(), CartView::Closed);
        assert_eq!(s.insight().text(), INSIGHT_PLACEHOLDER);
    }

    #[test]
    fn test_short_query_uses_substring_filter() {
        let mut s = state();
        assert_eq!(s.set_query("rice"), SearchDecision::Skip);
        let names: Vec<String> = s.visible_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Basmati Rice 5kg Premium"]);
        assert!(!s.is_home());
    }

    #[test]
    fn test_long_query_requests_smart_search() {
        let mut s = state();
        match s.set_query("  cold drinks  ") {
            SearchDecision::Smart { query, .. } => assert_eq!(query, "cold drinks"),
            SearchDecision::Skip => panic!("expected smart search"),
        }
    }

    #[test]
    fn test_search_lifecycle() {
        let mut s = state();
        let ticket = smart_ticket(s.set_query("fizzy drinks"));

        assert!(s.begin_search(ticket));
        assert_eq!(s.section_title(), SectionTitle::Thinking);

        let cola = s.catalog().get(&id("2")).cloned().unwrap();
        assert!(s.apply_search_result(ticket, vec![cola]));
        assert!(!s.is_searching());
        assert_eq!(s.section_title(), SectionTitle::AiCurated);
        assert_eq!(s.visible_products().len(), 1);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut s = state();
        let first = smart_ticket(s.set_query("fizzy drinks"));
        s.begin_search(first);
        let second = smart_ticket(s.set_query("men's clothing"));

        assert!(!s.apply_search_result(first, vec![]));
        assert!(s.ai_results().is_none());

        assert!(s.begin_search(second));
        let kurta = s.catalog().get(&id("f1")).cloned().unwrap();
        assert!(s.apply_search_result(second, vec![kurta]));
        assert_eq!(s.ai_results().map(<[Product]>::len), Some(1));
    }

    #[test]
    fn test_shortening_query_clears_subset_and_in_flight_request() {
        let mut s = state();
        let ticket = smart_ticket(s.set_query("fizzy drinks"));
        s.begin_search(ticket);

        assert_eq!(s.set_query("fiz"), SearchDecision::Skip);
        assert!(!s.is_searching());
        assert!(!s.apply_search_result(ticket, vec![]));
        assert!(s.ai_results().is_none());
    }

    #[test]
    fn test_empty_ai_result_shows_nothing() {
        let mut s = state();
        let ticket = smart_ticket(s.set_query("unparseable answer"));
        s.apply_search_result(ticket, Vec::new());
        assert!(s.visible_products().is_empty());
        assert_eq!(s.view().caption, "0 Wholesale Units Ready");
    }

    #[test]
    fn test_category_title_wins_over_ai() {
        let mut s = state();
        let ticket = smart_ticket(s.set_query("fizzy drinks"));
        let cola = s.catalog().get(&id("2")).cloned().unwrap();
        s.apply_search_result(ticket, vec![cola]);
        s.select_category(Some(Category::Snacks));

        assert_eq!(s.section_title(), SectionTitle::Category(Category::Snacks));
        assert!(s.visible_products().is_empty());
    }

    #[test]
    fn test_go_home_resets_filters() {
        let mut s = state();
        s.select_category(Some(Category::Dairy));
        let ticket = smart_ticket(s.set_query("fresh dairy"));
        s.apply_search_result(ticket, vec![]);

        s.go_home();
        assert!(s.is_home());
        assert!(s.criteria().query.is_empty());
        assert_eq!(s.visible_products().len(), 10);
    }

    #[test]
    fn test_add_to_cart_rules() {
        let mut s = state();
        assert_eq!(s.add_to_cart(&id("1")).unwrap(), 1);
        assert_eq!(s.add_to_cart(&id("1")).unwrap(), 2);
        assert_eq!(s.cart_badge(), 2);
        assert_eq!(s.cart_view(), CartView::Closed);

        assert!(matches!(
            s.add_to_cart(&id("missing")),
            Err(StorefrontError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_out_of_stock_product_cannot_be_added() {
        let mut product = Product::new(
            "z",
            "Empty Shelf",
            Category::Snacks,
            "None",
            Money::pkr(10),
            "Box",
            0,
        );
        product = product.with_description("sold out");
        let catalog = Catalog::new(vec![product], vec![]).unwrap();
        let mut s = StorefrontState::new(Arc::new(catalog));

        assert!(matches!(s.add_to_cart(&id("z")), Err(StorefrontError::OutOfStock(_))));
        assert!(s.cart().is_empty());
    }

    #[test]
    fn test_checkout_clears_and_closes() {
        let mut s = state();
        s.add_to_cart(&id("1")).unwrap();
        s.add_to_cart(&id("2")).unwrap();
        s.open_cart();

        let receipt = s.checkout().unwrap().unwrap();
        assert_eq!(receipt.total, Money::pkr(4200));
        assert_eq!(receipt.items, 2);
        assert!(s.cart().is_empty());
        assert_eq!(s.cart_view(), CartView::Closed);
    }

    #[test]
    fn test_checkout_empty_cart_closes_without_receipt() {
        let mut s = state();
        s.open_cart();
        assert!(s.checkout().unwrap().is_none());
        assert!(s.cart().is_empty());
        assert_eq!(s.cart_view(), CartView::Closed);
    }

    #[test]
    fn test_update_quantity_and_badge() {
        let mut s = state();
        s.add_to_cart(&id("1")).unwrap();
        assert_eq!(s.update_quantity(&id("1"), 4), Some(5));
        assert_eq!(s.cart_badge(), 5);
        assert_eq!(s.update_quantity(&id("1"), -5), Some(0));
        assert_eq!(s.cart_badge(), 0);
        assert_eq!(s.update_quantity(&id("1"), 1), None);
    }

    #[test]
    fn test_view_serializes() {
        let mut s = state();
        s.set_insight("Restock rice.".to_string());
        let json = serde_json::to_value(s.view()).unwrap();
        assert_eq!(json["title"], "Inventory Picks");
        assert_eq!(json["insight"], "Restock rice.");
        assert_eq!(json["cart_view"], "closed");
        assert_eq!(json["products"].as_array().map(Vec::len), Some(10));
    }
}
