//! The storefront facade.
//!
//! Wraps [`StorefrontState`] behind a mutex and drives the network side:
//! debounced smart search and the one-shot insight request. The lock is
//! never held across an await.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use saddar_ai::{
    mock_week, CompletionService, Debouncer, InsightClient, SalesPoint, SearchTicket, SmartSearch,
    DEFAULT_DEBOUNCE,
};
use saddar_commerce::prelude::*;

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::state::{CartView, InsightState, SearchDecision, StorefrontState, StorefrontView};

/// Storefront session: state plus the AI clients that feed it.
pub struct Storefront {
    state: Arc<Mutex<StorefrontState>>,
    smart: SmartSearch,
    insight: InsightClient,
    debouncer: Debouncer,
    sales: Vec<SalesPoint>,
}

impl Storefront {
    pub fn new(catalog: Arc<Catalog>, service: Arc<dyn CompletionService>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StorefrontState::new(catalog))),
            smart: SmartSearch::new(service.clone()),
            insight: InsightClient::new(service),
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
            sales: mock_week(),
        }
    }

    /// Build from configuration: catalog source, provider and timings.
    pub fn from_config(
        config: &StorefrontConfig,
        base_dir: &std::path::Path,
    ) -> Result<Self, StorefrontError> {
        let catalog = Arc::new(config.catalog.load(base_dir)?);
        let service = config.ai.completion_service();
        Ok(Self::new(catalog, service)
            .with_debounce(config.ai.debounce())
            .with_min_query_len(config.ai.min_query_len))
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.smart = self.smart.with_min_query_len(min_query_len);
        lock(&self.state).set_min_query_len(min_query_len);
        self
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        lock(&self.state).catalog().clone()
    }

    pub fn sales(&self) -> &[SalesPoint] {
        &self.sales
    }

    pub fn select_category(&self, category: Option<Category>) {
        lock(&self.state).select_category(category);
    }

    /// Record a query change.
    ///
    /// Long queries schedule a debounced smart search; each call restarts
    /// the quiet window. Short queries cancel any pending search.
    pub fn set_query(&mut self, query: impl Into<String>) -> SearchDecision {
        let decision = lock(&self.state).set_query(query);
        match &decision {
            SearchDecision::Smart { ticket, query } => {
                let search = run_search(
                    self.state.clone(),
                    self.smart.clone(),
                    *ticket,
                    query.clone(),
                );
                self.debouncer.schedule(async move {
                    search.await;
                });
            }
            SearchDecision::Skip => self.debouncer.cancel(),
        }
        decision
    }

    /// Record a query and, when it qualifies, run the smart search at once.
    pub async fn search_now(&mut self, query: impl Into<String>) -> SearchDecision {
        let decision = lock(&self.state).set_query(query);
        self.debouncer.cancel();
        if let SearchDecision::Smart { ticket, query } = &decision {
            self.run_smart_search(*ticket, query).await;
        }
        decision
    }

    /// Run a smart search now, bypassing the debounce window.
    ///
    /// The result is applied only if `ticket` is still current when it
    /// arrives. Returns whether it was applied.
    pub async fn run_smart_search(&self, ticket: SearchTicket, query: &str) -> bool {
        run_search(self.state.clone(), self.smart.clone(), ticket, query.to_string()).await
    }

    pub fn apply_search_result(&self, ticket: SearchTicket, result: Vec<Product>) -> bool {
        lock(&self.state).apply_search_result(ticket, result)
    }

    /// Wait for a scheduled smart search to finish.
    pub async fn settle(&mut self) {
        self.debouncer.flush().await;
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn go_home(&mut self) {
        self.debouncer.cancel();
        lock(&self.state).go_home();
    }

    pub fn add_to_cart(&self, id: &ProductId) -> Result<u32, StorefrontError> {
        lock(&self.state).add_to_cart(id)
    }

    pub fn update_quantity(&self, id: &ProductId, delta: i64) -> Option<u32> {
        lock(&self.state).update_quantity(id, delta)
    }

    pub fn remove_from_cart(&self, id: &ProductId) -> bool {
        lock(&self.state).remove_from_cart(id)
    }

    pub fn open_cart(&self) {
        lock(&self.state).open_cart();
    }

    pub fn close_cart(&self) {
        lock(&self.state).close_cart();
    }

    pub fn cart(&self) -> Cart {
        lock(&self.state).cart().clone()
    }

    pub fn cart_view(&self) -> CartView {
        lock(&self.state).cart_view()
    }

    pub fn checkout(&self) -> Result<Option<OrderReceipt>, StorefrontError> {
        lock(&self.state).checkout()
    }

    /// Fetch the insight once and store it; falls back to the default tip.
    pub async fn load_insight(&self) -> String {
        let text = self.insight.insight_or_default(&self.sales).await;
        lock(&self.state).set_insight(text.clone());
        text
    }

    /// The stored insight, fetched on first use only.
    pub async fn insight(&self) -> String {
        let stored = match lock(&self.state).insight() {
            InsightState::Ready(text) => Some(text.clone()),
            InsightState::Pending => None,
        };
        match stored {
            Some(text) => text,
            None => self.load_insight().await,
        }
    }

    pub fn visible_products(&self) -> Vec<Product> {
        lock(&self.state).visible_products()
    }

    pub fn section_title(&self) -> SectionTitle {
        lock(&self.state).section_title()
    }

    pub fn cart_badge(&self) -> u64 {
        lock(&self.state).cart_badge()
    }

    pub fn view(&self) -> StorefrontView {
        lock(&self.state).view()
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("smart", &self.smart)
            .field("insight", &self.insight)
            .field("debounce", &self.debouncer.delay())
            .finish_non_exhaustive()
    }
}

/// Transitions never leave partial state, so a poisoned lock is still usable.
fn lock(state: &Mutex<StorefrontState>) -> MutexGuard<'_, StorefrontState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn run_search(
    state: Arc<Mutex<StorefrontState>>,
    smart: SmartSearch,
    ticket: SearchTicket,
    query: String,
) -> bool {
    let catalog = {
        let mut guard = lock(&state);
        if !guard.begin_search(ticket) {
            return false;
        }
        guard.catalog().clone()
    };
    tracing::debug!(%ticket, query = %query, "smart search started");
    let result = smart.search(&query, &catalog).await;
    lock(&state).apply_search_result(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use saddar_ai::{AiError, DisabledCompletion, DEFAULT_INSIGHT};
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers with product names chosen by query keyword, after a delay.
    struct KeywordCompletion {
        calls: AtomicUsize,
        insight_calls: AtomicUsize,
        delay: Duration,
    }

    impl KeywordCompletion {
        fn new(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                insight_calls: AtomicUsize::new(0),
                delay,
            })
        }
    }

    #[async_trait]
    impl CompletionService for KeywordCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            self.insight_calls.fetch_add(1, Ordering::SeqCst);
            Ok("Saturday is your best day.".to_string())
        }

        async fn complete_structured(
            &self,
            prompt: &str,
            _schema: &Value,
        ) -> Result<String, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            let answer = if prompt.contains("\"fizzy drinks\"") {
                r#"["Cola Classic 500ml Pack of 24"]"#
            } else if prompt.contains("\"mens clothing\"") {
                r#"["Premium Cotton Kurta - White (Bulk 6pcs)", "Casual Slim Fit Shirts Pack of 10"]"#
            } else {
                "[]"
            };
            Ok(answer.to_string())
        }

        fn name(&self) -> &str {
            "keyword"
        }
    }

    fn storefront(service: Arc<dyn CompletionService>) -> Storefront {
        Storefront::new(Arc::new(Catalog::seed()), service)
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_applies_result() {
        let service = KeywordCompletion::new(Duration::from_millis(50));
        let mut store = storefront(service.clone());

        store.set_query("fizzy drinks");
        assert!(store.is_search_pending());
        assert_eq!(store.section_title(), SectionTitle::InventoryPicks);

        store.settle().await;
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.section_title(), SectionTitle::AiCurated);
        assert_eq!(names(&store.visible_products()), vec!["Cola Classic 500ml Pack of 24"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_sends_one_request() {
        let service = KeywordCompletion::new(Duration::ZERO);
        let mut store = storefront(service.clone());

        for prefix in ["mens c", "mens cl", "mens clo", "mens clothing"] {
            store.set_query(prefix);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        store.settle().await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.visible_products().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_query_cancels_pending_search() {
        let service = KeywordCompletion::new(Duration::ZERO);
        let mut store = storefront(service.clone());

        store.set_query("fizzy drinks");
        store.set_query("cola");
        store.settle().await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert_eq!(names(&store.visible_products()), vec!["Cola Classic 500ml Pack of 24"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stale_response_is_ignored() {
        let fast = KeywordCompletion::new(Duration::from_millis(50));
        let slow = KeywordCompletion::new(Duration::from_secs(5));
        let mut store = storefront(fast.clone());

        let SearchDecision::Smart { ticket: old, query } = store.set_query("fizzy drinks") else {
            panic!("expected smart search");
        };
        let in_flight = tokio::spawn(run_search(
            store.state.clone(),
            SmartSearch::new(slow.clone()),
            old,
            query,
        ));
        tokio::task::yield_now().await;
        assert_eq!(slow.calls.load(Ordering::SeqCst), 1);

        let SearchDecision::Smart { ticket: new, .. } = store.set_query("mens clothing") else {
            panic!("expected smart search");
        };
        assert!(new > old);
        store.settle().await;
        assert_eq!(store.visible_products().len(), 2);

        assert!(!in_flight.await.unwrap());
        assert_eq!(fast.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.section_title(), SectionTitle::AiCurated);
        assert_eq!(
            names(&store.visible_products()),
            vec![
                "Premium Cotton Kurta - White (Bulk 6pcs)",
                "Casual Slim Fit Shirts Pack of 10"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_home_cancels_and_resets() {
        let service = KeywordCompletion::new(Duration::ZERO);
        let mut store = storefront(service.clone());

        store.select_category(Some(Category::Beverages));
        store.set_query("fizzy drinks");
        store.go_home();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        let view = store.view();
        assert!(view.is_home);
        assert_eq!(view.products.len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_now_skips_debounce() {
        let service = KeywordCompletion::new(Duration::ZERO);
        let mut store = storefront(service.clone());

        store.set_query("fizzy");
        let decision = store.search_now("mens clothing").await;
        assert!(matches!(decision, SearchDecision::Smart { .. }));
        assert!(!store.is_search_pending());
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.visible_products().len(), 2);
    }

    #[tokio::test]
    async fn test_ai_disabled_gives_empty_subset() {
        let mut store = storefront(Arc::new(DisabledCompletion)).with_debounce(Duration::ZERO);
        store.set_query("fizzy drinks");
        store.settle().await;

        assert!(store.visible_products().is_empty());
        assert_eq!(store.section_title(), SectionTitle::AiCurated);
        assert_eq!(store.view().caption, "0 Wholesale Units Ready");
    }

    #[tokio::test]
    async fn test_insight_replaces_placeholder() {
        let store = storefront(KeywordCompletion::new(Duration::ZERO));
        assert_eq!(store.view().insight, saddar_ai::INSIGHT_PLACEHOLDER);
        assert_eq!(store.load_insight().await, "Saturday is your best day.");
        assert_eq!(store.view().insight, "Saturday is your best day.");
    }

    #[tokio::test]
    async fn test_stored_insight_is_reused() {
        let service = KeywordCompletion::new(Duration::ZERO);
        let store = storefront(service.clone());

        assert_eq!(store.insight().await, "Saturday is your best day.");
        assert_eq!(store.insight().await, "Saturday is your best day.");
        assert_eq!(service.insight_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_insight_falls_back_without_ai() {
        let store = storefront(Arc::new(DisabledCompletion));
        assert_eq!(store.load_insight().await, DEFAULT_INSIGHT);
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let store = storefront(Arc::new(DisabledCompletion));
        let milk = ProductId::new("1");

        store.add_to_cart(&milk).unwrap();
        store.add_to_cart(&milk).unwrap();
        store.open_cart();
        assert_eq!(store.cart_badge(), 2);
        assert_eq!(store.cart().total().unwrap(), Money::pkr(4800));

        let receipt = store.checkout().unwrap().unwrap();
        assert_eq!(receipt.items, 2);
        assert_eq!(store.cart_badge(), 0);
        assert_eq!(store.cart_view(), CartView::Closed);
        assert!(store.checkout().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_min_query_len_is_configurable() {
        let mut store = storefront(Arc::new(DisabledCompletion)).with_min_query_len(2);
        assert!(matches!(store.set_query("tea"), SearchDecision::Smart { .. }));
        assert_eq!(store.set_query("te"), SearchDecision::Skip);
    }
}
