//! Retry behaviour of the configured completion service, end to end.

use std::sync::Arc;

use saddar_ai::DEFAULT_INSIGHT;
use saddar_commerce::catalog::Catalog;
use saddar_storefront::{AiConfig, SearchDecision, Storefront};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn storefront_for(server: &MockServer) -> Storefront {
    let config = AiConfig {
        base_url: server.uri(),
        model: "test-model".to_string(),
        ..AiConfig::default()
    };
    let service = config.completion_service_with(|_: &str| Some("test-key".to_string()));
    Storefront::new(Arc::new(Catalog::seed()), service)
}

#[tokio::test]
async fn insight_is_requested_once_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let store = storefront_for(&server);
    assert_eq!(store.load_insight().await, DEFAULT_INSIGHT);
}

#[tokio::test]
async fn smart_search_keeps_its_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let mut store = storefront_for(&server);
    let decision = store.search_now("something fizzy").await;

    assert!(matches!(decision, SearchDecision::Smart { .. }));
    assert!(store.view().products.is_empty());
}
