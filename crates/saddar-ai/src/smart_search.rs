//! AI-assisted mapping from a free-text query to a catalog subset.

use std::sync::Arc;

use saddar_commerce::catalog::{Catalog, Product};
use serde_json::{json, Value};

use crate::completion::CompletionService;
use crate::error::AiError;

/// A query must be longer than this (after trimming) to go to the AI.
pub const MIN_SMART_QUERY_LEN: usize = 5;

/// Schema asking for a JSON array of strings.
pub fn string_array_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

/// Smart-search client.
///
/// Never fails: malformed answers and service errors both yield an
/// empty result, logged at `warn`.
#[derive(Clone)]
pub struct SmartSearch {
    service: Arc<dyn CompletionService>,
    min_query_len: usize,
}

impl SmartSearch {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service,
            min_query_len: MIN_SMART_QUERY_LEN,
        }
    }

    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Whether a query is long enough to send.
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() > self.min_query_len
    }

    /// Ask the service which products match `query`.
    ///
    /// Returns the matching catalog entries in catalog order.
    pub async fn search(&self, query: &str, catalog: &Catalog) -> Vec<Product> {
        let prompt = build_prompt(query.trim(), catalog);
        let raw = match self
            .service
            .complete_structured(&prompt, &string_array_schema())
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    provider = self.service.name(),
                    error = %e,
                    "smart search request failed"
                );
                return Vec::new();
            }
        };

        match parse_names(&raw) {
            Ok(names) => {
                let products = catalog.select_by_names(names.as_slice());
                tracing::debug!(
                    returned = names.len(),
                    matched = products.len(),
                    "smart search resolved"
                );
                products
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse smart search response");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for SmartSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartSearch")
            .field("provider", &self.service.name())
            .field("min_query_len", &self.min_query_len)
            .finish()
    }
}

/// The prompt sent to the completion service.
pub fn build_prompt(query: &str, catalog: &Catalog) -> String {
    format!(
        "Based on the user's query: \"{query}\", which of the following products are most relevant? \n\
         Products available: {}.\n\
         Provide the response as a JSON array of product names only.",
        catalog.summary()
    )
}

/// Parse the service's answer as a JSON array of strings.
pub fn parse_names(raw: &str) -> Result<Vec<String>, AiError> {
    let names: Vec<String> = serde_json::from_str(strip_code_fence(raw))?;
    Ok(names)
}

/// Models occasionally wrap JSON in a markdown fence despite the mime type.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers every structured call with a fixed result and records prompts.
    struct FakeCompletion {
        answer: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeCompletion {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                answer: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                answer: Err(status),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionService for FakeCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            unreachable!("smart search only uses structured completion")
        }

        async fn complete_structured(
            &self,
            prompt: &str,
            schema: &Value,
        ) -> Result<String, AiError> {
            assert_eq!(schema["type"], "ARRAY");
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.answer {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(AiError::Http { status: *status, body: String::new() }),
            }
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_accepts_only_queries_longer_than_threshold() {
        let search = SmartSearch::new(FakeCompletion::answering("[]"));
        assert!(!search.accepts("milk"));
        assert!(!search.accepts("cola!"));
        assert!(!search.accepts("   cola!    "));
        assert!(search.accepts("drinks"));
    }

    #[test]
    fn test_prompt_lists_every_product_with_category() {
        let catalog = Catalog::seed();
        let prompt = build_prompt("cold drinks", &catalog);
        assert!(prompt.contains("\"cold drinks\""));
        assert!(prompt.contains("Cola Classic 500ml Pack of 24 (Beverages)"));
        assert!(prompt.contains("Fresh Milk 1L Pack of 12 (Dairy & Eggs)"));
        assert!(prompt.contains("JSON array of product names"));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_names(r#"["a", "b"]"#).unwrap(), vec!["a", "b"]);
        assert_eq!(parse_names("```json\n[\"a\"]\n```").unwrap(), vec!["a"]);
        assert!(parse_names("not json").is_err());
        assert!(parse_names(r#"{"names": ["a"]}"#).is_err());
        assert!(parse_names("[1, 2]").is_err());
    }

    #[tokio::test]
    async fn test_unmatched_names_are_dropped() {
        let fake =
            FakeCompletion::answering(r#"["Cola Classic 500ml Pack of 24", "Nonexistent Item"]"#);
        let search = SmartSearch::new(fake.clone());
        let catalog = Catalog::seed();

        let result = search.search("something fizzy", &catalog).await;
        assert_eq!(names(&result), vec!["Cola Classic 500ml Pack of 24"]);
        assert_eq!(fake.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_answer_yields_empty() {
        let search = SmartSearch::new(FakeCompletion::answering("Sure! Here are some products"));
        assert!(search.search("something fizzy", &Catalog::seed()).await.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_yields_empty() {
        let search = SmartSearch::new(FakeCompletion::failing(503));
        assert!(search.search("something fizzy", &Catalog::seed()).await.is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed_in_prompt() {
        let fake = FakeCompletion::answering("[]");
        let search = SmartSearch::new(fake.clone());
        search.search("  lawn suits  ", &Catalog::seed()).await;
        let prompts = fake.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"lawn suits\""));
    }
}
