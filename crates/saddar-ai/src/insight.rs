//! Business insight generated from recent sales.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::completion::CompletionService;
use crate::error::AiError;

/// Shown when the service fails or returns nothing.
pub const DEFAULT_INSIGHT: &str =
    "Pro-tip: Stock up on snacks! They are trending 15% higher this weekend.";

/// Shown while the insight request is in flight.
pub const INSIGHT_PLACEHOLDER: &str = "Crunching numbers to find your next profit boost...";

/// One day of sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub name: String,
    pub sales: u64,
}

impl SalesPoint {
    pub fn new(name: impl Into<String>, sales: u64) -> Self {
        Self {
            name: name.into(),
            sales,
        }
    }
}

/// The fixed Mon..Sun sales week used on the dashboard.
pub fn mock_week() -> Vec<SalesPoint> {
    [
        ("Mon", 4000),
        ("Tue", 3000),
        ("Wed", 5000),
        ("Thu", 2780),
        ("Fri", 3890),
        ("Sat", 6390),
        ("Sun", 4490),
    ]
    .into_iter()
    .map(|(name, sales)| SalesPoint::new(name, sales))
    .collect()
}

/// The prompt sent to the completion service.
pub fn build_prompt(sales: &[SalesPoint]) -> Result<String, AiError> {
    let data = serde_json::to_string(sales)?;
    Ok(format!(
        "Analyze these recent sales: {data}. Provide a brief 2-sentence business insight for the retailer to improve profit."
    ))
}

/// Insight client.
#[derive(Clone)]
pub struct InsightClient {
    service: Arc<dyn CompletionService>,
}

impl InsightClient {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Ask for an insight, surfacing failures.
    pub async fn insight(&self, sales: &[SalesPoint]) -> Result<String, AiError> {
        let prompt = build_prompt(sales)?;
        let text = self.service.complete(&prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    /// Ask for an insight, falling back to [`DEFAULT_INSIGHT`].
    pub async fn insight_or_default(&self, sales: &[SalesPoint]) -> String {
        match self.insight(sales).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    provider = self.service.name(),
                    error = %e,
                    "insight unavailable, using default"
                );
                DEFAULT_INSIGHT.to_string()
            }
        }
    }
}

impl std::fmt::Debug for InsightClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightClient")
            .field("provider", &self.service.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::DisabledCompletion;
    use async_trait::async_trait;
    use serde_json::Value;

    struct Answer(&'static str);

    #[async_trait]
    impl CompletionService for Answer {
        async fn complete(&self, prompt: &str) -> Result<String, AiError> {
            assert!(prompt.starts_with("Analyze these recent sales: [{"));
            Ok(self.0.to_string())
        }

        async fn complete_structured(
            &self,
            _prompt: &str,
            _schema: &Value,
        ) -> Result<String, AiError> {
            unreachable!("insights use free-text completion")
        }

        fn name(&self) -> &str {
            "answer"
        }
    }

    #[test]
    fn test_mock_week() {
        let week = mock_week();
        let sales: Vec<u64> = week.iter().map(|p| p.sales).collect();
        assert_eq!(sales, vec![4000, 3000, 5000, 2780, 3890, 6390, 4490]);
        assert_eq!(week[0].name, "Mon");
        assert_eq!(week[6].name, "Sun");
    }

    #[test]
    fn test_prompt_embeds_sales_json() {
        let prompt = build_prompt(&[SalesPoint::new("Mon", 4000)]).unwrap();
        assert_eq!(
            prompt,
            "Analyze these recent sales: [{\"name\":\"Mon\",\"sales\":4000}]. Provide a brief 2-sentence business insight for the retailer to improve profit."
        );
    }

    #[tokio::test]
    async fn test_insight_text_is_returned() {
        let client = InsightClient::new(Arc::new(Answer("  Saturday peaks. Stock up Friday.  ")));
        assert_eq!(
            client.insight_or_default(&mock_week()).await,
            "Saturday peaks. Stock up Friday."
        );
    }

    #[tokio::test]
    async fn test_empty_text_falls_back() {
        let client = InsightClient::new(Arc::new(Answer("   ")));
        assert!(matches!(client.insight(&mock_week()).await, Err(AiError::EmptyResponse)));
        assert_eq!(client.insight_or_default(&mock_week()).await, DEFAULT_INSIGHT);
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let client = InsightClient::new(Arc::new(DisabledCompletion));
        assert_eq!(client.insight_or_default(&mock_week()).await, DEFAULT_INSIGHT);
    }
}
