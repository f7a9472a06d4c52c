//! The completion-service seam.
//!
//! Smart search and insights only see this trait, so any provider (or a
//! fake in tests) can stand behind them.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AiError;

/// A text-completion service.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Complete a prompt with free text.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;

    /// Complete a prompt, asking for JSON that matches `schema`.
    ///
    /// Returns the raw JSON text; callers parse it themselves because
    /// providers do not always honor the schema.
    async fn complete_structured(&self, prompt: &str, schema: &Value) -> Result<String, AiError>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}

/// Stand-in used when no API key is configured. Every call fails fast.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledCompletion;

#[async_trait]
impl CompletionService for DisabledCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::MissingApiKey)
    }

    async fn complete_structured(&self, _prompt: &str, _schema: &Value) -> Result<String, AiError> {
        Err(AiError::MissingApiKey)
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
