//! Completion-service clients for the storefront.
//!
//! - **Completion**: The [`CompletionService`] seam and the Gemini provider
//! - **Smart search**: Free-text query to a catalog subset
//! - **Insight**: A short business tip from recent sales
//! - **Debounce / sequence**: Rate limiting and stale-response protection
//!
//! Nothing here fails loudly at the storefront boundary: smart search
//! degrades to an empty result and insights to [`DEFAULT_INSIGHT`].

pub mod completion;
pub mod debounce;
pub mod error;
pub mod gemini;
pub mod insight;
pub mod retry;
pub mod sequence;
pub mod smart_search;
pub mod timeout;

pub use completion::{CompletionService, DisabledCompletion};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::AiError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use insight::{mock_week, InsightClient, SalesPoint, DEFAULT_INSIGHT, INSIGHT_PLACEHOLDER};
pub use retry::{BackoffStrategy, RetryCondition, RetryPolicy};
pub use sequence::{SearchSequencer, SearchTicket};
pub use smart_search::{SmartSearch, MIN_SMART_QUERY_LEN};
pub use timeout::TimeoutConfig;
