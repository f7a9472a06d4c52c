//! Storefront configuration.
//!
//! Loaded from `saddar.toml` (or `.json`), either an explicit path or the
//! first match walking up from the working directory. Every field has a
//! default, so an absent file means a fully working offline storefront.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use saddar_ai::{
    CompletionService, DisabledCompletion, GeminiClient, GeminiConfig, RetryPolicy, TimeoutConfig,
};
use saddar_commerce::catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["saddar.toml", ".saddar.toml", "saddar.json"];

/// Fallback environment variable for the API key.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Completion-service settings.
    #[serde(default)]
    pub ai: AiConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Completion-service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    /// Set to false to run without any AI calls.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Total request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries after the first attempt.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Quiet window before a smart search fires, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// A trimmed query must be longer than this to use smart search.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_true() -> bool {
    true
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_base_url() -> String {
    saddar_ai::gemini::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    saddar_ai::gemini::DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    saddar_ai::gemini::DEFAULT_TIMEOUT.as_secs()
}

fn default_retries() -> u32 {
    1
}

fn default_debounce_ms() -> u64 {
    saddar_ai::DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_min_query_len() -> usize {
    saddar_ai::MIN_SMART_QUERY_LEN
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
        }
    }
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Find the API key using `lookup` for environment access.
    ///
    /// Tries the configured variable, then [`FALLBACK_API_KEY_ENV`]. Blank
    /// values count as missing.
    pub fn resolve_api_key<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|var| lookup(var))
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    /// Find the API key in the process environment, loading `.env` first
    /// if one exists.
    pub fn api_key_from_env(&self) -> Option<String> {
        dotenvy::dotenv().ok();
        self.resolve_api_key(|var| std::env::var(var).ok())
    }

    /// Build the provider from the process environment.
    ///
    /// A disabled config, missing key or unbuildable client all yield
    /// [`DisabledCompletion`].
    pub fn completion_service(&self) -> Arc<dyn CompletionService> {
        dotenvy::dotenv().ok();
        self.completion_service_with(|var| std::env::var(var).ok())
    }

    /// Build the provider using `lookup` for environment access.
    pub fn completion_service_with<F>(&self, lookup: F) -> Arc<dyn CompletionService>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.enabled {
            tracing::info!("AI disabled by configuration");
            return Arc::new(DisabledCompletion);
        }
        let Some(api_key) = self.resolve_api_key(lookup) else {
            tracing::warn!(
                env = %self.api_key_env,
                "no API key found, smart search and insights are disabled"
            );
            return Arc::new(DisabledCompletion);
        };

        let config = GeminiConfig::new(api_key)
            .with_base_url(&self.base_url)
            .with_model(&self.model)
            .with_timeout(TimeoutConfig::from_total(self.timeout()))
            .with_retry(RetryPolicy::new(self.retries));
        match GeminiClient::new(config) {
            Ok(client) => {
                tracing::debug!(model = %self.model, "completion service ready");
                Arc::new(client)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to build completion client, AI disabled");
                Arc::new(DisabledCompletion)
            }
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON data file; the built-in seed data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load the configured catalog. Relative paths resolve against `base_dir`.
    pub fn load(&self, base_dir: &Path) -> Result<Catalog, StorefrontError> {
        let Some(file) = &self.data_file else {
            return Ok(Catalog::seed());
        };
        let path = if file.is_absolute() {
            file.clone()
        } else {
            base_dir.join(file)
        };
        let content = std::fs::read_to_string(&path).map_err(|source| StorefrontError::Io {
            path: path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&content)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl StorefrontConfig {
    /// Load config from a file; `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, StorefrontError> {
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: Result<Self, String> = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        let config = parsed.map_err(|message| StorefrontError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file in the format its extension implies.
    pub fn save(&self, path: &Path) -> Result<(), StorefrontError> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| StorefrontError::ConfigSerialize(e.to_string()))?
        } else {
            self.to_toml()?
        };
        std::fs::write(path, content).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, StorefrontError> {
        toml::to_string_pretty(self).map_err(|e| StorefrontError::ConfigSerialize(e.to_string()))
    }

    /// Find a config file in `start` or any parent directory.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Load from `explicit`, else the discovered file, else defaults.
    ///
    /// Returns the config and the directory relative paths resolve against.
    pub fn resolve(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> Result<(Self, PathBuf), StorefrontError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(cwd),
        };
        match path {
            Some(path) => {
                let config = Self::load(&path)?;
                tracing::debug!(path = %path.display(), "config loaded");
                let base = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
                Ok((config, base))
            }
            None => Ok((Self::default(), cwd.to_path_buf())),
        }
    }

    fn validate(&self) -> Result<(), StorefrontError> {
        if self.ai.api_key_env.trim().is_empty() {
            return Err(StorefrontError::InvalidConfig("ai.api_key_env must not be empty".into()));
        }
        if self.ai.model.trim().is_empty() {
            return Err(StorefrontError::InvalidConfig("ai.model must not be empty".into()));
        }
        if self.ai.timeout_secs == 0 {
            return Err(StorefrontError::InvalidConfig("ai.timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Template written by `saddar config init`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Saddar storefront configuration

[ai]
enabled = true
# Environment variable holding the API key (falls back to {fallback}).
api_key_env = "GEMINI_API_KEY"
base_url = "{base_url}"
model = "{model}"
timeout_secs = {timeout}
retries = 1
debounce_ms = {debounce}
min_query_len = {min_len}

[catalog]
# data_file = "catalog.json"
"#,
        fallback = FALLBACK_API_KEY_ENV,
        base_url = default_base_url(),
        model = default_model(),
        timeout = default_timeout_secs(),
        debounce = default_debounce_ms(),
        min_len = default_min_query_len(),
    )
}
