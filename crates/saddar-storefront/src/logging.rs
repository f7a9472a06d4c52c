//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::StorefrontError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "saddar=info";

/// Filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "saddar=debug,saddar_ai=debug,saddar_storefront=debug"
    } else {
        "saddar=info,saddar_ai=info,saddar_storefront=info"
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `verbose` when set.
pub fn init_tracing(verbose: bool) -> Result<(), StorefrontError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .map_err(|e| StorefrontError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| StorefrontError::Logging(e.to_string()))
}
