//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use saddar_storefront::{Storefront, StorefrontConfig};

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Directory relative config paths resolve against.
    pub base_dir: PathBuf,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config_path = match config_path {
            Some(path) => Some(resolve_path(&cwd, path)),
            None => StorefrontConfig::discover(&cwd),
        };
        let (config, base_dir) = StorefrontConfig::resolve(config_path.as_deref(), &cwd)
            .context("Failed to load configuration")?;

        Ok(Self {
            config,
            config_path,
            base_dir,
            output,
            cwd,
        })
    }

    /// Build a storefront session from the loaded configuration.
    pub fn storefront(&self) -> Result<Storefront> {
        Storefront::from_config(&self.config, &self.base_dir).context("Failed to open storefront")
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
