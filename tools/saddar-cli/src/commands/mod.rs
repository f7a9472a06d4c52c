//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod insight;
pub mod shop;

use clap::{Args, Subcommand};
use saddar_commerce::catalog::Category;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show this category (label or slug, e.g. "dairy-eggs").
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Free-text filter on name or brand.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Ask the AI which products match the query.
    #[arg(long, requires = "query")]
    pub smart: bool,
}

/// Arguments for the chart command.
#[derive(Args)]
pub struct ChartArgs {
    /// Bar width of the busiest day, in columns.
    #[arg(short, long, default_value_t = 40)]
    pub width: usize,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Skip the checkout confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Skip fetching the insight on start.
    #[arg(long)]
    pub no_insight: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Create a saddar.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
