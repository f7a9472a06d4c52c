//! Saddar CLI - Terminal storefront for the Saddar wholesale marketplace.
//!
//! Commands:
//! - `saddar catalog` - Browse and filter products
//! - `saddar brands` - List partner brands
//! - `saddar categories` - List categories
//! - `saddar insight` - Ask for a sales insight
//! - `saddar chart` - Show the weekly sales chart
//! - `saddar shop` - Interactive shopping session
//! - `saddar config` - Manage configuration

mod commands;
mod context;
mod output;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ChartArgs, ConfigArgs, ShopArgs};

/// Saddar CLI - Browse and order from the wholesale catalog
#[derive(Parser)]
#[command(name = "saddar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products by category and text
    Catalog(CatalogArgs),

    /// List partner brands
    Brands,

    /// List categories with product counts
    Categories,

    /// Ask the AI for a business insight on this week's sales
    Insight,

    /// Show this week's sales as a bar chart
    Chart(ChartArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    saddar_storefront::init_tracing(cli.verbose)?;

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Brands => commands::catalog::brands(&ctx).await,
        Commands::Categories => commands::catalog::categories(&ctx).await,
        Commands::Insight => commands::insight::run(&ctx).await,
        Commands::Chart(args) => commands::insight::chart(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
