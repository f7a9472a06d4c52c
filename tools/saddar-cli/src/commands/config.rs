//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use saddar_storefront::config::{generate_default_config, CONFIG_FILE_NAMES};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let ai = &ctx.config.ai;
    ctx.output.header("Current Configuration");
    ctx.output.info("[ai]");
    ctx.output.kv("enabled", &ai.enabled.to_string());
    ctx.output.kv("api_key_env", &ai.api_key_env);
    ctx.output.kv(
        "api_key",
        if ai.api_key_from_env().is_some() {
            "set"
        } else {
            "missing (AI disabled)"
        },
    );
    ctx.output.kv("base_url", &ai.base_url);
    ctx.output.kv("model", &ai.model);
    ctx.output.kv("timeout_secs", &ai.timeout_secs.to_string());
    ctx.output.kv("retries", &ai.retries.to_string());
    ctx.output.kv("debounce_ms", &ai.debounce_ms.to_string());
    ctx.output.kv("min_query_len", &ai.min_query_len.to_string());

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.data_file {
        Some(path) => ctx.output.kv("data_file", &path.display().to_string()),
        None => ctx.output.kv("data_file", "(built-in)"),
    }
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = ctx.config_path.as_ref();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
        return Ok(());
    }
    match path {
        Some(path) => ctx.output.line(&path.display().to_string()),
        None => ctx.output.info("No config file found; using defaults. Run `saddar config init`."),
    }
    Ok(())
}
