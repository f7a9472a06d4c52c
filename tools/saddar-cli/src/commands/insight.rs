//! Sales dashboard commands.

use anyhow::Result;
use console::style;

use super::ChartArgs;
use crate::context::Context;
use crate::render;

/// Ask for a business insight on the week's sales.
pub async fn run(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;

    let spinner = ctx.output.spinner(saddar_ai::INSIGHT_PLACEHOLDER);
    let text = store.load_insight().await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "insight": text }));
        return Ok(());
    }

    ctx.output.header("Market Insight");
    ctx.output.line(&format!("  \"{}\"", style(text).italic()));
    Ok(())
}

/// Print the week's sales as a bar chart.
pub async fn chart(args: ChartArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let sales = store.sales();

    if ctx.output.is_json() {
        ctx.output.json(&sales);
        return Ok(());
    }

    ctx.output.header("Weekly Sales");
    for line in render::sales_chart(sales, args.width.max(1)) {
        ctx.output.line(&format!("  {line}"));
    }
    let total: u64 = sales.iter().map(|p| p.sales).sum();
    ctx.output.kv("Total", &total.to_string());
    Ok(())
}
