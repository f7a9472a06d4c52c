//! Catalog browsing commands.

use anyhow::Result;
use saddar_commerce::prelude::*;
use saddar_storefront::SearchDecision;

use super::CatalogArgs;
use crate::context::Context;
use crate::render;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.select_category(args.category);

    let query = args.query.unwrap_or_default();
    if args.smart {
        let spinner = ctx.output.spinner("Thinking...");
        let decision = store.search_now(query.as_str()).await;
        spinner.finish_and_clear();
        if decision == SearchDecision::Skip {
            ctx.output.warn(&format!(
                "Smart search needs more than {} characters; using text match",
                ctx.config.ai.min_query_len
            ));
        }
        let view = store.view();
        if ctx.output.is_json() {
            ctx.output.json(&view);
        } else {
            render::storefront(&ctx.output, &view, store.catalog().brands());
        }
        return Ok(());
    }

    // Plain text matching, no AI.
    let catalog = store.catalog();
    let criteria = FilterCriteria::new()
        .with_category(args.category)
        .with_query(query);
    let products = visible_products(catalog.products(), &criteria, None);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = SectionTitle::resolve(false, args.category, false);
    ctx.output.header(&title.to_string().to_uppercase());
    ctx.output.caption(&results_caption(products.len()));
    render::products(&ctx.output, &products);
    Ok(())
}

/// List partner brands.
pub async fn brands(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let catalog = store.catalog();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.brands());
        return Ok(());
    }

    ctx.output.header("Partner Brands");
    for brand in catalog.brands() {
        ctx.output.list_item(&brand.name);
    }
    Ok(())
}

/// List categories with product counts.
pub async fn categories(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let catalog = store.catalog();

    let counts: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|&c| (c, catalog.in_category(c).count()))
        .collect();

    if ctx.output.is_json() {
        let rows: Vec<_> = counts
            .iter()
            .map(|(c, n)| serde_json::json!({ "category": c, "slug": c.slug(), "products": n }))
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    for (category, count) in &counts {
        let slug = category.slug();
        let count = count.to_string();
        ctx.output
            .table_row(&[category.label(), slug.as_str(), count.as_str()], &[18, 18, 4]);
    }
    Ok(())
}
