//! Interactive shopping session.

use anyhow::Result;
use dialoguer::{Confirm, Input};
use saddar_commerce::prelude::*;
use saddar_storefront::{SearchDecision, Storefront, StorefrontError};

use super::ShopArgs;
use crate::context::Context;
use crate::render;

/// A line typed at the shop prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    /// Replace the query; empty clears it.
    Search(String),
    /// Select a category, `None` for all.
    Category(Option<Category>),
    Home,
    List,
    Add(ProductId),
    Adjust(ProductId, i64),
    Remove(ProductId),
    Cart,
    Close,
    Checkout,
    Insight,
    Chart,
    Help,
    Quit,
}

const HELP: &[(&str, &str)] = &[
    ("search <text>", "filter by text; longer queries ask the AI"),
    ("category <name|all>", "show one category"),
    ("home", "clear search and category"),
    ("list", "show the current products"),
    ("add <id>", "add one unit to the cart"),
    ("inc <id> [n] / dec <id> [n]", "change a cart quantity"),
    ("remove <id>", "drop a cart entry"),
    ("cart / close", "open or close the cart"),
    ("checkout", "submit the wholesale order"),
    ("insight / chart", "sales dashboard"),
    ("quit", "leave the shop"),
];

/// Parse a prompt line. Empty input lists the current products.
pub fn parse_command(line: &str) -> Result<ShopCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let id = |usage: &str| -> Result<ProductId, String> {
        rest.split_whitespace()
            .next()
            .map(ProductId::new)
            .ok_or_else(|| format!("usage: {usage}"))
    };
    let amount = |sign: i64| -> Result<i64, String> {
        match rest.split_whitespace().nth(1) {
            None => Ok(sign),
            Some(n) => n
                .parse::<u32>()
                .map(|n| sign * i64::from(n))
                .map_err(|_| format!("not a quantity: {n}")),
        }
    };

    match word.to_lowercase().as_str() {
        "" | "list" | "ls" => Ok(ShopCommand::List),
        "search" | "s" | "/" => Ok(ShopCommand::Search(rest.to_string())),
        "category" | "cat" | "c" => {
            if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                Ok(ShopCommand::Category(None))
            } else {
                Category::from_label(rest)
                    .map(|c| ShopCommand::Category(Some(c)))
                    .ok_or_else(|| format!("unknown category: {rest}"))
            }
        }
        "home" => Ok(ShopCommand::Home),
        "add" | "a" => Ok(ShopCommand::Add(id("add <id>")?)),
        "inc" | "+" => Ok(ShopCommand::Adjust(id("inc <id> [n]")?, amount(1)?)),
        "dec" | "-" => Ok(ShopCommand::Adjust(id("dec <id> [n]")?, amount(-1)?)),
        "remove" | "rm" => Ok(ShopCommand::Remove(id("remove <id>")?)),
        "cart" => Ok(ShopCommand::Cart),
        "close" => Ok(ShopCommand::Close),
        "checkout" => Ok(ShopCommand::Checkout),
        "insight" => Ok(ShopCommand::Insight),
        "chart" => Ok(ShopCommand::Chart),
        "help" | "?" => Ok(ShopCommand::Help),
        "quit" | "exit" | "q" => Ok(ShopCommand::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

/// Run the shop session.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    if !args.no_insight {
        let spinner = ctx.output.spinner(saddar_ai::INSIGHT_PLACEHOLDER);
        store.load_insight().await;
        spinner.finish_and_clear();
    }
    show(&store, ctx);
    ctx.output.caption("Type `help` for commands.");

    loop {
        let prompt = format!("saddar [{}]", store.cart_badge());
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                ctx.output.warn(&msg);
                continue;
            }
        };
        tracing::debug!(?command, "shop command");

        if command == ShopCommand::Quit {
            break;
        }
        if let Err(e) = execute(command, &mut store, &args, ctx).await {
            ctx.output.error(&format!("{:#}", e));
        }
    }

    let cart = store.cart();
    if !cart.is_empty() {
        ctx.output.warn(&format!(
            "Leaving with {} item(s) in the cart; nothing was ordered.",
            cart.item_count()
        ));
    }
    Ok(())
}

async fn execute(
    command: ShopCommand,
    store: &mut Storefront,
    args: &ShopArgs,
    ctx: &Context,
) -> Result<()> {
    match command {
        ShopCommand::Search(query) => {
            if let SearchDecision::Smart { .. } = store.set_query(query) {
                let spinner = ctx.output.spinner("Thinking...");
                store.settle().await;
                spinner.finish_and_clear();
            }
            show(store, ctx);
        }
        ShopCommand::Category(category) => {
            store.select_category(category);
            show(store, ctx);
        }
        ShopCommand::Home => {
            store.go_home();
            show(store, ctx);
        }
        ShopCommand::List => show(store, ctx),
        ShopCommand::Add(id) => match store.add_to_cart(&id) {
            Ok(quantity) => ctx.output.success(&format!("Added {id} (now {quantity})")),
            Err(e @ (StorefrontError::OutOfStock(_) | StorefrontError::UnknownProduct(_))) => {
                ctx.output.warn(&e.to_string());
            }
            Err(e) => return Err(e.into()),
        },
        ShopCommand::Adjust(id, delta) => match store.update_quantity(&id, delta) {
            Some(0) => ctx.output.info(&format!("Removed {id} from the cart")),
            Some(quantity) => ctx.output.success(&format!("{id}: {quantity}")),
            None => ctx.output.warn(&format!("{id} is not in the cart")),
        },
        ShopCommand::Remove(id) => {
            if store.remove_from_cart(&id) {
                ctx.output.info(&format!("Removed {id} from the cart"));
            } else {
                ctx.output.warn(&format!("{id} is not in the cart"));
            }
        }
        ShopCommand::Cart => {
            store.open_cart();
            show_cart(store, ctx)?;
        }
        ShopCommand::Close => store.close_cart(),
        ShopCommand::Checkout => checkout(store, args, ctx)?,
        ShopCommand::Insight => {
            let spinner = ctx.output.spinner(saddar_ai::INSIGHT_PLACEHOLDER);
            let text = store.insight().await;
            spinner.finish_and_clear();
            ctx.output.line(&format!("  \"{text}\""));
        }
        ShopCommand::Chart => {
            for line in render::sales_chart(store.sales(), 40) {
                ctx.output.line(&format!("  {line}"));
            }
        }
        ShopCommand::Help => {
            for (usage, what) in HELP {
                ctx.output.kv(usage, what);
            }
        }
        ShopCommand::Quit => {}
    }
    Ok(())
}

fn checkout(store: &Storefront, args: &ShopArgs, ctx: &Context) -> Result<()> {
    let cart = store.cart();
    if cart.is_empty() {
        store.checkout()?;
        ctx.output.warn("Your cart is empty.");
        return Ok(());
    }

    if !args.yes {
        show_cart(store, ctx)?;
        let confirmed = Confirm::new()
            .with_prompt(format!("Submit order for {}?", cart.total()?))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    if let Some(receipt) = store.checkout()? {
        if ctx.output.is_json() {
            ctx.output.json(&receipt);
        } else {
            ctx.output.success(CHECKOUT_CONFIRMATION);
            ctx.output.kv("Order", receipt.id.as_str());
            ctx.output.kv("Units", &receipt.items.to_string());
            ctx.output.kv("Status", receipt.status.as_str());
            ctx.output.kv("Total", &receipt.total.to_string());
            ctx.output.kv(
                "Placed",
                &receipt.placed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
        }
    }
    Ok(())
}

fn show(store: &Storefront, ctx: &Context) {
    let view = store.view();
    if ctx.output.is_json() {
        ctx.output.json(&view);
    } else {
        render::storefront(&ctx.output, &view, store.catalog().brands());
    }
}

fn show_cart(store: &Storefront, ctx: &Context) -> Result<()> {
    let cart = store.cart();
    if ctx.output.is_json() {
        ctx.output.json(&cart);
        return Ok(());
    }
    render::cart(&ctx.output, &cart)?;
    Ok(())
}
