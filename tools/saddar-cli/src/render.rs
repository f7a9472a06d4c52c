//! Terminal rendering of storefront views.

use console::style;
use saddar_ai::SalesPoint;
use saddar_commerce::prelude::*;
use saddar_storefront::StorefrontView;

use crate::output::{pad_columns, stock_badge, Output};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 46;
const BRAND_WIDTH: usize = 11;
const PRICE_WIDTH: usize = 18;

/// Full storefront frame: optional home sections, heading, product grid.
pub fn storefront(out: &Output, view: &StorefrontView, brands: &[Brand]) {
    if view.is_home {
        out.header("Market Insight");
        out.line(&format!("  \"{}\"", style(&view.insight).italic()));
        out.header("Partner Brands");
        out.line(&format!("  {}", brand_names(brands)));
    }

    out.header(&view.title.to_uppercase());
    out.caption(&view.caption);
    products(out, &view.products);
    if view.cart_badge > 0 {
        out.caption(&format!("Cart: {} item(s)", view.cart_badge));
    }
}

pub fn products(out: &Output, products: &[Product]) {
    for product in products {
        out.line(&product_line(product));
    }
}

/// One product row: id, name, brand, price per unit, stock, badges.
pub fn product_line(product: &Product) -> String {
    let price = format!("{} / {}", product.price, product.unit);
    let mut line = format!(
        "  {}  {}",
        pad_columns(
            &[product.id.as_str(), product.name.as_str(), product.brand.as_str(), price.as_str()],
            &[ID_WIDTH, NAME_WIDTH, BRAND_WIDTH, PRICE_WIDTH],
        ),
        stock_badge(product.stock_level())
    );
    for badge in badges(product) {
        line.push_str("  ");
        line.push_str(&style(badge).cyan().to_string());
    }
    line
}

fn badges(product: &Product) -> Vec<String> {
    let mut out = Vec::new();
    if product.is_popular {
        out.push("Popular".to_string());
    }
    if product.is_new {
        out.push("New".to_string());
    }
    if let Some(discount) = &product.bulk_discount {
        out.push(discount.clone());
    }
    out
}

pub fn brand_names(brands: &[Brand]) -> String {
    brands
        .iter()
        .map(|b| b.name.to_uppercase())
        .collect::<Vec<_>>()
        .join("  ·  ")
}

/// The cart drawer.
pub fn cart(out: &Output, cart: &Cart) -> Result<(), CommerceError> {
    out.header("Your Cart");
    if cart.is_empty() {
        out.caption("Your cart is empty. Add something with `add <id>`.");
        return Ok(());
    }
    for entry in cart.entries() {
        out.line(&format!(
            "  {}  x{:<4} {}",
            pad_columns(
                &[entry.product.id.as_str(), entry.product.name.as_str()],
                &[ID_WIDTH, NAME_WIDTH],
            ),
            entry.quantity,
            entry.line_total()?
        ));
    }
    let pricing = cart.calculate_pricing()?;
    out.kv("Subtotal", &pricing.subtotal.to_string());
    out.kv(
        "Delivery",
        if pricing.has_free_delivery() {
            "FREE"
        } else {
            "charged at dispatch"
        },
    );
    out.kv("Total", &style(pricing.grand_total.to_string()).bold().to_string());
    Ok(())
}

/// Horizontal bar chart, one row per day, scaled to `width` columns.
pub fn sales_chart(sales: &[SalesPoint], width: usize) -> Vec<String> {
    let max = sales.iter().map(|p| p.sales).max().unwrap_or(0);
    let label_width = sales.iter().map(|p| p.name.len()).max().unwrap_or(0);
    sales
        .iter()
        .map(|point| {
            let len = if max == 0 {
                0
            } else {
                // Bounded by width; the product fits in u128.
                (u128::from(point.sales) * width as u128 / u128::from(max)) as usize
            };
            format!(
                "{:label_width$} │{} {}",
                point.name,
                "█".repeat(len),
                point.sales,
                label_width = label_width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use saddar_ai::mock_week;

    #[test]
    fn test_chart_scales_to_peak() {
        let lines = sales_chart(&mock_week(), 10);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "Sat │██████████ 6390");
        assert!(lines[3].starts_with("Thu │████ "));
    }

    #[test]
    fn test_chart_handles_all_zero() {
        let lines = sales_chart(&[SalesPoint::new("Mon", 0)], 10);
        assert_eq!(lines, vec!["Mon │ 0"]);
    }

    #[test]
    fn test_product_line_shows_price_and_stock() {
        console::set_colors_enabled(false);
        let catalog = Catalog::seed();
        let line = product_line(catalog.get(&ProductId::new("1")).unwrap());
        assert!(line.contains("Fresh Milk 1L Pack of 12"));
        assert!(line.contains("Rs. 2,400 / Carton"));
        assert!(line.contains("45 left"));
    }

    #[test]
    fn test_brand_names() {
        let brands = vec![Brand::new("Nestle", ""), Brand::new("Bata", "")];
        assert_eq!(brand_names(&brands), "NESTLE  ·  BATA");
    }
}
