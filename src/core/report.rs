use crate::domain::model::CartSummary;
use crate::utils::error::Result;

/// `[5.50, 12.00]`
pub fn format_prices(prices: &[f64]) -> String {
    let items: Vec<String> = prices.iter().map(|price| format!("{:.2}", price)).collect();
    format!("[{}]", items.join(", "))
}

/// A fraction as a percent with at most two decimals: `0.075` -> `7.5`.
pub fn format_percent(rate: f64) -> String {
    let formatted = format!("{:.2}", rate * 100.0);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

pub fn render_text(summary: &CartSummary) -> String {
    let rules = &summary.rules;
    let factorial = match summary.factorial {
        Some(value) => value.to_string(),
        None => "exceeds u128".to_string(),
    };

    let lines = [
        format!("Original prices: {}", format_prices(&summary.original_prices)),
        format!(
            "Items at or above {:.2}: {}",
            rules.filter_threshold,
            format_prices(&summary.filtered_prices)
        ),
        format!(
            "Discounted prices ({}% off): {}",
            format_percent(rules.discount_rate),
            format_prices(&summary.discounted_prices)
        ),
        format!("Subtotal: {:.2}", summary.subtotal),
        format!(
            "Total with {}% tax: {:.2}",
            format_percent(rules.tax_rate),
            summary.total_with_tax
        ),
        format!("Item count: {}", summary.item_count),
        format!("Factorial of item count: {}", factorial),
        format!("Special discount: {:.2}%", summary.special_discount_percent),
        format!("Final price: {:.2}", summary.final_price),
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

pub fn render_json(summary: &CartSummary) -> Result<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}
