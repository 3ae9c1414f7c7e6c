use crate::core::calculator::{
    apply_discount, apply_special_discount, calculate_factorial, calculate_total,
    filter_at_or_above, special_discount_percent, PercentageDiscount, DEFAULT_TAX_RATE,
};
use crate::core::report;
use crate::core::{CartSummary, ConfigProvider, OutputFormat, Pipeline};
use crate::utils::error::{CartError, Result};
use std::io::Write;

pub struct CartPipeline<C: ConfigProvider> {
    config: C,
    format: OutputFormat,
}

impl<C: ConfigProvider> CartPipeline<C> {
    pub fn new(config: C, format: OutputFormat) -> Self {
        Self { config, format }
    }
}

impl<C: ConfigProvider> Pipeline for CartPipeline<C> {
    fn extract(&self) -> Result<Vec<f64>> {
        let prices = self.config.prices().to_vec();
        tracing::debug!("Loaded {} prices: {:?}", prices.len(), prices);
        Ok(prices)
    }

    fn transform(&self, prices: Vec<f64>) -> Result<CartSummary> {
        let rules = *self.config.rules();
        let item_count = prices.len();

        let filtered_prices = filter_at_or_above(&prices, rules.filter_threshold);
        tracing::debug!(
            "{} items at or above {:.2}",
            filtered_prices.len(),
            rules.filter_threshold
        );

        // Discounting works on a copy; the original list is kept for the report.
        let working_set = prices.clone();
        let discounted_prices =
            apply_discount(&working_set, &PercentageDiscount::new(rules.discount_rate));

        let subtotal = calculate_total(&discounted_prices, DEFAULT_TAX_RATE)?;
        let total_with_tax = calculate_total(&discounted_prices, rules.tax_rate)?;
        tracing::debug!("Subtotal {:.4}, with tax {:.4}", subtotal, total_with_tax);

        let n = u32::try_from(item_count).unwrap_or(u32::MAX);
        let factorial = match calculate_factorial(n) {
            Ok(value) => Some(value),
            Err(CartError::FactorialOverflow { n }) => {
                tracing::warn!(
                    "Factorial of {} overflows, special discount capped at {:.2}%",
                    n,
                    rules.special_discount_cap
                );
                None
            }
            Err(e) => return Err(e),
        };

        let special_discount = special_discount_percent(factorial, rules.special_discount_cap);
        let final_price = apply_special_discount(total_with_tax, special_discount);

        Ok(CartSummary {
            original_prices: prices,
            filtered_prices,
            discounted_prices,
            item_count,
            subtotal,
            total_with_tax,
            factorial,
            special_discount_percent: special_discount,
            final_price,
            rules,
        })
    }

    fn load(&self, summary: &CartSummary, out: &mut dyn Write) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => report::render_text(summary),
            OutputFormat::Json => report::render_json(summary)?,
        };

        tracing::debug!("Writing {} bytes of {:?} output", rendered.len(), self.format);
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
