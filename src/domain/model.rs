use serde::{Deserialize, Serialize};

/// Prices of the built-in demo cart.
pub const DEMO_PRICES: [f64; 6] = [5.50, 12.00, 8.75, 25.00, 4.99, 50.00];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Fraction in [0, 1].
    pub tax_rate: f64,
    /// Standard discount applied to every item, fraction in [0, 1].
    pub discount_rate: f64,
    /// Items priced at or above this are reported as high-value.
    pub filter_threshold: f64,
    /// Upper bound of the special discount, in percent.
    pub special_discount_cap: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tax_rate: 0.05,
            discount_rate: 0.10,
            filter_threshold: 10.0,
            special_discount_cap: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub original_prices: Vec<f64>,
    pub filtered_prices: Vec<f64>,
    pub discounted_prices: Vec<f64>,
    pub item_count: usize,
    pub subtotal: f64,
    pub total_with_tax: f64,
    /// `None` when the factorial of `item_count` does not fit in `u128`.
    pub factorial: Option<u128>,
    pub special_discount_percent: f64,
    pub final_price: f64,
    pub rules: PricingRules,
}
