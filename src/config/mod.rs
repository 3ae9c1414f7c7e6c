#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, PricingRules};
use crate::domain::model::DEMO_PRICES;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_prices, validate_range, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Fully resolved cart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSettings {
    pub name: Option<String>,
    pub prices: Vec<f64>,
    pub rules: PricingRules,
}

impl CartSettings {
    pub fn new(prices: Vec<f64>, rules: PricingRules) -> Self {
        Self {
            name: None,
            prices,
            rules,
        }
    }

    /// The built-in demo cart with default pricing rules.
    pub fn demo() -> Self {
        Self::new(DEMO_PRICES.to_vec(), PricingRules::default())
    }
}

impl Default for CartSettings {
    fn default() -> Self {
        Self::demo()
    }
}

impl ConfigProvider for CartSettings {
    fn prices(&self) -> &[f64] {
        &self.prices
    }

    fn rules(&self) -> &PricingRules {
        &self.rules
    }
}

impl Validate for CartSettings {
    fn validate(&self) -> Result<()> {
        validate_prices("prices", &self.prices)?;
        validate_range("tax_rate", self.rules.tax_rate, 0.0, 1.0)?;
        validate_range("discount_rate", self.rules.discount_rate, 0.0, 1.0)?;
        validate_non_negative("filter_threshold", self.rules.filter_threshold)?;
        validate_range(
            "special_discount_cap",
            self.rules.special_discount_cap,
            0.0,
            100.0,
        )?;
        Ok(())
    }
}
