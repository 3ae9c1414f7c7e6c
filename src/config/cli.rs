use crate::config::toml_config::CartFile;
use crate::config::CartSettings;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cart-total")]
#[command(about = "Computes a shopping-cart total with discounts and tax")]
pub struct CliConfig {
    /// TOML cart file; flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Comma-separated item prices (default: built-in demo cart)
    #[arg(long, value_delimiter = ',')]
    pub prices: Vec<f64>,

    /// Tax rate as a fraction [default: 0.05]
    #[arg(long)]
    pub tax_rate: Option<f64>,

    /// Standard discount rate as a fraction [default: 0.10]
    #[arg(long)]
    pub discount_rate: Option<f64>,

    /// Report items priced at or above this value [default: 10.0]
    #[arg(long)]
    pub filter_threshold: Option<f64>,

    /// Upper bound of the special discount, in percent [default: 50.0]
    #[arg(long)]
    pub special_discount_cap: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the cart file (or the demo cart) with command-line overrides.
    pub fn resolve(&self) -> Result<CartSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading cart from: {}", path);
                CartFile::from_file(path)?.to_settings()
            }
            None => CartSettings::demo(),
        };

        if !self.prices.is_empty() {
            settings.prices = self.prices.clone();
        }
        if let Some(tax_rate) = self.tax_rate {
            settings.rules.tax_rate = tax_rate;
        }
        if let Some(discount_rate) = self.discount_rate {
            settings.rules.discount_rate = discount_rate;
        }
        if let Some(threshold) = self.filter_threshold {
            settings.rules.filter_threshold = threshold;
        }
        if let Some(cap) = self.special_discount_cap {
            settings.rules.special_discount_cap = cap;
        }

        tracing::debug!("Resolved settings: {:?}", settings);
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PricingRules;
    use crate::utils::error::CartError;

    #[test]
    fn test_no_arguments_resolves_to_demo_cart() {
        let config = CliConfig::try_parse_from(["cart-total"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.resolve().unwrap(), CartSettings::demo());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::try_parse_from([
            "cart-total",
            "--prices",
            "1.5,2.5,30",
            "--tax-rate",
            "0.2",
            "--special-discount-cap",
            "10",
            "--format",
            "json",
        ])
        .unwrap();

        let settings = config.resolve().unwrap();
        assert_eq!(settings.prices, vec![1.5, 2.5, 30.0]);
        assert_eq!(settings.rules.tax_rate, 0.2);
        assert_eq!(settings.rules.discount_rate, PricingRules::default().discount_rate);
        assert_eq!(settings.rules.special_discount_cap, 10.0);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_out_of_range_flag_fails_resolution() {
        let config =
            CliConfig::try_parse_from(["cart-total", "--discount-rate", "1.5"]).unwrap();
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, CartError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_non_numeric_price_is_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["cart-total", "--prices", "1,abc"]).is_err());
    }

    #[test]
    fn test_empty_config_path_fails_validation() {
        let config = CliConfig {
            config: Some(String::new()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
