use crate::config::CartSettings;
use crate::core::PricingRules;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartFile {
    pub cart: CartSection,
    pub pricing: Option<PricingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSection {
    pub name: Option<String>,
    pub prices: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingSection {
    pub tax_rate: Option<f64>,
    pub discount_rate: Option<f64>,
    pub filter_threshold: Option<f64>,
    pub special_discount_cap: Option<f64>,
}

impl PricingSection {
    /// Fills unset keys from the default rules.
    pub fn to_rules(&self) -> PricingRules {
        let defaults = PricingRules::default();
        PricingRules {
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
            discount_rate: self.discount_rate.unwrap_or(defaults.discount_rate),
            filter_threshold: self.filter_threshold.unwrap_or(defaults.filter_threshold),
            special_discount_cap: self
                .special_discount_cap
                .unwrap_or(defaults.special_discount_cap),
        }
    }
}

impl CartFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn to_settings(&self) -> CartSettings {
        let rules = self
            .pricing
            .as_ref()
            .map(PricingSection::to_rules)
            .unwrap_or_default();

        CartSettings {
            name: self.cart.name.clone(),
            prices: self.cart.prices.clone(),
            rules,
        }
    }
}

impl Validate for CartFile {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}
