pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::CartFile, CartSettings};
pub use self::core::{engine::CheckoutEngine, pipeline::CartPipeline};
pub use domain::model::{CartSummary, OutputFormat, PricingRules};
pub use utils::error::{CartError, Result};
