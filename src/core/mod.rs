pub mod calculator;
pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{CartSummary, OutputFormat, PricingRules};
pub use crate::domain::ports::{ConfigProvider, Pipeline, PriceTransform};
pub use crate::utils::error::Result;
