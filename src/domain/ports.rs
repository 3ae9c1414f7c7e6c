use crate::domain::model::{CartSummary, PricingRules};
use crate::utils::error::Result;
use std::io::Write;

/// Maps one item price to its transformed price.
pub trait PriceTransform {
    fn apply(&self, price: f64) -> f64;
}

impl<F> PriceTransform for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, price: f64) -> f64 {
        self(price)
    }
}

pub trait ConfigProvider {
    fn prices(&self) -> &[f64];
    fn rules(&self) -> &PricingRules;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<f64>>;
    fn transform(&self, prices: Vec<f64>) -> Result<CartSummary>;
    fn load(&self, summary: &CartSummary, out: &mut dyn Write) -> Result<()>;
}
