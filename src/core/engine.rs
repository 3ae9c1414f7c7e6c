use crate::core::{CartSummary, Pipeline};
use crate::utils::error::Result;
use std::io::Write;

pub struct CheckoutEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CheckoutEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<CartSummary> {
        tracing::info!("Starting checkout...");

        let prices = self.pipeline.extract()?;
        tracing::info!("Extracted {} prices", prices.len());

        let summary = self.pipeline.transform(prices)?;
        tracing::info!(
            "Computed final price {:.2} for {} items",
            summary.final_price,
            summary.item_count
        );

        self.pipeline.load(&summary, out)?;
        tracing::info!("Report written");

        Ok(summary)
    }
}
