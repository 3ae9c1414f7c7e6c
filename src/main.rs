use anyhow::Context;
use cart_total::utils::error::CartError;
use cart_total::utils::{logger, validation::Validate};
use cart_total::{CartPipeline, CheckoutEngine, CliConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cart-total");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.validate().and_then(|_| config.resolve()) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    if let Some(name) = &settings.name {
        tracing::info!("Cart: {}", name);
    }

    let pipeline = CartPipeline::new(settings, config.format);
    let engine = CheckoutEngine::new(pipeline);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match engine.run(&mut handle) {
        Ok(summary) => {
            tracing::info!("Final price: {:.2}", summary.final_price);
        }
        Err(e) => fail(e),
    }

    std::io::Write::flush(&mut handle).context("failed to flush standard output")?;
    Ok(())
}

fn fail(e: CartError) -> ! {
    tracing::error!(
        "Checkout failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
