use anyhow::Context;
use clap::Parser;
use shopcart::cli::Cli;
use shopcart::config::Config;
use shopcart::logging::{default_log_path, init_tracing};
use shopcart::shutdown::ShutdownHandle;
use shopcart::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if cli.list_products {
        let symbol = &config.defaults.currency_symbol;
        for product in config.catalog().list_products() {
            println!(
                "{}\t{}\t{}",
                product.id,
                product.title,
                product.price.display_with(symbol)
            );
        }
        return Ok(());
    }

    let log_path = cli.log_file.unwrap_or_else(default_log_path);
    init_tracing(&config.logging.level, &log_path)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "shopcart starting");

    let shutdown = ShutdownHandle::install().context("registering signal handlers")?;
    runtime::run(&config, shutdown).context("running terminal UI")?;

    tracing::info!("shopcart exited");
    Ok(())
}
