#![forbid(unsafe_code)]

use std::sync::Arc;

use fueltrack::{
    cache::NoopCache, config::Config, service::FuelPriceService, upstream::FuelPriceClient,
};
use tracing::info;

// Tool to check the upstream api: fetches live, skips the cache, prints the flattened prices.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    std::env::set_var(
        "RUST_LOG",
        std::env::var("RUST_LOG").unwrap_or_else(|_| String::from("info")),
    );

    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let service = FuelPriceService::new(
        FuelPriceClient::new(config.fuel_price_api_url),
        Arc::new(NoopCache),
    );

    let entries = service.get_fuel_prices().await;
    info!("Got {} fuel prices", entries.len());

    println!("{}", serde_json::to_string_pretty(&entries)?);

    Ok(())
}
