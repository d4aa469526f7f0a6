#![forbid(unsafe_code)]

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use fueltrack::{
    config::Config, router, service::FuelPriceService, upstream::FuelPriceClient, AppState,
};
use tracing::info;

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
    info!(
        "Using {:?} cache, upstream {}",
        config.cache_backend, config.fuel_price_api_url
    );

    let client = FuelPriceClient::new(config.fuel_price_api_url.clone());
    let state = AppState {
        fuel_prices: FuelPriceService::new(client, config.build_cache()),
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = router(state)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);

    info!("listening on {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
