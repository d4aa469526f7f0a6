#![forbid(unsafe_code)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

use axum::{routing::get, Router};
use service::FuelPriceService;
use tower_http::trace::TraceLayer;

pub mod cache;
pub mod charts;
pub mod config;
pub mod entities;
pub mod error;
pub mod routes;
pub mod service;
pub mod upstream;

#[derive(Debug, Clone)]
pub struct AppState {
    pub fuel_prices: FuelPriceService,
}

/// Dashboard routes. The binary adds the metrics endpoint on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/Dashboard", get(routes::dashboard::index))
        .route("/Dashboard/Index", get(routes::dashboard::index))
        .route("/Dashboard/GetFuelData", get(routes::dashboard::fuel_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
