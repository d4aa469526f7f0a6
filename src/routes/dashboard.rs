use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::{charts::DummyData, entities::FlatFuelEntry, AppState};

const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

#[allow(clippy::unused_async)]
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelDataResponse {
    pub fuel_prices: Vec<FlatFuelEntry>,
    pub dummy_data: DummyData,
}

/// Always answers 200, upstream trouble only shows up as an empty `fuelPrices`.
pub async fn fuel_data(State(state): State<AppState>) -> Json<FuelDataResponse> {
    let fuel_prices = state.fuel_prices.get_fuel_prices().await;

    Json(FuelDataResponse {
        fuel_prices,
        dummy_data: DummyData::generate(),
    })
}
