use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fueltrack::{
    cache::{MemoryCache, StringCache},
    router,
    service::{FuelPriceService, CACHE_KEY},
    upstream::FuelPriceClient,
    AppState,
};
use httpmock::{Method::GET, MockServer};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(server: &MockServer, cache: Arc<dyn StringCache>) -> Router {
    let client = FuelPriceClient::new(server.url("/data-catalogue"));
    router(AppState {
        fuel_prices: FuelPriceService::new(client, cache),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: Router) -> (StatusCode, Value) {
    let (status, body) = get(app, "/Dashboard/GetFuelData").await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn fuel_data_flattens_upstream_records() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/data-catalogue");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"series_type":"level","date":"2025-09-01","ron95":2.05,"ron97":0,"diesel":null,"diesel_eastmsia":2.15}]"#);
        })
        .await;

    let (status, body) = get_json(app(&upstream, Arc::new(MemoryCache::new(16)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["fuelPrices"],
        json!([{ "date": "2025-09-01T00:00:00", "fuel_type": "ron95", "price": 2.05 }])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn fuel_data_includes_dummy_charts() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/data-catalogue");
            then.status(200).body("[]");
        })
        .await;

    let (status, body) = get_json(app(&upstream, Arc::new(MemoryCache::new(16)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fuelPrices"], json!([]));
    assert_eq!(
        body["dummyData"]["comboChart"][0],
        json!({ "date": "2025-09-08", "dataset1_value": 48, "dataset2_value": 27, "dataset3_value": 53 })
    );
    assert_eq!(
        body["dummyData"]["verticalBarChart"][1],
        json!({ "month": "February", "dataset1_value": -32, "dataset2_value": 42 })
    );
    assert_eq!(
        body["dummyData"]["lineChart"][6],
        json!({ "month": "July", "dataset1_value": 68, "dataset2_value": 28 })
    );
}

#[tokio::test]
async fn upstream_server_error_still_answers_ok() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/data-catalogue");
            then.status(500).body("internal error");
        })
        .await;
    let cache = Arc::new(MemoryCache::new(16));

    let (status, body) = get_json(app(&upstream, cache.clone())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fuelPrices"], json!([]));
    assert_eq!(body["dummyData"]["comboChart"].as_array().map(Vec::len), Some(7));
    assert_eq!(cache.get_string(CACHE_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn truncated_upstream_body_still_answers_ok() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/data-catalogue");
            then.status(200).body(r#"[{"date":"2025-09-01","ron95":2.0"#);
        })
        .await;

    let (status, body) = get_json(app(&upstream, Arc::new(MemoryCache::new(16)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fuelPrices"], json!([]));
}

#[tokio::test]
async fn cached_prices_are_served_without_upstream_call() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/data-catalogue");
            then.status(200)
                .body(r#"[{"date":"2025-09-08","ron95":2.05,"ron97":3.18,"diesel":2.93}]"#);
        })
        .await;
    let cache: Arc<dyn StringCache> = Arc::new(MemoryCache::new(16));
    let app = app(&upstream, cache.clone());

    let (_, first) = get_json(app.clone()).await;
    let (_, second) = get_json(app).await;

    assert_eq!(first, second);
    assert_eq!(first["fuelPrices"].as_array().map(Vec::len), Some(3));
    let cached: Value = serde_json::from_str(&cache.get_string(CACHE_KEY).await.unwrap().unwrap()).unwrap();
    assert_eq!(cached, first["fuelPrices"]);
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn dashboard_page_is_served() {
    let upstream = MockServer::start_async().await;

    for uri in ["/", "/Dashboard", "/Dashboard/Index"] {
        let (status, body) = get(app(&upstream, Arc::new(MemoryCache::new(16))), uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(String::from_utf8(body).unwrap().contains("/Dashboard/GetFuelData"));
    }
}
