use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use metrics::{histogram, increment_counter};
use tracing::{debug, error, info, warn};

use crate::{
    cache::StringCache,
    entities::{flatten_records, FlatFuelEntry},
    upstream::FuelPriceClient,
};

pub const CACHE_KEY: &str = "FuelPriceData";
pub const CACHE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Read-through cache in front of the upstream fuel price api.
#[derive(Debug, Clone)]
pub struct FuelPriceService {
    client: FuelPriceClient,
    cache: Arc<dyn StringCache>,
}

impl FuelPriceService {
    pub const fn new(client: FuelPriceClient, cache: Arc<dyn StringCache>) -> Self {
        Self { client, cache }
    }

    /// Flattened fuel prices, from cache when possible. Any upstream failure
    /// is logged and results in an empty list.
    pub async fn get_fuel_prices(&self) -> Vec<FlatFuelEntry> {
        increment_counter!("fueltrack_fuel_data_request");

        if let Some(entries) = self.cached().await {
            debug!("Serving {} fuel prices from cache", entries.len());
            return entries;
        }

        increment_counter!("fueltrack_fuel_data_cache_miss");

        let start = Instant::now();
        let records = match self.client.fetch_records().await {
            Ok(records) => records,
            Err(err) => {
                increment_counter!("fueltrack_upstream_error", "kind" => err.kind());
                error!(error = %err, url = self.client.url(), "Failed to fetch fuel data");
                return Vec::new();
            }
        };
        histogram!("fueltrack_upstream_fetch_time", start.elapsed());

        let entries = flatten_records(&records);
        info!(
            "Fetched {} fuel records, {} prices",
            records.len(),
            entries.len()
        );

        self.store(&entries).await;

        entries
    }

    async fn cached(&self) -> Option<Vec<FlatFuelEntry>> {
        let cached = match self.cache.get_string(CACHE_KEY).await {
            Ok(cached) => cached?,
            Err(err) => {
                warn!(error = %err, "Fuel price cache read failed, fetching live");
                return None;
            }
        };

        if cached.is_empty() {
            return None;
        }

        match serde_json::from_str(&cached) {
            Ok(entries) => Some(entries),
            Err(err) => {
                warn!(error = %err, "Discarding unreadable cached fuel prices");
                None
            }
        }
    }

    async fn store(&self, entries: &[FlatFuelEntry]) {
        let value = match serde_json::to_string(entries) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "Failed to serialize fuel prices for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set_string(CACHE_KEY, value, CACHE_TTL).await {
            warn!(error = %err, "Failed to write fuel prices to cache");
        }
    }
}
