use reqwest::Client;

use crate::{entities::FuelRecord, error::FetchError};

/// Public data.gov.my catalogue of weekly fuel prices.
pub const DEFAULT_FUEL_PRICE_API_URL: &str = "https://api.data.gov.my/data-catalogue?id=fuelprice";

/// Client for the upstream fuel price catalogue.
#[derive(Debug, Clone)]
pub struct FuelPriceClient {
    client: Client,
    url: String,
}

impl Default for FuelPriceClient {
    fn default() -> Self {
        Self::new(DEFAULT_FUEL_PRICE_API_URL)
    }
}

impl FuelPriceClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches every record in the catalogue. A single attempt, no retries.
    pub async fn fetch_records(&self) -> Result<Vec<FuelRecord>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        // the api answers `null` instead of `[]` when there is nothing to report
        let records: Option<Vec<FuelRecord>> = serde_json::from_str(&body)?;

        Ok(records.unwrap_or_default())
    }
}
