//! Pollen service HTTP client.

use friluft_core::{ApiError, Config, Coordinate};
use tracing::instrument;

use crate::types::{PollenRegion, RegionLookup};

pub struct PollenClient {
    client: reqwest::Client,
    base_url: String,
}

impl PollenClient {
    /// Build a client from the configured endpoint and HTTP settings.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.endpoints.pollen_base_url.clone(),
        })
    }

    /// List every region the service carries forecasts for.
    #[instrument(skip(self), level = "info")]
    pub async fn regions(&self) -> Result<Vec<PollenRegion>, ApiError> {
        let url = format!("{}/pollen/regions", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Look up the municipality and regional forecasts for a coordinate.
    ///
    /// A coordinate outside the service's coverage comes back as a 400.
    #[instrument(skip(self), level = "info")]
    pub async fn lookup(&self, location: Coordinate) -> Result<RegionLookup, ApiError> {
        let url = format!("{}/pollen", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("lat", location.latitude), ("lon", location.longitude)])
            .header("Accept", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Decode(format!("JSON parse error: {}", e)))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, text))
        }
    }
}
