//! Locationforecast HTTP client.

use friluft_core::{ApiError, Config, Coordinate};
use tracing::instrument;

use crate::types::ForecastResponse;

const FORECAST_PATH: &str = "/weatherapi/locationforecast/2.0/edr/collections/compact/position";

pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl ForecastClient {
    /// Build a client from the configured endpoint and HTTP settings.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.endpoints.weather_base_url.clone(),
            user_agent: config.http.user_agent.clone(),
        })
    }

    /// Fetch the full forecast series for a coordinate.
    ///
    /// The coordinate is sent as an EDR well-known-text point, longitude
    /// first.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, location: Coordinate) -> Result<ForecastResponse, ApiError> {
        let point = format!("POINT({} {})", location.longitude, location.latitude);
        let url = format!(
            "{}{}?coords={}",
            self.base_url,
            FORECAST_PATH,
            urlencoding::encode(&point)
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
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
