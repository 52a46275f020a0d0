//! Activity catalog HTTP client.

use friluft_core::{ApiError, Config};
use tracing::instrument;

use crate::types::CatalogActivity;

pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client from the configured endpoint and HTTP settings.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.endpoints.catalog_base_url.clone(),
        })
    }

    /// Fetch the full catalog.
    #[instrument(skip(self), level = "info")]
    pub async fn list(&self) -> Result<Vec<CatalogActivity>, ApiError> {
        let url = format!("{}/api/activities", self.base_url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch a single catalog entry by id.
    #[instrument(skip(self), level = "info")]
    pub async fn by_id(&self, id: i64) -> Result<CatalogActivity, ApiError> {
        let url = format!("{}/api/activities/{}", self.base_url, id);

        let response = self.client.get(&url).send().await?;
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
