//! Cached forecast state shared across the recommendation surfaces.

use friluft_core::{ApiError, Coordinate};
use tokio::sync::watch;

use crate::client::ForecastClient;
use crate::types::ForecastStep;

/// Holds the latest fetched forecast series behind a watch channel.
///
/// The series is replaced wholesale on each successful refresh. A failed
/// refresh surfaces its error and leaves the previous series untouched, so
/// observers never see partial data.
pub struct ForecastRepository {
    client: ForecastClient,
    latest: watch::Sender<Vec<ForecastStep>>,
}

impl ForecastRepository {
    pub fn new(client: ForecastClient) -> Self {
        let (latest, _) = watch::channel(Vec::new());
        Self { client, latest }
    }

    /// Fetch a fresh series for the coordinate and publish it.
    pub async fn refresh(&self, location: Coordinate) -> Result<(), ApiError> {
        let response = self.client.fetch(location).await?;
        let steps = response.properties.timeseries;
        tracing::debug!(steps = steps.len(), "forecast series replaced");
        self.latest.send_replace(steps);
        Ok(())
    }

    /// Latest successfully fetched series; empty before the first refresh.
    pub fn latest(&self) -> Vec<ForecastStep> {
        self.latest.borrow().clone()
    }

    /// Observe series replacements.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ForecastStep>> {
        self.latest.subscribe()
    }
}
