//! Home surface: the forecast series plus the local pollen forecast.

use std::sync::Arc;

use friluft_pollen::{PollenRegion, PollenRepository};
use friluft_weather::{ForecastRepository, ForecastStep};
use tokio::sync::watch;

use crate::location::LocationResolver;
use crate::models::LoadPhase;

/// Snapshot of the home surface.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub phase: LoadPhase,
    pub forecasts: Vec<ForecastStep>,
    pub pollen: Option<PollenRegion>,
}

/// Drives the home surface.
///
/// One refresh resolves the location and reloads both providers together.
/// A forecast failure empties the surface; a pollen failure only drops the
/// pollen card, since the forecast is still worth showing.
pub struct HomeModel {
    resolver: LocationResolver,
    weather: Arc<ForecastRepository>,
    pollen: Arc<PollenRepository>,
    state: watch::Sender<HomeState>,
}

impl HomeModel {
    pub fn new(
        resolver: LocationResolver,
        weather: Arc<ForecastRepository>,
        pollen: Arc<PollenRepository>,
    ) -> Self {
        let (state, _) = watch::channel(HomeState::default());
        Self {
            resolver,
            weather,
            pollen,
            state,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    /// Observe state replacements.
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    /// Resolve the location and reload both providers.
    pub async fn refresh(&self) {
        self.state.send_replace(HomeState::default());

        let location = self.resolver.resolve().await;
        let (weather, pollen) = tokio::join!(
            self.weather.refresh(location),
            self.pollen.refresh(location)
        );

        if let Err(error) = weather {
            tracing::warn!("Forecast refresh failed: {}", error);
            self.state.send_replace(HomeState {
                phase: LoadPhase::Error,
                ..HomeState::default()
            });
            return;
        }

        if let Err(error) = pollen {
            tracing::warn!("Pollen refresh failed: {}", error);
        }

        self.state.send_replace(HomeState {
            phase: LoadPhase::Loaded,
            forecasts: self.weather.latest(),
            pollen: self.pollen.current_region(),
        });
    }
}
