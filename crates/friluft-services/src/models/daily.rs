//! Daily overview surface: today's top activity recommendations.

use std::sync::Arc;

use friluft_store::{Store, UserActivity};
use friluft_weather::{ForecastRepository, ForecastStep};
use tokio::sync::watch;

use crate::location::LocationResolver;
use crate::models::LoadPhase;
use crate::recommend::recommend_now;

/// Snapshot of the daily overview surface.
#[derive(Debug, Clone, Default)]
pub struct DailyState {
    pub phase: LoadPhase,
    pub recommendations: Vec<UserActivity>,
}

/// Drives the daily overview surface.
///
/// Recommendations are recomputed whenever the forecast series is replaced
/// or the stored activity set changes, so edits on other surfaces show up
/// here without an explicit reload.
pub struct DailyModel {
    inner: Arc<DailyInner>,
    observer: tokio::task::JoinHandle<()>,
}

struct DailyInner {
    resolver: LocationResolver,
    weather: Arc<ForecastRepository>,
    store: Store,
    state: watch::Sender<DailyState>,
}

impl DailyModel {
    pub fn new(resolver: LocationResolver, weather: Arc<ForecastRepository>, store: Store) -> Self {
        let (state, _) = watch::channel(DailyState::default());
        let inner = Arc::new(DailyInner {
            resolver,
            weather,
            store,
            state,
        });

        // Subscribe before spawning so mutations racing the spawn are
        // still observed.
        let forecasts = inner.weather.subscribe();
        let store_changes = inner.store.subscribe_changes();
        let observer = tokio::spawn(Self::observe(inner.clone(), forecasts, store_changes));
        Self { inner, observer }
    }

    async fn observe(
        inner: Arc<DailyInner>,
        mut forecasts: watch::Receiver<Vec<ForecastStep>>,
        mut store_changes: watch::Receiver<u64>,
    ) {
        loop {
            tokio::select! {
                changed = forecasts.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = store_changes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
            inner.recompute().await;
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DailyState {
        self.inner.state.borrow().clone()
    }

    /// Observe state replacements.
    pub fn subscribe(&self) -> watch::Receiver<DailyState> {
        self.inner.state.subscribe()
    }

    /// Resolve the location, fetch a fresh forecast and recompute.
    pub async fn refresh(&self) {
        self.inner.state.send_replace(DailyState::default());

        let location = self.inner.resolver.resolve().await;
        if let Err(error) = self.inner.weather.refresh(location).await {
            tracing::warn!("Forecast refresh failed: {}", error);
            self.inner.state.send_replace(DailyState {
                phase: LoadPhase::Error,
                ..DailyState::default()
            });
            return;
        }

        self.inner.recompute().await;
    }
}

impl DailyInner {
    async fn recompute(&self) {
        let steps = self.weather.latest();
        let activities = match self.store.activities().await {
            Ok(activities) => activities,
            Err(error) => {
                tracing::warn!("Could not load stored activities: {}", error);
                self.state.send_replace(DailyState {
                    phase: LoadPhase::Error,
                    ..DailyState::default()
                });
                return;
            }
        };

        self.state.send_replace(DailyState {
            phase: LoadPhase::Loaded,
            recommendations: recommend_now(&steps, &activities),
        });
    }
}

impl Drop for DailyModel {
    fn drop(&mut self) {
        self.observer.abort();
    }
}
