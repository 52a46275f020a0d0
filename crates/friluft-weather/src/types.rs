//! Wire model for the Locationforecast EDR compact document.
//!
//! Every weather metric is optional: the service freely omits fields per
//! time-step, and the aggregated period blocks thin out towards the end of
//! the series (far-future steps only carry 6/12 hour summaries).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level forecast document for one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub geometry: PointGeometry,
    pub properties: ForecastProperties,
}

/// Location the forecast applies to, as `[longitude, latitude, altitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastProperties {
    pub meta: ForecastMeta,
    pub timeseries: Vec<ForecastStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMeta {
    pub units: ForecastUnits,
    pub updated_at: DateTime<Utc>,
}

/// Unit labels for the metrics present in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastUnits {
    #[serde(default)]
    pub air_pressure_at_sea_level: Option<String>,
    #[serde(default)]
    pub air_temperature: Option<String>,
    #[serde(default)]
    pub cloud_area_fraction: Option<String>,
    #[serde(default)]
    pub precipitation_amount: Option<String>,
    #[serde(default)]
    pub probability_of_precipitation: Option<String>,
    #[serde(default)]
    pub relative_humidity: Option<String>,
    #[serde(default)]
    pub wind_from_direction: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<String>,
    #[serde(default)]
    pub wind_speed_of_gust: Option<String>,
}

/// One point-in-time entry of the forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastStep {
    pub time: DateTime<Utc>,
    pub data: StepData,
}

impl ForecastStep {
    /// Instantaneous details, if the step carries any.
    pub fn instant_details(&self) -> Option<&InstantDetails> {
        self.data.instant.as_ref().and_then(|i| i.details.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepData {
    #[serde(default)]
    pub instant: Option<InstantBlock>,
    #[serde(default)]
    pub next_1_hours: Option<PeriodBlock>,
    #[serde(default)]
    pub next_6_hours: Option<PeriodBlock>,
    #[serde(default)]
    pub next_12_hours: Option<PeriodBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstantBlock {
    #[serde(default)]
    pub details: Option<InstantDetails>,
}

/// Instantaneous metrics at the step's timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstantDetails {
    #[serde(default)]
    pub air_pressure_at_sea_level: Option<f64>,
    #[serde(default)]
    pub air_temperature: Option<f64>,
    #[serde(default)]
    pub cloud_area_fraction: Option<f64>,
    #[serde(default)]
    pub cloud_area_fraction_high: Option<f64>,
    #[serde(default)]
    pub cloud_area_fraction_low: Option<f64>,
    #[serde(default)]
    pub cloud_area_fraction_medium: Option<f64>,
    #[serde(default)]
    pub dew_point_temperature: Option<f64>,
    #[serde(default)]
    pub fog_area_fraction: Option<f64>,
    #[serde(default)]
    pub relative_humidity: Option<f64>,
    #[serde(default)]
    pub wind_from_direction: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_speed_of_gust: Option<f64>,
}

/// Aggregated block covering the next 1, 6 or 12 hours after the step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodBlock {
    #[serde(default)]
    pub details: Option<PeriodDetails>,
    #[serde(default)]
    pub summary: Option<PeriodSummary>,
}

impl PeriodBlock {
    /// Precipitation amount for the period, if present.
    pub fn precipitation_amount(&self) -> Option<f64> {
        self.details.as_ref().and_then(|d| d.precipitation_amount)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodDetails {
    #[serde(default)]
    pub air_temperature_max: Option<f64>,
    #[serde(default)]
    pub air_temperature_min: Option<f64>,
    #[serde(default)]
    pub precipitation_amount: Option<f64>,
    #[serde(default)]
    pub precipitation_amount_max: Option<f64>,
    #[serde(default)]
    pub precipitation_amount_min: Option<f64>,
    #[serde(default)]
    pub probability_of_precipitation: Option<f64>,
    #[serde(default)]
    pub probability_of_thunder: Option<f64>,
    #[serde(default)]
    pub ultraviolet_index_clear_sky_max: Option<f64>,
}

/// Symbolic weather-condition code (e.g. `"partlycloudy_day"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub symbol_code: String,
}
