use serde::{Deserialize, Serialize};

/// A globally defined activity template with its default suitability
/// thresholds, as served by the catalog.
///
/// Thresholds follow the documented conventions: precipitation in mm,
/// temperature in °C, wind in m/s. The service does not promise
/// `min ≤ max`; that is only enforced once a user adopts a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogActivity {
    #[serde(rename = "ActivityID")]
    pub id: i64,
    #[serde(rename = "ActivityName")]
    pub name: String,
    #[serde(rename = "MaxRain")]
    pub max_rain: f64,
    #[serde(rename = "MaxTemp")]
    pub max_temp: f64,
    #[serde(rename = "MaxWind")]
    pub max_wind: f64,
    #[serde(rename = "MinRain")]
    pub min_rain: f64,
    #[serde(rename = "MinTemp")]
    pub min_temp: f64,
    #[serde(rename = "MinWind")]
    pub min_wind: f64,
}
