//! Weather data provider backed by the MET Locationforecast service.

pub mod client;
pub mod repository;
pub mod types;

pub use client::ForecastClient;
pub use repository::ForecastRepository;
pub use types::{
    ForecastMeta, ForecastProperties, ForecastResponse, ForecastStep, ForecastUnits, InstantBlock,
    InstantDetails, PeriodBlock, PeriodDetails, PeriodSummary, PointGeometry, StepData,
};
