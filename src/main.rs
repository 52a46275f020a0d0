use std::sync::Arc;

use anyhow::{Context, Result};
use friluft_catalog::{CatalogClient, CatalogRepository};
use friluft_core::Config;
use friluft_pollen::{PollenClient, PollenRepository};
use friluft_services::models::{DailyModel, HomeModel, LoadPhase};
use friluft_services::LocationResolver;
use friluft_store::{PreferencesStore, Store};
use friluft_weather::{ForecastClient, ForecastRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    friluft_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Data directory: {}", config.data_dir.display());

    // Local storage
    let store =
        Store::open(config.database_path()).context("Failed to open the activity database")?;
    let prefs = Arc::new(
        PreferencesStore::load(config.preferences_path()).context("Failed to load preferences")?,
    );

    // Remote providers
    let weather = Arc::new(ForecastRepository::new(ForecastClient::new(&config)?));
    let pollen = Arc::new(PollenRepository::new(PollenClient::new(&config)?));
    let catalog = Arc::new(CatalogRepository::new(CatalogClient::new(&config)?));

    println!("Friluft - Outdoor Activity Recommendations");

    // One refresh pass over the home surface
    let home = HomeModel::new(
        LocationResolver::new(prefs.clone()),
        weather.clone(),
        pollen.clone(),
    );
    home.refresh().await;

    let state = home.state();
    if state.phase == LoadPhase::Loaded {
        if let Some(details) = state.forecasts.first().and_then(|step| step.instant_details()) {
            println!("\nCurrent conditions:");
            if let Some(temperature) = details.air_temperature {
                println!("  Temperature: {} °C", temperature);
            }
            if let Some(wind) = details.wind_speed {
                println!("  Wind: {} m/s", wind);
            }
        }
        match state.pollen {
            Some(region) => {
                println!("  Pollen ({}): {}", region.display_name, region.text_forecast)
            }
            None => println!("  Pollen forecast unavailable"),
        }
    } else {
        println!("\nForecast unavailable, see the log for details");
    }

    // Recommendations from the same cached forecast
    let daily = DailyModel::new(
        LocationResolver::new(prefs.clone()),
        weather.clone(),
        store.clone(),
    );
    daily.refresh().await;

    let recommendations = daily.state().recommendations;
    if recommendations.is_empty() {
        println!("\nNo recommendations right now");
        if store.activities().await?.is_empty() && catalog.refresh().await.is_ok() {
            println!(
                "  {} activities are available to adopt in the catalog",
                catalog.latest().len()
            );
        }
    } else {
        println!("\nRecommended now:");
        for activity in &recommendations {
            println!("  - {}", activity.name);
        }
    }

    Ok(())
}
