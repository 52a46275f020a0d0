//! Weather suitability checks for one activity at one time-step.

use friluft_store::UserActivity;
use friluft_weather::types::ForecastStep;

/// Decide whether conditions at a time-step fit an activity's thresholds.
///
/// Missing data never disqualifies: a step without an instantaneous
/// details block is suitable for every activity, and each individual
/// check passes when its reading is absent. Callers that want stricter
/// handling of data gaps must filter the series beforehand.
///
/// Total over every combination of absent optional fields.
pub fn is_suitable(activity: &UserActivity, step: &ForecastStep) -> bool {
    let Some(details) = step.instant_details() else {
        return true;
    };

    temperature_check(activity, details.air_temperature)
        && precipitation_check(activity, step)
        && wind_check(activity, details.wind_speed, details.wind_speed_of_gust)
}

fn temperature_check(activity: &UserActivity, temperature: Option<f64>) -> bool {
    match temperature {
        Some(t) => t >= activity.min_temp && t <= activity.max_temp,
        None => true,
    }
}

/// The wind check runs against a single effective speed: the max of
/// whichever of {sustained, gust} the step reports.
fn wind_check(activity: &UserActivity, wind_speed: Option<f64>, gust_speed: Option<f64>) -> bool {
    let effective = match (wind_speed, gust_speed) {
        (Some(wind), Some(gust)) => Some(wind.max(gust)),
        (Some(wind), None) => Some(wind),
        (None, Some(gust)) => Some(gust),
        (None, None) => None,
    };
    match effective {
        Some(speed) => speed >= activity.min_wind && speed <= activity.max_wind,
        None => true,
    }
}

fn precipitation_check(activity: &UserActivity, step: &ForecastStep) -> bool {
    match average_precipitation(step) {
        Some(mean) => mean >= activity.min_rain && mean <= activity.max_rain,
        None => true,
    }
}

/// Mean of the precipitation amounts present across the 1, 6 and 12 hour
/// period blocks. `None` when no block reports an amount.
fn average_precipitation(step: &ForecastStep) -> Option<f64> {
    let amounts: Vec<f64> = [
        step.data.next_1_hours.as_ref(),
        step.data.next_6_hours.as_ref(),
        step.data.next_12_hours.as_ref(),
    ]
    .into_iter()
    .flatten()
    .filter_map(|block| block.precipitation_amount())
    .collect();

    if amounts.is_empty() {
        None
    } else {
        Some(amounts.iter().sum::<f64>() / amounts.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::{TimeZone, Utc};
    use friluft_weather::types::{
        InstantBlock, InstantDetails, PeriodBlock, PeriodDetails, StepData,
    };

    fn activity() -> UserActivity {
        UserActivity {
            id: 1,
            name: "Running".to_string(),
            max_rain: 10.0,
            max_temp: 30.0,
            max_wind: 5.0,
            min_rain: 0.0,
            min_temp: 15.0,
            min_wind: 0.0,
            selected: false,
        }
    }

    fn step(data: StepData) -> ForecastStep {
        ForecastStep {
            time: Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap(),
            data,
        }
    }

    fn instant(
        temperature: Option<f64>,
        wind: Option<f64>,
        gust: Option<f64>,
    ) -> Option<InstantBlock> {
        Some(InstantBlock {
            details: Some(InstantDetails {
                air_temperature: temperature,
                wind_speed: wind,
                wind_speed_of_gust: gust,
                ..InstantDetails::default()
            }),
        })
    }

    fn precipitation(amount: f64) -> Option<PeriodBlock> {
        Some(PeriodBlock {
            details: Some(PeriodDetails {
                precipitation_amount: Some(amount),
                ..PeriodDetails::default()
            }),
            summary: None,
        })
    }

    #[test]
    fn test_step_without_details_suits_everything() {
        let bare = step(StepData::default());
        assert!(is_suitable(&activity(), &bare));

        // Period data alone is not enough to trigger the checks
        let precip_only = step(StepData {
            next_1_hours: precipitation(99.0),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &precip_only));
    }

    #[test]
    fn test_good_conditions_are_suitable() {
        let good = step(StepData {
            instant: instant(Some(20.0), Some(3.0), Some(4.0)),
            next_1_hours: precipitation(2.0),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &good));
    }

    #[test]
    fn test_temperature_outside_window_is_unsuitable() {
        let hot = step(StepData {
            instant: instant(Some(35.0), Some(3.0), Some(4.0)),
            next_1_hours: precipitation(2.0),
            ..StepData::default()
        });
        assert!(!is_suitable(&activity(), &hot));

        let cold = step(StepData {
            instant: instant(Some(2.0), None, None),
            ..StepData::default()
        });
        assert!(!is_suitable(&activity(), &cold));
    }

    #[test]
    fn test_missing_temperature_passes() {
        let windy_only = step(StepData {
            instant: instant(None, Some(3.0), None),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &windy_only));
    }

    #[test]
    fn test_effective_wind_is_max_of_present_speeds() {
        // Gust above the limit dominates an acceptable sustained speed
        let gusty = step(StepData {
            instant: instant(Some(20.0), Some(3.0), Some(9.0)),
            ..StepData::default()
        });
        assert!(!is_suitable(&activity(), &gusty));

        // Only sustained speed present
        let sustained = step(StepData {
            instant: instant(Some(20.0), Some(4.5), None),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &sustained));

        // Only gust present, inside the window
        let gust_only = step(StepData {
            instant: instant(Some(20.0), None, Some(4.5)),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &gust_only));
    }

    #[test]
    fn test_precipitation_uses_mean_of_present_blocks() {
        // (3 + 9) / 2 = 6, within 0..10
        let moderate = step(StepData {
            instant: instant(Some(20.0), None, None),
            next_1_hours: precipitation(3.0),
            next_6_hours: precipitation(9.0),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &moderate));

        // (6 + 30) / 2 = 18, above max_rain
        let soaked = step(StepData {
            instant: instant(Some(20.0), None, None),
            next_6_hours: precipitation(6.0),
            next_12_hours: precipitation(30.0),
            ..StepData::default()
        });
        assert!(!is_suitable(&activity(), &soaked));
    }

    #[test]
    fn test_precipitation_below_minimum_is_unsuitable() {
        let mut rainy = activity();
        rainy.min_rain = 5.0; // wants real rain

        let dry = step(StepData {
            instant: instant(Some(20.0), None, None),
            next_1_hours: precipitation(1.0),
            ..StepData::default()
        });
        assert!(!is_suitable(&rainy, &dry));
    }

    #[test]
    fn test_no_precipitation_blocks_passes() {
        let no_periods = step(StepData {
            instant: instant(Some(20.0), Some(3.0), None),
            ..StepData::default()
        });
        assert!(is_suitable(&activity(), &no_periods));
    }

    #[test]
    fn test_average_precipitation_values() {
        let three_blocks = step(StepData {
            next_1_hours: precipitation(1.0),
            next_6_hours: precipitation(2.0),
            next_12_hours: precipitation(6.0),
            ..StepData::default()
        });
        assert_eq!(average_precipitation(&three_blocks), Some(3.0));

        let empty = step(StepData::default());
        assert_eq!(average_precipitation(&empty), None);

        // A block without a details amount contributes nothing
        let hollow = step(StepData {
            next_1_hours: Some(PeriodBlock::default()),
            next_6_hours: precipitation(4.0),
            ..StepData::default()
        });
        assert_eq!(average_precipitation(&hollow), Some(4.0));
    }
}
