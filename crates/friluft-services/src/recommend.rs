//! Ranking of the user's activities against the current forecast.

use friluft_store::UserActivity;
use friluft_weather::types::ForecastStep;

use crate::suitability::is_suitable;

/// Maximum entries surfaced on the daily overview.
pub const MAX_DAILY_RECOMMENDATIONS: usize = 5;

/// Rank the user's activities against the present-moment time-step.
///
/// Evaluates suitability against the first step of the series only,
/// favourites (`selected == true`) sort first, and the result is capped
/// at [`MAX_DAILY_RECOMMENDATIONS`]. An empty series yields an empty
/// list.
pub fn recommend_now(steps: &[ForecastStep], activities: &[UserActivity]) -> Vec<UserActivity> {
    let Some(current) = steps.first() else {
        return Vec::new();
    };

    let mut suitable: Vec<UserActivity> = activities
        .iter()
        .filter(|activity| is_suitable(activity, current))
        .cloned()
        .collect();

    // Stable sort: both groups keep their incoming relative order
    suitable.sort_by_key(|activity| !activity.selected);
    suitable.truncate(MAX_DAILY_RECOMMENDATIONS);
    suitable
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::{TimeZone, Utc};
    use friluft_weather::types::{InstantBlock, InstantDetails, StepData};

    fn activity(id: i64, name: &str, selected: bool) -> UserActivity {
        UserActivity {
            id,
            name: name.to_string(),
            max_rain: 10.0,
            max_temp: 30.0,
            max_wind: 15.0,
            min_rain: 0.0,
            min_temp: -10.0,
            min_wind: 0.0,
            selected,
        }
    }

    fn step_with_temperature(temperature: f64) -> ForecastStep {
        ForecastStep {
            time: Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap(),
            data: StepData {
                instant: Some(InstantBlock {
                    details: Some(InstantDetails {
                        air_temperature: Some(temperature),
                        ..InstantDetails::default()
                    }),
                }),
                ..StepData::default()
            },
        }
    }

    #[test]
    fn test_empty_series_yields_nothing() {
        let activities = vec![activity(1, "Running", true)];
        assert!(recommend_now(&[], &activities).is_empty());
    }

    #[test]
    fn test_only_first_step_is_evaluated() {
        // First step is fine, second would rule everything out
        let steps = vec![step_with_temperature(20.0), step_with_temperature(99.0)];
        let activities = vec![activity(1, "Running", false)];

        let ranked = recommend_now(&steps, &activities);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_unsuitable_activities_are_filtered() {
        let steps = vec![step_with_temperature(35.0)];
        let mut hiking = activity(1, "Hiking", false);
        hiking.max_temp = 30.0;
        let mut sauna_walk = activity(2, "Beach day", false);
        sauna_walk.max_temp = 40.0;

        let ranked = recommend_now(&steps, &[hiking, sauna_walk]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, 2);
    }

    #[test]
    fn test_selected_sort_first_keeping_group_order() {
        let steps = vec![step_with_temperature(20.0)];
        let activities = vec![
            activity(1, "Walking", false),
            activity(2, "Climbing", true),
            activity(3, "Rowing", false),
            activity(4, "Cycling", true),
        ];

        let ranked = recommend_now(&steps, &activities);
        let ids: Vec<i64> = ranked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_result_is_capped_at_five() {
        let steps = vec![step_with_temperature(20.0)];
        let activities: Vec<UserActivity> = (1..=8)
            .map(|id| activity(id, "Activity", id % 2 == 0))
            .collect();

        let ranked = recommend_now(&steps, &activities);
        assert_eq!(ranked.len(), MAX_DAILY_RECOMMENDATIONS);
        // Selected ids 2,4,6,8 first, then the first unselected
        let ids: Vec<i64> = ranked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4, 6, 8, 1]);
    }
}
