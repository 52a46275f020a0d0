//! Conversion from catalog entries to the user's personal copies.

use friluft_catalog::CatalogActivity;
use friluft_store::UserActivity;

/// Build the user's personal copy of a catalog entry.
///
/// Thresholds are copied verbatim at adoption time; later catalog changes
/// do not flow through to the stored copy.
pub fn to_user_activity(entry: &CatalogActivity, selected: bool) -> UserActivity {
    UserActivity {
        id: entry.id,
        name: entry.name.clone(),
        max_rain: entry.max_rain,
        max_temp: entry.max_temp,
        max_wind: entry.max_wind,
        min_rain: entry.min_rain,
        min_temp: entry.min_temp,
        min_wind: entry.min_wind,
        selected,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn running() -> CatalogActivity {
        CatalogActivity {
            id: 1,
            name: "Running".to_string(),
            max_rain: 10.0,
            max_temp: 30.0,
            max_wind: 5.0,
            min_rain: 0.0,
            min_temp: 15.0,
            min_wind: 0.0,
        }
    }

    #[test]
    fn test_copies_every_threshold() {
        let copy = to_user_activity(&running(), true);

        assert_eq!(copy.id, 1);
        assert_eq!(copy.name, "Running");
        assert_eq!(copy.max_rain, 10.0);
        assert_eq!(copy.max_temp, 30.0);
        assert_eq!(copy.max_wind, 5.0);
        assert_eq!(copy.min_rain, 0.0);
        assert_eq!(copy.min_temp, 15.0);
        assert_eq!(copy.min_wind, 0.0);
        assert!(copy.selected);
    }

    #[test]
    fn test_selected_flag_is_applied() {
        let swimming = CatalogActivity {
            id: 2,
            name: "Swimming".to_string(),
            max_rain: 10.0,
            max_temp: 35.0,
            max_wind: 20.0,
            min_rain: 5.0,
            min_temp: 20.0,
            min_wind: 2.0,
        };

        let copy = to_user_activity(&swimming, false);
        assert_eq!(copy.id, 2);
        assert_eq!(copy.min_rain, 5.0);
        assert!(!copy.selected);
    }
}
