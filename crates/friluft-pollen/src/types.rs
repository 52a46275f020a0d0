use serde::{Deserialize, Serialize};

/// One administrative region's pollen forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollenRegion {
    pub display_name: String,
    pub id: String,
    pub text_forecast: String,
}

/// Result of a coordinate lookup: the municipality the coordinate falls in,
/// plus the full set of regional forecasts to resolve it against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionLookup {
    #[serde(rename = "kommune")]
    pub municipality: String,
    #[serde(rename = "pollen_data")]
    pub regions: Vec<PollenRegion>,
}

impl RegionLookup {
    /// The region entry covering the looked-up municipality.
    ///
    /// The service reports county-level display names ("Oslo og omegn",
    /// "Indre Østland"), so the entry is the one whose display name
    /// contains the municipality name, compared case-insensitively.
    pub fn matching_region(&self) -> Option<&PollenRegion> {
        let needle = self.municipality.to_lowercase();
        self.regions
            .iter()
            .find(|region| region.display_name.to_lowercase().contains(&needle))
    }
}
