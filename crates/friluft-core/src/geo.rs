//! Geographic coordinate with the `"lat, lon"` text form used by the
//! stored location preference.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Fallback used when neither the device nor the user has ever
    /// produced a location (central Oslo).
    pub const OSLO: Coordinate = Coordinate {
        latitude: 59.9,
        longitude: 10.75,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid coordinate string: {0:?}")]
pub struct ParseCoordinateError(pub String);

impl std::str::FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses `"lat,lon"`, tolerating whitespace around either part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseCoordinateError(s.to_string()));
        };

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| ParseCoordinateError(s.to_string()))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| ParseCoordinateError(s.to_string()))?;

        Ok(Self {
            latitude,
            longitude,
        })
    }
}
