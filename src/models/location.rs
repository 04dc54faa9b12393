//! Resolved device positions.

use serde::{Deserialize, Serialize};

/// A resolved `{latitude, longitude}` pair, as handed over by a geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

pub const DEFAULT_LOCATION_NAME: &str = "Deutschland";

/// Fallback position (centre of Germany) when no geolocation is available.
pub const DEFAULT_LOCATION: Location = Location::new(51.1657, 10.4515);
