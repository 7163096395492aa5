//! Location model for geocoded places

use serde::{Deserialize, Serialize};

/// A place resolved by the geocoding service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Resolved place name as returned by the service
    pub name: String,
    /// Country the place belongs to
    pub country: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String, country: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country,
        }
    }

    /// Format the place for the city-name field, e.g. "Paris, France"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}
