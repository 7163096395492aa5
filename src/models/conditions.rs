//! Current weather conditions and display formatting

use serde::{Deserialize, Serialize};

/// Current conditions for one location, as fetched from the forecast
/// service. Immutable once built; holds no time series.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature in °C
    pub temperature_c: f64,
    /// Apparent ("feels like") temperature in °C
    pub apparent_temperature_c: f64,
    /// Relative humidity in percent
    pub humidity_pct: u8,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// WMO weather interpretation code
    pub weather_code: i32,
    /// Terrain elevation at the grid cell in meters
    pub elevation_m: f64,
    /// Whether the location is currently in daylight
    pub is_day: bool,
    /// Surface air pressure in hPa
    pub surface_pressure_hpa: f64,
}

impl CurrentConditions {
    /// Temperature rounded to the nearest whole degree for display
    #[must_use]
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature_c.round() as i64
    }

    /// Format the main temperature field; the unit lives in the host markup
    #[must_use]
    pub fn format_temperature(&self) -> String {
        self.rounded_temperature().to_string()
    }

    /// Format the feels-like field with unit
    #[must_use]
    pub fn format_feels_like(&self) -> String {
        format!("{}°C", self.apparent_temperature_c.round() as i64)
    }

    /// Format humidity with unit
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{}%", self.humidity_pct)
    }

    /// Format wind speed at service precision with unit
    #[must_use]
    pub fn format_wind_speed(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh)
    }

    /// Format elevation at service precision with unit
    #[must_use]
    pub fn format_elevation(&self) -> String {
        format!("{} m", self.elevation_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurrentConditions {
        CurrentConditions {
            temperature_c: 15.4,
            apparent_temperature_c: 13.6,
            humidity_pct: 65,
            wind_speed_kmh: 12.5,
            weather_code: 2,
            elevation_m: 35.0,
            is_day: true,
            surface_pressure_hpa: 1013.2,
        }
    }

    #[test]
    fn test_temperature_rounds_to_whole_degrees() {
        let mut conditions = sample();
        assert_eq!(conditions.format_temperature(), "15");

        conditions.temperature_c = 15.5;
        assert_eq!(conditions.format_temperature(), "16");

        conditions.temperature_c = -3.4;
        assert_eq!(conditions.format_temperature(), "-3");
    }

    #[test]
    fn test_feels_like_carries_unit() {
        assert_eq!(sample().format_feels_like(), "14°C");
    }

    #[test]
    fn test_service_precision_fields_keep_their_precision() {
        let conditions = sample();
        assert_eq!(conditions.format_humidity(), "65%");
        assert_eq!(conditions.format_wind_speed(), "12.5 km/h");
        assert_eq!(conditions.format_elevation(), "35 m");
    }

    #[test]
    fn test_whole_number_wind_has_no_trailing_decimals() {
        let mut conditions = sample();
        conditions.wind_speed_kmh = 12.0;
        assert_eq!(conditions.format_wind_speed(), "12 km/h");
    }
}
