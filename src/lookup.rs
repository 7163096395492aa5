//! Two-stage lookup pipeline: place name to coordinates, coordinates to
//! current conditions
//!
//! Both stages call the Open-Meteo family of endpoints. The geocoding stage
//! uses exactly the first match; the forecast stage requests a fixed set of
//! current-condition fields. No retries and no caching: each lookup is one
//! sequential request chain.

use crate::config::ServicesConfig;
use crate::error::LookupError;
use crate::models::{CurrentConditions, Location};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = concat!("skypanel/", env!("CARGO_PKG_VERSION"));

/// Fields requested from the forecast service's `current` block
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m,surface_pressure";

/// Client for the geocode-then-forecast lookup chain
#[derive(Debug, Clone)]
pub struct LookupPipeline {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl LookupPipeline {
    /// Create a pipeline against the configured service endpoints
    pub fn new(config: &ServicesConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LookupError::network(e.to_string()))?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }

    /// Run the full lookup for a free-text city name.
    ///
    /// Rejects empty or whitespace-only input before any network activity.
    /// The two stages are strictly sequential; the forecast call needs the
    /// geocoded coordinates.
    #[instrument(skip(self))]
    pub async fn lookup(
        &self,
        city: &str,
    ) -> Result<(Location, CurrentConditions), LookupError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let location = self.geocode(city).await?;
        let conditions = self
            .current_conditions(location.latitude, location.longitude)
            .await?;

        Ok((location, conditions))
    }

    /// Resolve a city name to the first geocoding match
    #[instrument(skip(self))]
    pub async fn geocode(&self, city: &str) -> Result<Location, LookupError> {
        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.geocoding_url,
            urlencoding::encode(city)
        );
        debug!(%url, "geocoding request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "geocoding service returned failure status");
            return Err(LookupError::network(format!("HTTP {status}")));
        }

        let body: open_meteo::GeocodingResponse = response
            .json()
            .await
            .map_err(|e| LookupError::network(e.to_string()))?;

        if body.error {
            return Err(LookupError::network(
                body.reason
                    .unwrap_or_else(|| "geocoding request rejected".to_string()),
            ));
        }

        body.results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| LookupError::not_found(city))
    }

    /// Fetch current conditions for a coordinate pair
    #[instrument(skip(self))]
    pub async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current={}",
            self.forecast_url, latitude, longitude, CURRENT_FIELDS
        );
        debug!(%url, "forecast request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::weather_unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "forecast service returned failure status");
            return Err(LookupError::weather_unavailable(format!("HTTP {status}")));
        }

        let body: open_meteo::ForecastResponse = response
            .json()
            .await
            .map_err(|e| LookupError::weather_unavailable(e.to_string()))?;

        if body.error {
            return Err(LookupError::weather_unavailable(
                body.reason
                    .unwrap_or_else(|| "forecast request rejected".to_string()),
            ));
        }

        let current = body.current.ok_or_else(|| {
            LookupError::weather_unavailable("no current block in response")
        })?;

        Ok(CurrentConditions {
            temperature_c: current.temperature_2m,
            apparent_temperature_c: current.apparent_temperature,
            humidity_pct: current.relative_humidity_2m,
            wind_speed_kmh: current.wind_speed_10m,
            weather_code: current.weather_code,
            elevation_m: body.elevation,
            is_day: current.is_day != 0,
            surface_pressure_hpa: current.surface_pressure,
        })
    }
}

/// Open-Meteo wire structures
mod open_meteo {
    use crate::models::Location;
    use serde::Deserialize;

    /// Geocoding search response
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingMatch>>,
        #[serde(default)]
        pub error: bool,
        pub reason: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingMatch {
        pub latitude: f64,
        pub longitude: f64,
        pub name: String,
        pub country: Option<String>,
    }

    impl From<GeocodingMatch> for Location {
        fn from(result: GeocodingMatch) -> Self {
            Location {
                latitude: result.latitude,
                longitude: result.longitude,
                name: result.name,
                country: result.country.unwrap_or_else(|| "Unknown".to_string()),
            }
        }
    }

    /// Forecast response with the requested current-condition fields
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub elevation: f64,
        pub current: Option<CurrentData>,
        #[serde(default)]
        pub error: bool,
        pub reason: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        pub temperature_2m: f64,
        pub relative_humidity_2m: u8,
        pub apparent_temperature: f64,
        pub is_day: u8,
        pub weather_code: i32,
        pub wind_speed_10m: f64,
        pub surface_pressure: f64,
    }
}
