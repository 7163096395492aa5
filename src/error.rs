//! Error types for the `skypanel` lookup flow

use thiserror::Error;

/// Failure classification for a single lookup invocation
#[derive(Error, Debug)]
pub enum LookupError {
    /// Submitted input was empty or whitespace-only
    #[error("empty location input")]
    EmptyInput,

    /// The geocoding service returned no match for the submitted name
    #[error("no match for \"{city}\"")]
    NotFound { city: String },

    /// The geocoding call failed at the transport, status, or payload level
    #[error("geocoding failed: {message}")]
    Network { message: String },

    /// The forecast call failed or the service rejected the request
    #[error("weather data unavailable: {message}")]
    WeatherUnavailable { message: String },
}

impl LookupError {
    /// Create a new not-found error carrying the submitted city text
    pub fn not_found<S: Into<String>>(city: S) -> Self {
        Self::NotFound { city: city.into() }
    }

    /// Create a new geocoding transport/payload error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new forecast-stage error
    pub fn weather_unavailable<S: Into<String>>(message: S) -> Self {
        Self::WeatherUnavailable {
            message: message.into(),
        }
    }

    /// Get the user-facing message for the error panel.
    ///
    /// `None` means the failure is silent and must leave the display
    /// untouched. Transport causes are kept out of the returned text; they
    /// are for logs only.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            LookupError::EmptyInput => None,
            LookupError::NotFound { city } => Some(format!(
                "Could not find \"{city}\". Please try another location."
            )),
            LookupError::Network { .. } | LookupError::WeatherUnavailable { .. } => Some(
                "Unable to fetch weather data. Please try again later.".to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = LookupError::not_found("Atlantis");
        assert!(matches!(not_found, LookupError::NotFound { .. }));

        let network = LookupError::network("connection refused");
        assert!(matches!(network, LookupError::Network { .. }));

        let unavailable = LookupError::weather_unavailable("error payload");
        assert!(matches!(unavailable, LookupError::WeatherUnavailable { .. }));
    }

    #[test]
    fn test_not_found_message_contains_city() {
        let err = LookupError::not_found("Zzzznotacity");
        let message = err.user_message().unwrap();
        assert!(message.contains("Zzzznotacity"));
        assert!(message.contains("try another location"));
    }

    #[test]
    fn test_transport_errors_share_generic_message() {
        let network = LookupError::network("dns failure: no such host");
        let unavailable = LookupError::weather_unavailable("HTTP 500");

        let expected = "Unable to fetch weather data. Please try again later.";
        assert_eq!(network.user_message().as_deref(), Some(expected));
        assert_eq!(unavailable.user_message().as_deref(), Some(expected));
    }

    #[test]
    fn test_cause_never_leaks_into_user_message() {
        let err = LookupError::network("secret internal detail");
        assert!(!err.user_message().unwrap().contains("secret"));
    }

    #[test]
    fn test_empty_input_is_silent() {
        assert!(LookupError::EmptyInput.user_message().is_none());
    }
}
