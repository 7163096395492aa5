//! WMO weather interpretation codes
//!
//! Maps the forecast service's integer weather codes to a human-readable
//! description and an icon glyph key for the host page's icon library.

/// Description and icon glyph for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Fallback entry for codes absent from the table
pub const UNKNOWN: CodeEntry = CodeEntry {
    description: "Unknown",
    icon: "help-circle",
};

const fn entry(description: &'static str, icon: &'static str) -> CodeEntry {
    CodeEntry { description, icon }
}

/// Look up the display entry for a weather code.
///
/// Total over all integers: codes outside the table return [`UNKNOWN`].
#[must_use]
pub fn describe(code: i32) -> CodeEntry {
    match code {
        0 => entry("Clear sky", "sun"),
        1 => entry("Mainly clear", "sun-dim"),
        2 => entry("Partly cloudy", "cloud-sun"),
        3 => entry("Overcast", "cloud"),
        45 => entry("Foggy", "cloud-fog"),
        48 => entry("Depositing rime fog", "cloud-fog"),
        51 => entry("Light drizzle", "cloud-drizzle"),
        53 => entry("Moderate drizzle", "cloud-drizzle"),
        55 => entry("Dense drizzle", "cloud-drizzle"),
        56 => entry("Light freezing drizzle", "snowflake"),
        57 => entry("Dense freezing drizzle", "snowflake"),
        61 => entry("Slight rain", "cloud-rain"),
        63 => entry("Moderate rain", "cloud-rain"),
        65 => entry("Heavy rain", "cloud-lightning"),
        66 => entry("Light freezing rain", "snowflake"),
        67 => entry("Heavy freezing rain", "snowflake"),
        71 => entry("Slight snow fall", "snowflake"),
        73 => entry("Moderate snow fall", "snowflake"),
        75 => entry("Heavy snow fall", "snowflake"),
        77 => entry("Snow grains", "snowflake"),
        80 => entry("Slight rain showers", "cloud-rain"),
        81 => entry("Moderate rain showers", "cloud-rain"),
        82 => entry("Violent rain showers", "cloud-lightning"),
        85 => entry("Slight snow showers", "snowflake"),
        86 => entry("Heavy snow showers", "snowflake"),
        95 => entry("Thunderstorm", "cloud-lightning"),
        96 => entry("Thunderstorm with heavy hail", "cloud-hail"),
        99 => entry("Thunderstorm with heavy hail", "cloud-hail"),
        _ => UNKNOWN,
    }
}
