//! Temperature-driven background theming
//!
//! Five temperature bands, each mapping to a fixed two-color gradient the
//! host page pushes into its `--bg-gradient` CSS custom property.

/// Freezing, below 0 °C: very dark blue
pub const FREEZING: &str = "linear-gradient(135deg, #0f172a 0%, #1e3a8a 100%)";
/// Cold, [0, 10): dark blue
pub const COLD: &str = "linear-gradient(135deg, #0f172a 0%, #1d4ed8 100%)";
/// Mild, [10, 20): deep blue/teal
pub const MILD: &str = "linear-gradient(135deg, #0c4a6e 0%, #0284c7 100%)";
/// Warm, [20, 30): dark orange/rust
pub const WARM: &str = "linear-gradient(135deg, #7c2d12 0%, #c2410c 100%)";
/// Hot, 30 and above: deep red
pub const HOT: &str = "linear-gradient(135deg, #881337 0%, #be123c 100%)";

/// Select the background gradient for a temperature.
///
/// Bands are half-open with an inclusive lower bound and compare the raw,
/// unrounded temperature. Total over all finite values.
#[must_use]
pub fn background_gradient(temperature_c: f64) -> &'static str {
    if temperature_c < 0.0 {
        FREEZING
    } else if temperature_c < 10.0 {
        COLD
    } else if temperature_c < 20.0 {
        MILD
    } else if temperature_c < 30.0 {
        WARM
    } else {
        HOT
    }
}
