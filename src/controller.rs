//! Display state machine for the four-panel widget UI
//!
//! The controller owns the single active [`DisplayState`] and drives an
//! injected [`PanelView`], the render surface the host page maps onto its
//! DOM. Both submission channels of the page (button and accept keypress)
//! funnel into the one [`ViewController::submit`] entry point.

use crate::codes;
use crate::error::LookupError;
use crate::lookup::LookupPipeline;
use crate::models::{CurrentConditions, Location};
use crate::theme;
use chrono::{Local, NaiveDate};
use tracing::error;

/// The four mutually exclusive display panels of the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Initial,
    Loading,
    Result,
    Error,
}

impl Panel {
    /// Element id of the panel in the host markup
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Panel::Initial => "initial-state",
            Panel::Loading => "loading",
            Panel::Result => "weather-display",
            Panel::Error => "error-message",
        }
    }
}

/// Text fields of the host page, addressed by element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CityName,
    CurrentDate,
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    Elevation,
    Description,
    ErrorText,
}

impl Field {
    /// Element id of the field in the host markup
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Field::CityName => "city-name",
            Field::CurrentDate => "current-date",
            Field::Temperature => "temperature",
            Field::FeelsLike => "feels-like",
            Field::Humidity => "humidity",
            Field::WindSpeed => "wind-speed",
            Field::Elevation => "elevation",
            Field::Description => "weather-description",
            Field::ErrorText => "error-text",
        }
    }
}

/// Render surface the controller drives.
///
/// The host page applies these calls to its DOM: panel visibility, text
/// content by element id, the icon glyph attribute, and the background
/// gradient custom property.
pub trait PanelView {
    /// Make `panel` the only visible panel
    fn show_panel(&mut self, panel: Panel);
    /// Update a text field
    fn set_field(&mut self, field: Field, value: &str);
    /// Swap the active icon glyph
    fn set_icon(&mut self, icon: &str);
    /// Push a new background gradient
    fn set_background(&mut self, gradient: &str);
}

/// Current display state. Exactly one variant is active at any time; the
/// tagged union, not per-panel flags, decides what is visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Result {
        location: Location,
        conditions: CurrentConditions,
    },
    Error {
        message: String,
    },
}

/// Controller driving one widget instance
pub struct ViewController<V> {
    pipeline: LookupPipeline,
    view: V,
    state: DisplayState,
}

impl<V: PanelView> ViewController<V> {
    /// Create a controller in the Idle state. The host page starts with the
    /// initial panel visible, so construction performs no render calls.
    pub fn new(pipeline: LookupPipeline, view: V) -> Self {
        Self {
            pipeline,
            view,
            state: DisplayState::Idle,
        }
    }

    /// The active display state
    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// The render surface, for inspection
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consume the controller and return the render surface
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Handle one submission of the city input.
    ///
    /// Empty or whitespace-only input is a silent no-op: no state change,
    /// no render calls, no network. Otherwise the display goes to Loading,
    /// the pipeline runs, and the outcome lands in Result or Error.
    pub async fn submit(&mut self, input: &str) {
        let city = input.trim().to_string();
        if city.is_empty() {
            return;
        }

        self.state = DisplayState::Loading;
        self.view.show_panel(Panel::Loading);

        let outcome = self.pipeline.lookup(&city).await;
        match outcome {
            Ok((location, conditions)) => self.render_result(location, conditions),
            Err(err) => self.render_error(&city, &err),
        }
    }

    fn render_result(&mut self, location: Location, conditions: CurrentConditions) {
        self.view
            .set_background(theme::background_gradient(conditions.temperature_c));

        self.view.set_field(Field::CityName, &location.display_name());
        self.view
            .set_field(Field::CurrentDate, &format_long_date(Local::now().date_naive()));
        self.view
            .set_field(Field::Temperature, &conditions.format_temperature());
        self.view
            .set_field(Field::FeelsLike, &conditions.format_feels_like());
        self.view
            .set_field(Field::Humidity, &conditions.format_humidity());
        self.view
            .set_field(Field::WindSpeed, &conditions.format_wind_speed());
        self.view
            .set_field(Field::Elevation, &conditions.format_elevation());

        let info = codes::describe(conditions.weather_code);
        self.view.set_field(Field::Description, info.description);
        self.view.set_icon(info.icon);

        self.view.show_panel(Panel::Result);
        self.state = DisplayState::Result {
            location,
            conditions,
        };
    }

    fn render_error(&mut self, city: &str, err: &LookupError) {
        error!(%city, %err, "lookup failed");

        // Silent failures leave the display untouched
        let Some(message) = err.user_message() else {
            return;
        };

        self.view.set_field(Field::ErrorText, &message);
        self.view.show_panel(Panel::Error);
        self.state = DisplayState::Error { message };
    }
}

/// Format a date as full weekday, month name, day and year, e.g.
/// "Monday, July 15, 2024". Month and weekday names are English.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
