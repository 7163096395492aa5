//! Serializable render state for the browser
//!
//! [`ViewSnapshot`] implements [`PanelView`] by recording the widget's
//! render state instead of touching a DOM. The API hands it to the host
//! page, which applies it: panel visibility by id, `textContent` per field
//! id, the icon glyph attribute, and the `--bg-gradient` custom property.

use crate::controller::{Field, Panel, PanelView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendered widget state, keyed by the host page's element ids
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Id of the single visible panel
    pub active_panel: String,
    /// Field text by element id
    pub fields: BTreeMap<String, String>,
    /// Icon glyph key, when a result has been rendered
    pub icon: Option<String>,
    /// Background gradient value, when a result has been rendered
    pub background: Option<String>,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            active_panel: Panel::Initial.id().to_string(),
            fields: BTreeMap::new(),
            icon: None,
            background: None,
        }
    }
}

impl PanelView for ViewSnapshot {
    fn show_panel(&mut self, panel: Panel) {
        self.active_panel = panel.id().to_string();
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.fields.insert(field.id().to_string(), value.to_string());
    }

    fn set_icon(&mut self, icon: &str) {
        self.icon = Some(icon.to_string());
    }

    fn set_background(&mut self, gradient: &str) {
        self.background = Some(gradient.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_shows_initial_panel() {
        let snapshot = ViewSnapshot::default();
        assert_eq!(snapshot.active_panel, "initial-state");
        assert!(snapshot.fields.is_empty());
        assert!(snapshot.icon.is_none());
        assert!(snapshot.background.is_none());
    }

    #[test]
    fn test_exactly_one_panel_is_ever_active() {
        let mut snapshot = ViewSnapshot::default();
        snapshot.show_panel(Panel::Loading);
        snapshot.show_panel(Panel::Result);
        assert_eq!(snapshot.active_panel, "weather-display");
    }

    #[test]
    fn test_fields_are_keyed_by_element_id() {
        let mut snapshot = ViewSnapshot::default();
        snapshot.set_field(Field::CityName, "Paris, France");
        snapshot.set_field(Field::Temperature, "15");
        assert_eq!(
            snapshot.fields.get("city-name").map(String::as_str),
            Some("Paris, France")
        );
        assert_eq!(
            snapshot.fields.get("temperature").map(String::as_str),
            Some("15")
        );
    }

    #[test]
    fn test_snapshot_serializes_with_stable_keys() {
        let mut snapshot = ViewSnapshot::default();
        snapshot.show_panel(Panel::Error);
        snapshot.set_field(Field::ErrorText, "Unable to fetch weather data. Please try again later.");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["active_panel"], "error-message");
        assert_eq!(
            json["fields"]["error-text"],
            "Unable to fetch weather data. Please try again later."
        );
    }
}
