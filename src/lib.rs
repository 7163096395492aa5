//! `skypanel` - city weather lookup widget
//!
//! This library provides the core of a browser-served weather widget: a
//! geocode-then-forecast lookup pipeline, the four-panel display state
//! machine that presents its outcome, and the web layer delivering both to
//! the host page.

pub mod api;
pub mod codes;
pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod models;
pub mod theme;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use config::SkypanelConfig;
pub use controller::{DisplayState, Field, Panel, PanelView, ViewController};
pub use error::LookupError;
pub use lookup::LookupPipeline;
pub use models::{CurrentConditions, Location};
pub use view::ViewSnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type for lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
