//! HTTP API for the widget
//!
//! One lookup endpoint: the browser submits the city text and receives the
//! rendered view snapshot to apply to the page.

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;

use crate::controller::ViewController;
use crate::lookup::LookupPipeline;
use crate::view::ViewSnapshot;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub city: String,
}

pub fn router(pipeline: LookupPipeline) -> Router {
    Router::new()
        .route("/lookup", get(lookup))
        .route("/health", get(health))
        .with_state(pipeline)
}

/// Run one lookup and return the rendered snapshot.
///
/// Every request gets a fresh controller in the Idle state, so an empty
/// `city` comes back as the untouched initial snapshot.
async fn lookup(
    State(pipeline): State<LookupPipeline>,
    Query(params): Query<LookupParams>,
) -> Json<ViewSnapshot> {
    let mut controller = ViewController::new(pipeline, ViewSnapshot::default());
    controller.submit(&params.city).await;
    Json(controller.into_view())
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServicesConfig;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn offline_router() -> Router {
        let pipeline = LookupPipeline::new(&ServicesConfig {
            geocoding_url: "http://127.0.0.1:1/v1/search".to_string(),
            forecast_url: "http://127.0.0.1:1/v1/forecast".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();
        router(pipeline)
    }

    async fn get_snapshot(router: Router, uri: &str) -> ViewSnapshot {
        let response = router
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = offline_router()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_city_returns_initial_snapshot() {
        let snapshot = get_snapshot(offline_router(), "/lookup?city=").await;
        assert_eq!(snapshot, ViewSnapshot::default());
    }

    #[tokio::test]
    async fn test_missing_city_param_returns_initial_snapshot() {
        let snapshot = get_snapshot(offline_router(), "/lookup").await;
        assert_eq!(snapshot, ViewSnapshot::default());
    }

    #[tokio::test]
    async fn test_unreachable_services_render_the_error_panel() {
        let snapshot = get_snapshot(offline_router(), "/lookup?city=Paris").await;
        assert_eq!(snapshot.active_panel, "error-message");
        assert_eq!(
            snapshot.fields.get("error-text").map(String::as_str),
            Some("Unable to fetch weather data. Please try again later.")
        );
    }
}
