use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::config::SkypanelConfig;
use crate::lookup::LookupPipeline;

/// Serve the widget: static host page plus the lookup API under `/api`
pub async fn run(config: &SkypanelConfig) -> Result<()> {
    let pipeline = LookupPipeline::new(&config.services)
        .context("Failed to create lookup pipeline")?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = axum::Router::new()
        .nest("/api", api::router(pipeline))
        .fallback_service(ServeDir::new(&config.web.frontend_dir))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.web.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.web.port);
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
