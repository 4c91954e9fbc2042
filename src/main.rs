// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_source::DashboardSource;
use crate::application::streaming_service::StreamingDashboardService;
use crate::application::widget_renderer::WidgetRenderer;
use crate::infrastructure::catalog::StaticCatalog;
use crate::infrastructure::config::{load_palette_config, load_server_config};
use crate::infrastructure::http_source::HttpSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_dashboard_view, health_check, list_dashboards, stream_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let palette_config = load_palette_config()?;

    // Create dashboard source (infrastructure layer)
    let source: Arc<dyn DashboardSource> = match server_config.source.kind.as_str() {
        "upstream" => {
            let url = server_config
                .source
                .upstream_url
                .clone()
                .context("source.kind = \"upstream\" requires source.upstream_url")?;
            Arc::new(HttpSource::new(url))
        }
        _ => Arc::new(StaticCatalog::with_builtin()),
    };

    // Create services (application layer)
    let renderer = WidgetRenderer::new(palette_config.colors);
    let dashboard_service = DashboardService::new(source.clone(), renderer.clone());
    let streaming_service = StreamingDashboardService::new(source, renderer);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards", get(list_dashboards))
        .route("/dashboards/:id", post(get_dashboard))
        .route("/dashboards/:id/view", post(get_dashboard_view))
        .route("/dashboards/:id/stream", post(stream_dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config
        .listen
        .parse()
        .with_context(|| format!("invalid listen address: {}", server_config.listen))?;
    println!("Starting facility-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
