// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use series_chart::application::chart_service::ChartService;
use series_chart::application::renderer::RenderInvoker;
use series_chart::infrastructure::config::load_app_config;
use series_chart::infrastructure::html_renderer::HtmlFileRenderer;
use series_chart::presentation::app_state::AppState;
use series_chart::presentation::handlers::{chart_option, current_chart, health_check, render_chart};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create renderer (infrastructure layer)
    let page_renderer = Arc::new(HtmlFileRenderer::new(
        app_config.render.output_path.clone(),
        app_config.render.echarts_src.clone(),
    ));

    // Create services (application layer)
    let chart_service = ChartService::new(
        app_config.style.clone(),
        RenderInvoker::new(page_renderer.clone()),
    );

    // Create application state
    let state = Arc::new(AppState {
        chart_service,
        page_renderer,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/charts/option", post(chart_option))
        .route("/charts/render", post(render_chart))
        .route("/charts/current", get(current_chart))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("Starting series-chart service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
