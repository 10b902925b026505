// HTTP request handlers
use crate::domain::error::ChartError;
use crate::infrastructure::http_response::error_response;
use crate::infrastructure::payload_parser::parse_payload;
use crate::presentation::app_state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Build the chart option for a payload without rendering it
pub async fn chart_option(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let result = parse_payload(&body).and_then(|payload| state.chart_service.build_config(&payload));

    match result {
        Ok(config) => Json(config).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Run the full pipeline and replace the current chart page
pub async fn render_chart(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let service = state.chart_service.clone();
    let task = tokio::task::spawn_blocking(move || -> Result<(), ChartError> {
        let payload = parse_payload(&body)?;
        service.render(&payload)
    });

    match task.await {
        Ok(Ok(())) => StatusCode::NO_CONTENT.into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            tracing::error!("Render task failed to complete: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "render task failed")
        }
    }
}

/// Serve the most recently rendered chart page
pub async fn current_chart(State(state): State<Arc<AppState>>) -> Response {
    match state.page_renderer.current_page() {
        Ok(Some(page)) => Html(page).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "no chart has been rendered yet"),
        Err(e) => {
            tracing::error!(
                "Error reading {}: {}",
                state.page_renderer.output_path().display(),
                e
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to read chart page")
        }
    }
}
