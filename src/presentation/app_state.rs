// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::infrastructure::html_renderer::HtmlFileRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub chart_service: ChartService,
    pub page_renderer: Arc<HtmlFileRenderer>,
}
