// Render invoker - hands an assembled option to an injected rendering engine
use crate::domain::chart_config::ChartConfig;
use crate::domain::error::RenderEngineError;
use std::sync::Arc;

/// The engine's "set option" entry point. Implementations own the drawing
/// surface and must make a repeated call replace the previous option.
pub trait ChartRenderer: Send + Sync {
    fn set_option(&self, option: &ChartConfig) -> Result<(), RenderEngineError>;
}

#[derive(Clone)]
pub struct RenderInvoker {
    renderer: Arc<dyn ChartRenderer>,
}

impl RenderInvoker {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    /// Errors from the engine are returned untouched.
    pub fn render(&self, config: &ChartConfig) -> Result<(), RenderEngineError> {
        self.renderer.set_option(config)
    }
}
