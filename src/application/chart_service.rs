// Chart service - Use case for turning a payload into a rendered chart
use crate::application::config_assembler::assemble;
use crate::application::descriptor_builder::build_descriptors;
use crate::application::renderer::RenderInvoker;
use crate::application::reshaper::reshape;
use crate::domain::chart_config::{ChartConfig, ChartStyle};
use crate::domain::error::ChartError;
use crate::domain::payload::Payload;

#[derive(Clone)]
pub struct ChartService {
    style: ChartStyle,
    invoker: RenderInvoker,
}

impl ChartService {
    pub fn new(style: ChartStyle, invoker: RenderInvoker) -> Self {
        Self { style, invoker }
    }

    /// Reshape, describe and assemble. Nothing is rendered.
    pub fn build_config(&self, payload: &Payload) -> Result<ChartConfig, ChartError> {
        let rows = reshape(&payload.timestamps, &payload.series)?;
        let descriptors = build_descriptors(&payload.series_names, &self.style);

        tracing::debug!(
            "Assembled chart '{}': {} rows, {} series",
            payload.title,
            rows.len(),
            descriptors.len()
        );

        Ok(assemble(
            &payload.title,
            &rows,
            &descriptors,
            &payload.series_names,
            &payload.unit,
            &self.style,
        ))
    }

    /// Full pipeline. A payload that fails validation never reaches the renderer.
    pub fn render(&self, payload: &Payload) -> Result<(), ChartError> {
        let config = self.build_config(payload)?;
        self.invoker.render(&config).map_err(|e| {
            tracing::error!("Renderer failed for chart '{}': {}", payload.title, e);
            ChartError::from(e)
        })
    }
}
