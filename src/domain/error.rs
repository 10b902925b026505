// Error taxonomy for the chart pipeline
use thiserror::Error;

/// Failure raised by the rendering engine while applying a configuration.
#[derive(Error, Debug)]
pub enum RenderEngineError {
    #[error("failed to encode chart option: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write chart surface: {0}")]
    Io(#[from] std::io::Error),
    #[error("renderer rejected option: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("series '{series}' has {len} values but there are {expected} timestamps")]
    ShapeMismatch {
        series: String,
        len: usize,
        expected: usize,
    },
    #[error("payload is missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("series '{name}' does not appear in both the legend and the series data")]
    UnknownSeries { name: String },
    #[error("series name '{name}' is reserved for the timestamp field")]
    ReservedSeriesName { name: String },
    #[error("series '{name}' is listed more than once")]
    DuplicateSeries { name: String },
    #[error("payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RenderEngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message_names_series_and_lengths() {
        let err = ChartError::ShapeMismatch {
            series: "cpu".to_string(),
            len: 3,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "series 'cpu' has 3 values but there are 2 timestamps"
        );
    }

    #[test]
    fn test_render_error_is_transparent() {
        let err = ChartError::from(RenderEngineError::Rejected("bad option".to_string()));
        assert_eq!(err.to_string(), "renderer rejected option: bad option");
    }
}
