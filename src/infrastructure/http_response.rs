// HTTP response utilities for chart pipeline results
use crate::domain::error::ChartError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub fn status_for(err: &ChartError) -> StatusCode {
    match err {
        ChartError::InvalidPayload(_) | ChartError::MissingField { .. } => StatusCode::BAD_REQUEST,
        ChartError::ShapeMismatch { .. }
        | ChartError::UnknownSeries { .. }
        | ChartError::ReservedSeriesName { .. }
        | ChartError::DuplicateSeries { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ChartError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ChartError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!("Chart pipeline failed: {}", self);
        } else {
            tracing::warn!("Rejected chart payload: {}", self);
        }
        error_response(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::RenderEngineError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ChartError::MissingField { field: "unit" }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ChartError::ShapeMismatch {
                series: "cpu".to_string(),
                len: 1,
                expected: 2
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&ChartError::ReservedSeriesName {
                name: "time".to_string()
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&ChartError::Render(RenderEngineError::Rejected("x".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_into_response_status() {
        let response = ChartError::UnknownSeries {
            name: "gpu".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
