// Payload parser - upstream monitoring API response to domain payload
use crate::domain::error::ChartError;
use crate::domain::payload::{Payload, SeriesValues};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    code: Option<i64>,
    data: RawPayload,
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "timestamps")]
    x_data: Option<Vec<String>>,
    #[serde(default, alias = "series_names", alias = "seriesNames")]
    legend_data: Option<Vec<String>>,
    #[serde(default, alias = "series")]
    series_data: Option<Vec<RawSeries>>,
    #[serde(default)]
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    name: String,
    #[serde(alias = "values")]
    value: Vec<Option<f64>>,
}

/// Parse either the `{code, data}` envelope or a bare payload object.
pub fn parse_payload(body: &[u8]) -> Result<Payload, ChartError> {
    let value: Value = serde_json::from_slice(body)?;

    let raw = if value.get("data").is_some_and(Value::is_object) {
        let envelope: ApiEnvelope = serde_json::from_value(value)?;
        tracing::debug!("Upstream response code: {:?}", envelope.code);
        envelope.data
    } else {
        serde_json::from_value(value)?
    };

    into_payload(raw)
}

fn into_payload(raw: RawPayload) -> Result<Payload, ChartError> {
    let title = raw.title.ok_or(ChartError::MissingField { field: "title" })?;
    let timestamps = raw
        .x_data
        .ok_or(ChartError::MissingField { field: "timestamps" })?;
    let series_names = raw
        .legend_data
        .ok_or(ChartError::MissingField { field: "series_names" })?;
    let series = raw
        .series_data
        .ok_or(ChartError::MissingField { field: "series" })?;
    let unit = raw.unit.ok_or(ChartError::MissingField { field: "unit" })?;

    let series = series
        .into_iter()
        .map(|s| SeriesValues::new(s.name, s.value))
        .collect();

    Payload::new(title, timestamps, series_names, series, unit)
}
