// Series reshaper - column-oriented series to row-oriented dataset
use crate::domain::error::ChartError;
use crate::domain::payload::SeriesValues;
use crate::domain::row::{Row, TIME_FIELD};
use std::collections::HashSet;

/// Turn parallel per-series value arrays into one row per timestamp.
///
/// Every series must carry exactly one value per timestamp and a unique name
/// other than `time`; the first series that does not is reported before any
/// row is built.
pub fn reshape(timestamps: &[String], series: &[SeriesValues]) -> Result<Vec<Row>, ChartError> {
    let mut seen = HashSet::with_capacity(series.len());
    for s in series {
        if s.name == TIME_FIELD {
            return Err(ChartError::ReservedSeriesName {
                name: s.name.clone(),
            });
        }
        if !seen.insert(s.name.as_str()) {
            return Err(ChartError::DuplicateSeries {
                name: s.name.clone(),
            });
        }
    }

    let expected = timestamps.len();
    if let Some(bad) = series.iter().find(|s| s.values.len() != expected) {
        return Err(ChartError::ShapeMismatch {
            series: bad.name.clone(),
            len: bad.values.len(),
            expected,
        });
    }

    let rows = timestamps
        .iter()
        .enumerate()
        .map(|(i, time)| {
            let fields = series.iter().map(|s| (s.name.clone(), s.values[i])).collect();
            Row::with_fields(time.clone(), fields)
        })
        .collect();

    Ok(rows)
}
