// Payload domain model - column-oriented time series as delivered upstream
use super::error::ChartError;
use super::row::TIME_FIELD;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesValues {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl SeriesValues {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub title: String,
    pub timestamps: Vec<String>,
    pub series_names: Vec<String>,
    pub series: Vec<SeriesValues>,
    pub unit: String,
}

impl Payload {
    /// Build a payload, checking that the legend names and the series
    /// correspond one to one and that no name collides with `time`.
    pub fn new(
        title: String,
        timestamps: Vec<String>,
        series_names: Vec<String>,
        series: Vec<SeriesValues>,
        unit: String,
    ) -> Result<Self, ChartError> {
        if let Some(name) = series
            .iter()
            .map(|s| &s.name)
            .chain(series_names.iter())
            .find(|name| *name == TIME_FIELD)
        {
            return Err(ChartError::ReservedSeriesName { name: name.clone() });
        }

        let mut seen = HashSet::new();
        for s in &series {
            if !seen.insert(s.name.as_str()) {
                return Err(ChartError::DuplicateSeries {
                    name: s.name.clone(),
                });
            }
        }

        let mut legend = HashSet::new();
        for name in &series_names {
            if !legend.insert(name.as_str()) {
                return Err(ChartError::DuplicateSeries { name: name.clone() });
            }
            if !seen.contains(name.as_str()) {
                return Err(ChartError::UnknownSeries { name: name.clone() });
            }
        }

        // A series that never made it into the legend has no descriptor.
        if let Some(orphan) = series.iter().find(|s| !legend.contains(s.name.as_str())) {
            return Err(ChartError::UnknownSeries {
                name: orphan.name.clone(),
            });
        }

        Ok(Self {
            title,
            timestamps,
            series_names,
            series,
            unit,
        })
    }
}
