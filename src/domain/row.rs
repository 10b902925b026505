// Row-oriented dataset record
use super::error::ChartError;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const TIME_FIELD: &str = "time";

/// One timestamp's worth of values across all series.
///
/// Fields keep the series order they were inserted in, so serialization is
/// stable: `time` first, then one entry per series. No series field may be
/// named `time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    time: String,
    fields: Vec<(String, Option<f64>)>,
}

impl Row {
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            fields: Vec::new(),
        }
    }

    /// Caller guarantees the names are unique and none is `TIME_FIELD`.
    pub(crate) fn with_fields(time: impl Into<String>, fields: Vec<(String, Option<f64>)>) -> Self {
        debug_assert!(fields.iter().all(|(name, _)| name != TIME_FIELD));
        Self {
            time: time.into(),
            fields,
        }
    }

    /// Sets the value for `series`, replacing any previous value under the same key.
    pub fn insert(&mut self, series: impl Into<String>, value: Option<f64>) -> Result<(), ChartError> {
        let series = series.into();
        if series == TIME_FIELD {
            return Err(ChartError::ReservedSeriesName { name: series });
        }
        match self.fields.iter_mut().find(|(name, _)| *name == series) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((series, value)),
        }
        Ok(())
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// `None` if the series is absent; `Some(None)` for an explicit null.
    pub fn get(&self, series: &str) -> Option<Option<f64>> {
        self.fields
            .iter()
            .find(|(name, _)| name == series)
            .map(|(_, value)| *value)
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(TIME_FIELD, &self.time)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_time_first_then_series_order() {
        let mut row = Row::new("2024-01-01T08:00:00Z");
        row.insert("mem", Some(30.0)).unwrap();
        row.insert("cpu", None).unwrap();

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"time":"2024-01-01T08:00:00Z","mem":30.0,"cpu":null}"#);
    }

    #[test]
    fn test_row_get_distinguishes_null_from_absent() {
        let mut row = Row::new("t");
        row.insert("cpu", None).unwrap();

        assert_eq!(row.get("cpu"), Some(None));
        assert_eq!(row.get("mem"), None);
    }

    #[test]
    fn test_row_insert_replaces_existing_key() {
        let mut row = Row::new("t");
        row.insert("cpu", Some(1.0)).unwrap();
        row.insert("cpu", Some(2.0)).unwrap();

        assert_eq!(row.get("cpu"), Some(Some(2.0)));
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"time":"t","cpu":2.0}"#);
    }

    #[test]
    fn test_row_insert_refuses_time_key() {
        let mut row = Row::new("2024-01-01T08:00:00Z");

        let err = row.insert("time", Some(5.0)).unwrap_err();

        assert!(matches!(err, ChartError::ReservedSeriesName { ref name } if name == "time"));
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"time":"2024-01-01T08:00:00Z"}"#
        );
    }

    #[test]
    fn test_row_with_fields_keeps_order() {
        let row = Row::with_fields(
            "t",
            vec![("b".to_string(), Some(1.0)), ("a".to_string(), None)],
        );
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"time":"t","b":1.0,"a":null}"#
        );
    }
}
