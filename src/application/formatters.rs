// Formatting callbacks referenced by the chart configuration
use crate::domain::row::Row;
use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use std::cmp::Ordering;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

const LINE_BREAK: &str = "<br/>";
const MISSING_VALUE: &str = "-";

/// Time-of-day (`HH:MM:SS`) of a timestamp, in the offset it was written in.
///
/// Accepts RFC 3339 (any offset, optional fractional seconds) and naive
/// `YYYY-MM-DD[T ]HH:MM:SS[.fff]`. Returns `None` for anything else.
pub fn time_of_day(timestamp: &str) -> Option<String> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format("%H:%M:%S").to_string());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|dt| dt.format("%H:%M:%S").to_string())
}

/// Category-axis tick label. Unparseable values are shown as-is.
pub fn format_axis_label(value: &str) -> String {
    time_of_day(value).unwrap_or_else(|| value.to_string())
}

pub fn format_end_label(series_name: &str) -> String {
    series_name.to_string()
}

pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING_VALUE.to_string(),
    }
}

/// Tooltip body for one row, already HTML-escaped. `series` on each line is
/// the raw name so the page can attach that series' colour marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub header: String,
    pub lines: Vec<TooltipLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipLine {
    pub series: String,
    pub text: String,
}

impl TooltipContent {
    pub fn to_html(&self) -> String {
        let mut out = self.header.clone();
        out.push_str(LINE_BREAK);
        for line in &self.lines {
            out.push_str(&line.text);
            out.push_str(LINE_BREAK);
        }
        out
    }
}

/// Axis tooltip for a hovered row: the time of day, then one `name: value`
/// line per series, largest value first. Nulls and absent series sort last
/// and keep their legend order among themselves.
pub fn tooltip_content(row: &Row, series_order: &[String]) -> TooltipContent {
    let mut entries: Vec<(&str, Option<f64>)> = series_order
        .iter()
        .map(|name| (name.as_str(), row.get(name).flatten()))
        .collect();
    entries.sort_by(|a, b| descending(a.1, b.1));

    TooltipContent {
        header: escape_html(&format_axis_label(row.time())),
        lines: entries
            .into_iter()
            .map(|(name, value)| TooltipLine {
                series: name.to_string(),
                text: format!("{}: {}", escape_html(name), format_value(value)),
            })
            .collect(),
    }
}

pub fn format_tooltip(row: &Row, series_order: &[String]) -> String {
    tooltip_content(row, series_order).to_html()
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
