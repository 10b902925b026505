// Series descriptor builder - one line-series contract per legend entry
use crate::domain::chart_config::{
    ChartStyle, Emphasis, Encode, EndLabel, Formatter, LabelLayout, LineStyle, SeriesDescriptor,
    SeriesKind,
};
use crate::domain::row::TIME_FIELD;

pub fn build_descriptors(series_names: &[String], style: &ChartStyle) -> Vec<SeriesDescriptor> {
    series_names
        .iter()
        .map(|name| build_descriptor(name, style))
        .collect()
}

/// Binds a series to the row schema: x reads `time`, y and tooltip read the
/// field named after the series.
fn build_descriptor(name: &str, style: &ChartStyle) -> SeriesDescriptor {
    SeriesDescriptor {
        name: name.to_string(),
        kind: SeriesKind::Line,
        show_symbol: false,
        line_style: LineStyle {
            width: Some(style.line_width),
            ..LineStyle::default()
        },
        end_label: EndLabel {
            show: true,
            formatter: Formatter::SeriesName,
        },
        label_layout: LabelLayout {
            move_overlap: "shiftY".to_string(),
        },
        emphasis: Emphasis {
            focus: "series".to_string(),
        },
        encode: Encode {
            x: TIME_FIELD.to_string(),
            y: name.to_string(),
            tooltip: name.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors_preserve_order() {
        let names: Vec<String> = ["mem", "cpu", "disk"].iter().map(|s| s.to_string()).collect();
        let descriptors = build_descriptors(&names, &ChartStyle::default());

        let built: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(built, vec!["mem", "cpu", "disk"]);
    }

    #[test]
    fn test_descriptor_encodes_series_field() {
        let names = vec!["cpu".to_string()];
        let descriptor = &build_descriptors(&names, &ChartStyle::default())[0];

        assert_eq!(descriptor.encode.x, "time");
        assert_eq!(descriptor.encode.y, "cpu");
        assert_eq!(descriptor.encode.tooltip, "cpu");
        assert!(!descriptor.show_symbol);
        assert_eq!(descriptor.line_style.width, Some(5));
        assert_eq!(descriptor.end_label.formatter, Formatter::SeriesName);
    }

    #[test]
    fn test_descriptor_json_shape() {
        let names = vec!["cpu".to_string()];
        let descriptors = build_descriptors(&names, &ChartStyle::default());

        let json = serde_json::to_value(&descriptors[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "cpu",
                "type": "line",
                "showSymbol": false,
                "lineStyle": {"width": 5},
                "endLabel": {"show": true, "formatter": "seriesName"},
                "labelLayout": {"moveOverlap": "shiftY"},
                "emphasis": {"focus": "series"},
                "encode": {"x": "time", "y": "cpu", "tooltip": "cpu"}
            })
        );
    }

    #[test]
    fn test_descriptors_empty() {
        assert!(build_descriptors(&[], &ChartStyle::default()).is_empty());
    }
}
