// Config assembler - composes rows, descriptors and static styling into one option
use crate::domain::chart_config::{
    Axis, AxisKind, AxisLabel, AxisLine, AxisPointer, ChartConfig, ChartStyle, Dataset, Formatter,
    Grid, Legend, LineStyle, PointerLabel, SeriesDescriptor, SplitLine, TextStyle, Title, Toggle,
    Tooltip, TooltipOrder, TooltipTrigger,
};
use crate::domain::row::Row;

const AXIS_LINE_COLOR: &str = "#A9A9A9";
const TOOLTIP_BACKGROUND: &str = "rgba(50, 50, 50, 0.9)";

pub fn assemble(
    title: &str,
    rows: &[Row],
    descriptors: &[SeriesDescriptor],
    legend_names: &[String],
    unit: &str,
    style: &ChartStyle,
) -> ChartConfig {
    ChartConfig {
        animation_duration: style.animation_duration_ms,
        title: build_title(title, style),
        tooltip: build_tooltip(),
        legend: build_legend(legend_names, style),
        x_axis: build_x_axis(style),
        y_axis: build_y_axis(unit, style),
        grid: Grid {
            right: style.grid_right,
        },
        dataset: Dataset {
            source: rows.to_vec(),
        },
        series: descriptors.to_vec(),
    }
}

fn bold(font_size: Option<u32>) -> TextStyle {
    TextStyle {
        color: None,
        font_size,
        font_weight: Some("bold".to_string()),
    }
}

fn build_title(title: &str, style: &ChartStyle) -> Title {
    Title {
        text: title.to_string(),
        top: style.title_top,
        left: "center".to_string(),
        text_style: bold(Some(style.title_font_size)),
    }
}

fn build_tooltip() -> Tooltip {
    Tooltip {
        trigger: TooltipTrigger::Axis,
        order: TooltipOrder::ValueDesc,
        confine: true,
        background_color: TOOLTIP_BACKGROUND.to_string(),
        border_color: TOOLTIP_BACKGROUND.to_string(),
        text_style: TextStyle {
            color: Some("#fff".to_string()),
            ..TextStyle::default()
        },
        axis_pointer: AxisPointer {
            kind: "cross".to_string(),
            cross_style: LineStyle {
                color: Some("#999".to_string()),
                ..LineStyle::default()
            },
            label: PointerLabel {
                background_color: "#283b56".to_string(),
            },
        },
        extra_css_text: "min-width: 180px; box-shadow: 0 0 10px rgba(0, 0, 0, 0.3);".to_string(),
        padding: [10, 12],
        formatter: Formatter::AxisTooltip,
    }
}

fn build_legend(legend_names: &[String], style: &ChartStyle) -> Legend {
    Legend {
        data: legend_names.to_vec(),
        top: style.legend_top,
        icon: "roundRect".to_string(),
        item_gap: style.legend_item_gap,
        text_style: bold(Some(12)),
    }
}

fn axis_line() -> AxisLine {
    AxisLine {
        show: true,
        line_style: LineStyle {
            color: Some(AXIS_LINE_COLOR.to_string()),
            ..LineStyle::default()
        },
    }
}

fn build_x_axis(style: &ChartStyle) -> Axis {
    Axis {
        kind: AxisKind::Category,
        name: style.x_axis_name.clone(),
        name_location: "middle".to_string(),
        name_gap: style.name_gap,
        boundary_gap: Some(false),
        axis_line: axis_line(),
        axis_tick: Some(Toggle { show: false }),
        axis_label: Some(AxisLabel {
            color: "#666".to_string(),
            font_weight: "bold".to_string(),
            formatter: Formatter::TimeOfDay,
        }),
        split_line: Some(SplitLine {
            show: true,
            line_style: LineStyle {
                color: Some("#f0f0f0".to_string()),
                width: None,
                kind: Some("dashed".to_string()),
            },
        }),
    }
}

fn build_y_axis(unit: &str, style: &ChartStyle) -> Axis {
    Axis {
        kind: AxisKind::Value,
        name: unit.to_string(),
        name_location: "middle".to_string(),
        name_gap: style.y_name_gap,
        boundary_gap: None,
        axis_line: axis_line(),
        axis_tick: None,
        axis_label: None,
        split_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::descriptor_builder::build_descriptors;
    use crate::application::reshaper::reshape;
    use crate::domain::payload::SeriesValues;

    fn sample() -> (Vec<Row>, Vec<SeriesDescriptor>, Vec<String>) {
        let timestamps = vec![
            "2024-01-01T08:00:00Z".to_string(),
            "2024-01-01T08:00:05Z".to_string(),
        ];
        let series = vec![
            SeriesValues::new("cpu", vec![Some(10.0), Some(20.0)]),
            SeriesValues::new("mem", vec![Some(30.0), Some(40.0)]),
        ];
        let names = vec!["cpu".to_string(), "mem".to_string()];
        let rows = reshape(&timestamps, &series).unwrap();
        let descriptors = build_descriptors(&names, &ChartStyle::default());
        (rows, descriptors, names)
    }

    #[test]
    fn test_assemble_composes_pieces() {
        let (rows, descriptors, names) = sample();
        let config = assemble("Host CPU", &rows, &descriptors, &names, "%", &ChartStyle::default());

        assert_eq!(config.title.text, "Host CPU");
        assert_eq!(config.legend.data, names);
        assert_eq!(config.dataset.source, rows);
        assert_eq!(config.series, descriptors);
        assert_eq!(config.x_axis.kind, AxisKind::Category);
        assert_eq!(config.x_axis.name, "time");
        assert_eq!(config.y_axis.kind, AxisKind::Value);
        assert_eq!(config.y_axis.name, "%");
        assert_eq!(config.grid.right, 140);
        assert_eq!(config.tooltip.order, TooltipOrder::ValueDesc);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let (rows, descriptors, names) = sample();
        let style = ChartStyle::default();

        let first = assemble("t", &rows, &descriptors, &names, "ms", &style);
        let second = assemble("t", &rows, &descriptors, &names, "ms", &style);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_assemble_empty_dataset_is_well_formed() {
        let names = vec!["cpu".to_string()];
        let descriptors = build_descriptors(&names, &ChartStyle::default());
        let config = assemble("empty", &[], &descriptors, &names, "%", &ChartStyle::default());

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["dataset"]["source"], serde_json::json!([]));
        assert_eq!(json["series"][0]["name"], "cpu");
        assert_eq!(json["xAxis"]["type"], "category");
    }

    #[test]
    fn test_option_json_keys() {
        let (rows, descriptors, names) = sample();
        let config = assemble("t", &rows, &descriptors, &names, "%", &ChartStyle::default());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["animationDuration"], 1000);
        assert_eq!(json["tooltip"]["trigger"], "axis");
        assert_eq!(json["tooltip"]["order"], "valueDesc");
        assert_eq!(json["tooltip"]["formatter"], "axisTooltip");
        assert_eq!(json["tooltip"]["axisPointer"]["type"], "cross");
        assert_eq!(json["legend"]["icon"], "roundRect");
        assert_eq!(json["legend"]["itemGap"], 25);
        assert_eq!(json["xAxis"]["boundaryGap"], false);
        assert_eq!(json["xAxis"]["axisLabel"]["formatter"], "timeOfDay");
        assert_eq!(json["xAxis"]["splitLine"]["lineStyle"]["type"], "dashed");
        assert!(json["yAxis"].get("boundaryGap").is_none());
        assert_eq!(json["dataset"]["source"][1]["mem"], 40.0);
    }

    #[test]
    fn test_assemble_honours_style() {
        let (rows, descriptors, names) = sample();
        let style = ChartStyle {
            grid_right: 200,
            x_axis_name: "时间".to_string(),
            ..ChartStyle::default()
        };
        let config = assemble("t", &rows, &descriptors, &names, "%", &style);

        assert_eq!(config.grid.right, 200);
        assert_eq!(config.x_axis.name, "时间");
    }
}
