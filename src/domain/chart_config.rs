// Chart configuration domain model - the declarative option handed to the renderer
use super::row::Row;
use serde::{Deserialize, Serialize};

/// Presentation constants shared by descriptor building and config assembly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub line_width: u32,
    pub grid_right: u32,
    pub legend_item_gap: u32,
    pub legend_top: u32,
    pub title_top: u32,
    pub title_font_size: u32,
    pub animation_duration_ms: u32,
    pub x_axis_name: String,
    pub name_gap: u32,
    pub y_name_gap: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 5,
            grid_right: 140,
            legend_item_gap: 25,
            legend_top: 40,
            title_top: 10,
            title_font_size: 22,
            animation_duration_ms: 1000,
            x_axis_name: "time".to_string(),
            name_gap: 30,
            y_name_gap: 50,
        }
    }
}

/// Named formatting callbacks. The renderer binds each tag to the matching
/// function in `application::formatters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Formatter {
    TimeOfDay,
    AxisTooltip,
    SeriesName,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub animation_duration: u32,
    pub title: Title,
    pub tooltip: Tooltip,
    pub legend: Legend,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: Grid,
    pub dataset: Dataset,
    pub series: Vec<SeriesDescriptor>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub top: u32,
    pub left: String,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipTrigger {
    Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipOrder {
    ValueDesc,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: TooltipTrigger,
    pub order: TooltipOrder,
    pub confine: bool,
    pub background_color: String,
    pub border_color: String,
    pub text_style: TextStyle,
    pub axis_pointer: AxisPointer,
    pub extra_css_text: String,
    pub padding: [u32; 2],
    pub formatter: Formatter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: String,
    pub cross_style: LineStyle,
    pub label: PointerLabel,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerLabel {
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub data: Vec<String>,
    pub top: u32,
    pub icon: String,
    pub item_gap: u32,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub name: String,
    pub name_location: String,
    pub name_gap: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<bool>,
    pub axis_line: AxisLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub show: bool,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub color: String,
    pub font_weight: String,
    pub formatter: Formatter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub show: bool,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Grid {
    pub right: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dataset {
    pub source: Vec<Row>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
}

/// Rendering and field-encoding contract for one series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub show_symbol: bool,
    pub line_style: LineStyle,
    pub end_label: EndLabel,
    pub label_layout: LabelLayout,
    pub emphasis: Emphasis,
    pub encode: Encode,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EndLabel {
    pub show: bool,
    pub formatter: Formatter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelLayout {
    pub move_overlap: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Emphasis {
    pub focus: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Encode {
    pub x: String,
    pub y: String,
    pub tooltip: String,
}
