// HTML page renderer - drives ECharts in a browser page written to disk
use crate::application::formatters::{
    escape_html, format_axis_label, format_end_label, tooltip_content, TooltipContent,
};
use crate::application::renderer::ChartRenderer;
use crate::domain::chart_config::ChartConfig;
use crate::domain::error::RenderEngineError;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes one self-contained page per `set_option`. Each call stages its page
/// in its own temp file next to the target and persists it over the target,
/// so concurrent renders never share a staging file and readers never see a
/// partial chart.
#[derive(Debug, Clone)]
pub struct HtmlFileRenderer {
    output_path: PathBuf,
    script_src: String,
}

impl HtmlFileRenderer {
    pub fn new(output_path: impl Into<PathBuf>, script_src: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            script_src: script_src.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// The most recently rendered page, if any chart has been rendered yet.
    pub fn current_page(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.output_path) {
            Ok(page) => Ok(Some(page)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn target_dir(&self) -> Result<&Path, RenderEngineError> {
        if self.output_path.file_name().is_none() {
            return Err(RenderEngineError::Rejected(format!(
                "output path {} does not name a file",
                self.output_path.display()
            )));
        }
        Ok(match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        })
    }
}

impl ChartRenderer for HtmlFileRenderer {
    fn set_option(&self, option: &ChartConfig) -> Result<(), RenderEngineError> {
        let dir = self.target_dir()?;
        let page = render_html_page(option, &self.script_src)?;

        std::fs::create_dir_all(dir)?;
        let mut staging = NamedTempFile::new_in(dir)?;
        staging.write_all(page.as_bytes())?;
        staging.flush()?;
        staging
            .persist(&self.output_path)
            .map_err(|e| RenderEngineError::Io(e.error))?;

        tracing::info!(
            "Rendered chart '{}' to {}",
            option.title.text,
            self.output_path.display()
        );
        Ok(())
    }
}

/// Build the page. Formatter tags in the option are bound to lookup tables
/// computed here with the Rust formatters.
pub fn render_html_page(option: &ChartConfig, script_src: &str) -> Result<String, RenderEngineError> {
    let rows = &option.dataset.source;

    let axis_labels: BTreeMap<&str, String> = rows
        .iter()
        .map(|row| (row.time(), format_axis_label(row.time())))
        .collect();
    let tooltips: Vec<TooltipContent> = rows
        .iter()
        .map(|row| tooltip_content(row, &option.legend.data))
        .collect();
    let end_labels: BTreeMap<&str, String> = option
        .series
        .iter()
        .map(|s| (s.name.as_str(), format_end_label(&s.name)))
        .collect();

    let option_json = script_json(&serde_json::to_string(option)?);
    let axis_json = script_json(&serde_json::to_string(&axis_labels)?);
    let tooltip_json = script_json(&serde_json::to_string(&tooltips)?);
    let end_label_json = script_json(&serde_json::to_string(&end_labels)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{script_src}"></script>
</head>
<body style="margin:0">
<div id="chart" style="width:100vw;height:100vh"></div>
<script>
const option = {option_json};
const axisLabels = {axis_json};
const tooltips = {tooltip_json};
const endLabels = {end_label_json};
const formatters = {{
  timeOfDay: (value) => axisLabels[value] ?? value,
  axisTooltip: (params) => {{
    const content = tooltips[params[0].dataIndex];
    if (!content) return '';
    const markers = Object.fromEntries(params.map((p) => [p.seriesName, p.marker]));
    return content.header + '<br/>' + content.lines
      .map((line) => (markers[line.series] ?? '') + line.text + '<br/>')
      .join('');
  }},
  seriesName: (params) => endLabels[params.seriesName] ?? params.seriesName,
}};
function bindFormatters(node) {{
  if (Array.isArray(node)) {{ node.forEach(bindFormatters); return; }}
  if (node === null || typeof node !== 'object') return;
  for (const [key, value] of Object.entries(node)) {{
    if (key === 'formatter' && typeof value === 'string' && formatters[value]) {{
      node[key] = formatters[value];
    }} else if (key !== 'dataset') {{
      bindFormatters(value);
    }}
  }}
}}
bindFormatters(option);
const chart = echarts.init(document.getElementById('chart'));
chart.setOption(option, true);
window.addEventListener('resize', () => chart.resize());
</script>
</body>
</html>
"#,
        title = escape_html(&option.title.text),
        script_src = escape_html(script_src),
    ))
}

// JSON is valid JS, but "</script>" inside a string would end the block.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
