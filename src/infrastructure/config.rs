use crate::domain::chart_config::ChartStyle;
use serde::Deserialize;

pub const DEFAULT_ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub style: ChartStyle,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderSettings {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_echarts_src")]
    pub echarts_src: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            echarts_src: default_echarts_src(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_output_path() -> String {
    "out/chart.html".to_string()
}

fn default_echarts_src() -> String {
    DEFAULT_ECHARTS_SRC.to_string()
}

/// Load `config/chart.*` if present, then `CHART__SECTION__KEY` overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/chart")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("CHART").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let config = load_app_config_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.render.output_path, "out/chart.html");
        assert_eq!(config.render.echarts_src, DEFAULT_ECHARTS_SRC);
        assert_eq!(config.style, ChartStyle::default());
    }

    #[test]
    fn test_file_overrides_selected_style_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        std::fs::write(
            &path,
            "[server]\nbind = \"127.0.0.1:9000\"\n\n[style]\nline_width = 3\nx_axis_name = \"时间\"\n",
        )
        .unwrap();

        let config = load_app_config_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.style.line_width, 3);
        assert_eq!(config.style.x_axis_name, "时间");
        assert_eq!(config.style.grid_right, 140);
        assert_eq!(config.render.output_path, "out/chart.html");
    }
}
