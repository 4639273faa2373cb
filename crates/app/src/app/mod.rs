use std::path::PathBuf;

use crate::artifact::error_svg;
use crate::config::{HeatmapConfig, RenderParams};
use crate::error::{AppError, Result};
use crate::services::AppServices;

/// Where the series lives and how it should be drawn by default.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub heatmap: HeatmapConfig,
    pub requantize: bool,
}

/// Application state shared by the CLI and the HTTP API.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

/// Result of an SVG request: either the heatmap or an error artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgOutcome {
    pub status: u16,
    pub body: String,
}

impl AppState {
    pub fn new(data_path: PathBuf, heatmap: HeatmapConfig) -> Self {
        let config = AppConfig {
            data_path,
            heatmap,
            requantize: false,
        };
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let services = AppServices::new(&config);
        Self { config, services }
    }

    pub fn render_svg(&self, params: &RenderParams) -> Result<String> {
        let series = self.services.data.load()?;
        self.services.heatmap.svg(&series, params)
    }

    /// Never fails: data or option problems become a small error artifact.
    pub fn render_svg_or_artifact(&self, params: &RenderParams) -> SvgOutcome {
        match self.render_svg(params) {
            Ok(body) => SvgOutcome { status: 200, body },
            Err(err) => {
                tracing::warn!(error = %err, "heatmap render failed");
                let (status, message) = match &err {
                    err if err.is_data_unavailable() => (500, "data.json not found".to_string()),
                    AppError::InvalidInput(message) => (400, message.clone()),
                    other => (500, other.to_string()),
                };
                SvgOutcome {
                    status,
                    body: error_svg(&message),
                }
            }
        }
    }
}
