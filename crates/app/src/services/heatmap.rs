use heatmap_core::{ActivityRecord, Catalog, RenderConfig};
use heatmap_engine::{HeatmapLayout, compute_layout, to_svg};

use crate::config::RenderParams;
use crate::error::Result;
use crate::services::SharedConfig;

/// Which surface the output is drawn for; each has its own geometry defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    Document,
    Interactive,
}

impl RenderTarget {
    fn defaults(self) -> RenderConfig {
        match self {
            Self::Document => RenderConfig::document(),
            Self::Interactive => RenderConfig::interactive(),
        }
    }
}

#[derive(Clone)]
pub struct HeatmapService {
    config: SharedConfig,
}

impl HeatmapService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// Target defaults, then the settings document, then request options.
    pub fn render_config(&self, target: RenderTarget, params: &RenderParams) -> Result<RenderConfig> {
        let merged = self.config.heatmap.apply(target.defaults())?;
        params.apply(merged)
    }

    pub fn layout(
        &self,
        series: &[ActivityRecord],
        target: RenderTarget,
        params: &RenderParams,
    ) -> Result<HeatmapLayout> {
        let config = self.render_config(target, params)?;
        Ok(compute_layout(series, &config, &Catalog::STANDARD))
    }

    pub fn svg(&self, series: &[ActivityRecord], params: &RenderParams) -> Result<String> {
        let layout = self.layout(series, RenderTarget::Document, params)?;
        tracing::debug!(
            width = layout.width,
            height = layout.height,
            cells = layout.cells.len(),
            "rendered heatmap"
        );
        Ok(to_svg(&layout))
    }
}
