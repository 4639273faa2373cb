mod data;
mod heatmap;

use std::sync::Arc;

use crate::app::AppConfig;

pub use data::{DataService, load_series, parse_series};
pub use heatmap::{HeatmapService, RenderTarget};

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub data: DataService,
    pub heatmap: HeatmapService,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            data: DataService::new(shared.clone()),
            heatmap: HeatmapService::new(shared),
        }
    }
}
