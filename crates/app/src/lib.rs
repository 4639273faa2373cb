pub mod app;
pub mod artifact;
pub mod config;
pub mod error;
pub mod services;
pub mod util;

pub use app::{AppConfig, AppState, SvgOutcome};
pub use artifact::error_svg;
pub use config::{HeatmapConfig, RenderParams, StatsFields, StatsSetting};
pub use error::{ApiError, AppError, Result};
pub use services::{AppServices, RenderTarget, load_series, parse_series};
pub use util::time::{parse_date, resolve_range};
