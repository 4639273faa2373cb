//! Activity heatmap engine: week bucketing, summary statistics, geometry,
//! and SVG output. Every function here is a pure transform of its inputs.

pub mod aggregate;
pub mod format;
pub mod layout;
pub mod level;
pub mod svg;

use heatmap_core::{ActivityRecord, Catalog, RenderConfig};

pub use aggregate::{
    WeekBucket, bucket_by_week, bucket_total, compute_stats, compute_weekday_averages,
    week_offset,
};
pub use format::{format_count, format_currency, xml_escape};
pub use layout::{HeatmapLayout, compute_layout, resolve_palette};
pub use level::{assign_levels, to_level};
pub use svg::to_svg;

/// Renders `series` to an SVG document using the standard catalog.
pub fn render(series: &[ActivityRecord], config: &RenderConfig) -> String {
    render_with(series, config, &Catalog::STANDARD)
}

pub fn render_with(series: &[ActivityRecord], config: &RenderConfig, catalog: &Catalog) -> String {
    to_svg(&compute_layout(series, config, catalog))
}
