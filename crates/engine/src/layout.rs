//! Geometry for every element of the heatmap.
//!
//! [`compute_layout`] produces a [`HeatmapLayout`] holding absolute pixel
//! positions and final text. Serializers (SVG, or an interactive client
//! reading the JSON form) only walk it; they never recompute geometry.

use chrono::Datelike;
use serde::Serialize;

use heatmap_core::{
    ActivityRecord, Catalog, ColorScheme, DerivedStats, Palette, RenderConfig, WeekdayAverages,
};

use crate::aggregate::{
    WeekBucket, bucket_by_week, compute_stats, compute_weekday_averages, week_offset,
};
use crate::format::{format_count, format_currency, year_label};

pub const PAD: f64 = 16.0;
pub const LABEL_W: f64 = 36.0;
pub const HEADER_H: f64 = 24.0;
/// Space below the grid for the legend and the total line.
pub const FOOTER_H: f64 = 36.0;
pub const STATS_H: f64 = 50.0;
pub const WEEKDAY_H: f64 = 180.0;

const LEGEND_CAPTION_W: f64 = 40.0;
const LEGEND_TRAILING_W: f64 = 60.0;
const STATS_COLUMN_W: f64 = 200.0;
const BAR_LABEL_W: f64 = 36.0;
const BAR_ROW_H: f64 = 22.0;
const BAR_H: f64 = 14.0;
const BAR_RADIUS: f64 = 3.0;
const BAR_RESERVED_W: f64 = 100.0;
const DAY_LABEL_ROWS: [u32; 3] = [1, 3, 5];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub background: String,
    pub text_color: String,
    pub sub_color: &'static str,
    pub divider_color: &'static str,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub rect: Rect,
    pub fill: &'static str,
    pub date: chrono::NaiveDate,
    pub level: u8,
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub rect: Rect,
    pub fill: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub less: TextLabel,
    pub more: TextLabel,
    pub swatches: Vec<Swatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Divider {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// `label: value suffix`, with the value emphasized when drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatItem {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub value: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPanel {
    pub divider: Divider,
    pub items: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayBar {
    pub label: TextLabel,
    pub rect: Rect,
    pub fill: &'static str,
    pub value: TextLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayPanel {
    pub title: TextLabel,
    pub bars: Vec<WeekdayBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapLayout {
    pub width: f64,
    pub height: f64,
    pub style: ResolvedStyle,
    pub month_labels: Vec<TextLabel>,
    pub day_labels: Vec<TextLabel>,
    pub cells: Vec<Cell>,
    pub legend: Legend,
    pub total_line: Option<TextLabel>,
    pub stats_panel: Option<StatsPanel>,
    pub weekday_panel: Option<WeekdayPanel>,
    pub stats: DerivedStats,
    pub weekday: WeekdayAverages,
}

/// Theme name first, then the color scheme's palette, then the default.
pub fn resolve_palette(config: &RenderConfig, catalog: &Catalog) -> &'static Palette {
    config
        .theme
        .as_deref()
        .filter(|name| !name.is_empty())
        .and_then(|name| catalog.palette(name))
        .or_else(|| catalog.palette(config.color_scheme.as_str()))
        .unwrap_or_else(|| catalog.default_palette())
}

pub fn resolve_style(config: &RenderConfig, catalog: &Catalog) -> ResolvedStyle {
    let dark = config.color_scheme == ColorScheme::Dark;
    let (background, text_color) = if dark {
        ("#0d1117", "#c9d1d9")
    } else {
        ("transparent", "#24292f")
    };
    let non_empty = |value: &Option<String>| value.clone().filter(|value| !value.is_empty());
    ResolvedStyle {
        background: non_empty(&config.background).unwrap_or_else(|| background.to_string()),
        text_color: non_empty(&config.text_color).unwrap_or_else(|| text_color.to_string()),
        sub_color: if dark { "#8b949e" } else { "#666" },
        divider_color: if dark { "#30363d" } else { "#d0d7de" },
        palette: *resolve_palette(config, catalog),
    }
}

/// Lowest palette entry for levels outside the palette.
fn level_color(palette: &Palette, level: u8) -> &'static str {
    palette
        .get(usize::from(level))
        .copied()
        .unwrap_or(palette[0])
}

/// Palette index for a bar whose magnitude is `relative` of the maximum.
fn bar_color(palette: &Palette, relative: f64) -> &'static str {
    let top = (palette.len() - 1) as f64;
    let idx = (relative * top).ceil().clamp(0.0, top);
    palette[idx as usize]
}

fn tooltip_lines(record: &ActivityRecord, catalog: &Catalog) -> Vec<String> {
    let day_name = catalog.day_names[record.weekday_index()];
    let mut lines = vec![format!("{} ({day_name})", record.date.format("%Y-%m-%d"))];
    if !record.is_active() {
        lines.push("No data".to_string());
        return lines;
    }

    lines.push(format!("Cost: {}", format_currency(record.cost)));
    if let Some(input) = record.input_tokens {
        lines.push(format!(
            "In: {} / Out: {}",
            format_count(input),
            format_count(record.output_tokens.unwrap_or(0))
        ));
    }
    if let Some(total) = record.total_tokens.filter(|total| *total > 0) {
        lines.push(format!("Total: {}", format_count(total)));
    }
    if let Some(rate) = record.cache_hit_rate {
        lines.push(format!("Cache hit: {rate}%"));
    }
    for breakdown in &record.model_breakdowns {
        lines.push(format!(
            "{}: {}",
            breakdown.label,
            format_currency(breakdown.cost)
        ));
    }
    lines
}

fn compute_month_labels(
    buckets: &[WeekBucket<'_>],
    catalog: &Catalog,
    origin_x: f64,
    step: f64,
) -> Vec<TextLabel> {
    let mut labels = Vec::new();
    let mut previous = None;
    for (week, bucket) in buckets.iter().enumerate() {
        let Some(first) = bucket.first() else {
            continue;
        };
        let month = (first.date.year(), first.date.month0());
        if previous != Some(month) {
            labels.push(TextLabel {
                x: origin_x + week as f64 * step,
                y: PAD + 14.0,
                text: catalog.months[month.1 as usize].to_string(),
            });
            previous = Some(month);
        }
    }
    labels
}

fn stats_items(
    stats: &DerivedStats,
    config: &RenderConfig,
    stats_y: f64,
) -> Vec<StatItem> {
    let mut entries = Vec::with_capacity(4);
    if config.stats.daily_avg {
        entries.push(("Daily avg", format_currency(stats.daily_avg), String::new()));
    }
    if config.stats.weekly_avg {
        entries.push(("Weekly avg", format_currency(stats.weekly_avg), String::new()));
    }
    if config.stats.peak {
        entries.push((
            "Peak",
            format_currency(stats.peak.cost),
            format!(" ({})", stats.peak.date_label()),
        ));
    }
    if config.stats.active_days {
        entries.push((
            "Active",
            stats.active_days.to_string(),
            format!(" / {} days", stats.total_days),
        ));
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(slot, (label, value, suffix))| {
            let column = (slot % 2) as f64;
            let row = (slot / 2) as f64;
            StatItem {
                x: PAD + column * STATS_COLUMN_W,
                y: stats_y + 12.0 + row * 18.0,
                label,
                value,
                suffix,
            }
        })
        .collect()
}

fn build_weekday_panel(
    weekday: &WeekdayAverages,
    palette: &Palette,
    catalog: &Catalog,
    top: f64,
    bar_width: f64,
) -> WeekdayPanel {
    let bars = catalog
        .day_names
        .iter()
        .zip(weekday.averages.iter())
        .enumerate()
        .map(|(idx, (name, average))| {
            let bar_y = top + 14.0 + idx as f64 * BAR_ROW_H;
            let relative = if weekday.max > 0.0 {
                average / weekday.max
            } else {
                0.0
            };
            let length = relative * bar_width;
            WeekdayBar {
                label: TextLabel {
                    x: PAD,
                    y: bar_y + 12.0,
                    text: (*name).to_string(),
                },
                rect: Rect {
                    x: PAD + BAR_LABEL_W,
                    y: bar_y + 2.0,
                    width: length,
                    height: BAR_H,
                    radius: BAR_RADIUS,
                },
                fill: bar_color(palette, relative),
                value: TextLabel {
                    x: PAD + BAR_LABEL_W + 6.0 + length,
                    y: bar_y + 13.0,
                    text: format_currency(*average),
                },
            }
        })
        .collect();

    WeekdayPanel {
        title: TextLabel {
            x: PAD,
            y: top,
            text: "Avg by weekday".to_string(),
        },
        bars,
    }
}

/// Lays out the heatmap for `series` under `config`.
///
/// The series is filtered by the configured date range, then used in the
/// order given. Never fails: an empty series yields an empty grid with the
/// legend and whichever panels are enabled.
pub fn compute_layout(
    series: &[ActivityRecord],
    config: &RenderConfig,
    catalog: &Catalog,
) -> HeatmapLayout {
    let filtered: Vec<ActivityRecord>;
    let series = if config.date_range.is_unbounded() {
        series
    } else {
        filtered = series
            .iter()
            .filter(|record| config.date_range.contains(record.date))
            .cloned()
            .collect();
        &filtered
    };

    let style = resolve_style(config, catalog);
    let palette = style.palette;
    let block = config.cell_size;
    let gap = config.cell_gap;
    let step = block + gap;

    let buckets = bucket_by_week(series, config.week_start);
    let grid_x = PAD + LABEL_W;
    let grid_y = PAD + HEADER_H;
    let width = PAD * 2.0 + LABEL_W + buckets.len() as f64 * step + gap;
    let base_height = PAD * 2.0 + HEADER_H + 7.0 * step + gap + FOOTER_H;

    let month_labels = if config.hide_month_labels {
        Vec::new()
    } else {
        compute_month_labels(&buckets, catalog, grid_x, step)
    };

    let day_labels = if config.show_weekday_labels {
        let start = config.week_start.num_days_from_sunday();
        DAY_LABEL_ROWS
            .iter()
            .map(|row| TextLabel {
                x: PAD,
                y: grid_y + f64::from(*row) * step + block - 2.0,
                text: catalog.day_names[((start + row) % 7) as usize].to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let cells = buckets
        .iter()
        .enumerate()
        .flat_map(|(week, bucket)| bucket.iter().map(move |record| (week, record)))
        .map(|(week, record)| {
            let row = week_offset(record.date, config.week_start);
            Cell {
                rect: Rect {
                    x: grid_x + week as f64 * step,
                    y: grid_y + f64::from(row) * step,
                    width: block,
                    height: block,
                    radius: config.cell_radius,
                },
                fill: level_color(&palette, record.level),
                date: record.date,
                level: record.level,
                tooltip: tooltip_lines(record, catalog),
            }
        })
        .collect();

    let legend_x = width - PAD - palette.len() as f64 * step - LEGEND_TRAILING_W;
    let legend_y = grid_y + 7.0 * step + 10.0;
    let caption_y = legend_y + block - 1.0;
    let legend = Legend {
        less: TextLabel {
            x: legend_x,
            y: caption_y,
            text: "Less".to_string(),
        },
        more: TextLabel {
            x: legend_x + LEGEND_CAPTION_W + palette.len() as f64 * step,
            y: caption_y,
            text: "More".to_string(),
        },
        swatches: palette
            .iter()
            .enumerate()
            .map(|(idx, fill)| Swatch {
                rect: Rect {
                    x: legend_x + LEGEND_CAPTION_W + idx as f64 * step,
                    y: legend_y,
                    width: block,
                    height: block,
                    radius: config.cell_radius,
                },
                fill: *fill,
            })
            .collect(),
    };

    let stats = compute_stats(series, &buckets);
    let weekday = compute_weekday_averages(series);

    let total_line = (!config.hide_total_count).then(|| {
        let mut text = format!(
            "\u{1F4B0} Total: {} across {} days",
            format_currency(stats.total_cost),
            series.len()
        );
        if let Some(years) = year_label(series) {
            text.push_str(&format!(" ({years})"));
        }
        TextLabel {
            x: grid_x,
            y: caption_y,
            text,
        }
    });

    let show_stats = config.stats.any();
    let stats_y = legend_y + block + 20.0;
    let stats_panel = show_stats.then(|| StatsPanel {
        divider: Divider {
            x1: PAD,
            y1: stats_y - 6.0,
            x2: width - PAD,
            y2: stats_y - 6.0,
        },
        items: stats_items(&stats, config, stats_y),
    });

    let weekday_y = stats_y + if show_stats { STATS_H } else { 10.0 };
    let bar_width = (width - PAD * 2.0 - BAR_RESERVED_W).max(0.0);
    let weekday_panel = config
        .show_weekday_distribution
        .then(|| build_weekday_panel(&weekday, &palette, catalog, weekday_y, bar_width));

    let mut height = base_height;
    if show_stats {
        height += STATS_H;
    }
    if config.show_weekday_distribution {
        height += WEEKDAY_H;
    }

    HeatmapLayout {
        width,
        height,
        style,
        month_labels,
        day_labels,
        cells,
        legend,
        total_line,
        stats_panel,
        weekday_panel,
        stats,
        weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate, Weekday};
    use heatmap_core::{ModelBreakdown, StatsToggles};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("date")
    }

    fn series(start: &str, costs: &[f64]) -> Vec<ActivityRecord> {
        let first = date(start);
        costs
            .iter()
            .enumerate()
            .map(|(idx, cost)| {
                let level = if *cost > 0.0 { 2 } else { 0 };
                ActivityRecord::new(first + Days::new(idx as u64), *cost, level)
            })
            .collect()
    }

    #[test]
    fn grid_dimensions_follow_bucket_count() {
        // Sunday 2024-01-07 for three full weeks.
        let data = series("2024-01-07", &[1.0; 21]);
        let config = RenderConfig::document();
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);

        assert_eq!(layout.width, 16.0 * 2.0 + 36.0 + 3.0 * 20.0 + 4.0);
        let base = 16.0 * 2.0 + 24.0 + 7.0 * 20.0 + 4.0 + 36.0;
        assert_eq!(layout.height, base + STATS_H + WEEKDAY_H);
        assert_eq!(layout.cells.len(), 21);

        let first = &layout.cells[0];
        assert_eq!((first.rect.x, first.rect.y), (52.0, 40.0));
        let last = &layout.cells[20];
        assert_eq!((last.rect.x, last.rect.y), (52.0 + 2.0 * 20.0, 40.0 + 6.0 * 20.0));
    }

    #[test]
    fn panels_toggle_height() {
        let data = series("2024-01-07", &[1.0; 10]);
        let mut config = RenderConfig::document();
        config.stats = StatsToggles::all(false);
        config.show_weekday_distribution = false;
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);

        let base = PAD * 2.0 + HEADER_H + 7.0 * 20.0 + 4.0 + FOOTER_H;
        assert_eq!(layout.height, base);
        assert!(layout.stats_panel.is_none());
        assert!(layout.weekday_panel.is_none());

        config.show_weekday_distribution = true;
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);
        assert_eq!(layout.height, base + WEEKDAY_H);
        let panel = layout.weekday_panel.expect("weekday panel");
        let legend_y = PAD + HEADER_H + 7.0 * 20.0 + 10.0;
        assert_eq!(panel.title.y, legend_y + 16.0 + 20.0 + 10.0);
    }

    #[test]
    fn month_labels_mark_each_transition() {
        // Sunday 2024-01-21 through 2024-03-09 covers Jan, Feb, Mar.
        let data = series("2024-01-21", &[1.0; 49]);
        let layout = compute_layout(&data, &RenderConfig::document(), &Catalog::STANDARD);
        let months: Vec<&str> = layout
            .month_labels
            .iter()
            .map(|label| label.text.as_str())
            .collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar"]);
        // The week starting Sunday 2024-02-04 is the first bucket in February.
        assert_eq!(layout.month_labels[1].x, 52.0 + 2.0 * 20.0);
    }

    #[test]
    fn same_month_a_year_apart_is_labeled_twice() {
        let mut data = series("2023-01-01", &[1.0; 7]);
        data.extend(series("2024-01-07", &[1.0; 7]));
        let layout = compute_layout(&data, &RenderConfig::document(), &Catalog::STANDARD);
        assert_eq!(layout.month_labels.len(), 2);
    }

    #[test]
    fn unknown_level_uses_lowest_color() {
        let mut data = series("2024-01-07", &[3.0]);
        data[0].level = 9;
        let layout = compute_layout(&data, &RenderConfig::document(), &Catalog::STANDARD);
        assert_eq!(layout.cells[0].fill, "#ebedf0");
    }

    #[test]
    fn palette_resolution_order() {
        let catalog = Catalog::STANDARD;
        let mut config = RenderConfig::document();
        config.color_scheme = ColorScheme::Dark;
        assert_eq!(resolve_palette(&config, &catalog)[4], "#39d353");

        config.theme = Some("pink".to_string());
        assert_eq!(resolve_palette(&config, &catalog)[4], "#c71585");

        config.theme = Some("no-such-theme".to_string());
        assert_eq!(resolve_palette(&config, &catalog)[4], "#39d353");
    }

    #[test]
    fn tooltip_lists_enrichment() {
        let mut record = ActivityRecord::new(date("2024-01-08"), 1234.5, 4);
        record.input_tokens = Some(1_500_000);
        record.output_tokens = Some(20_000);
        record.total_tokens = Some(1_520_000);
        record.cache_hit_rate = Some(92.5);
        record.model_breakdowns = vec![ModelBreakdown {
            label: "opus".to_string(),
            cost: 1000.0,
        }];
        let lines = tooltip_lines(&record, &Catalog::STANDARD);
        assert_eq!(
            lines,
            vec![
                "2024-01-08 (Mon)",
                "Cost: $1,234.50",
                "In: 1,500,000 / Out: 20,000",
                "Total: 1,520,000",
                "Cache hit: 92.5%",
                "opus: $1,000.00",
            ]
        );
    }

    #[test]
    fn idle_day_tooltip() {
        let mut record = ActivityRecord::new(date("2024-01-06"), 0.0, 0);
        record.input_tokens = Some(10);
        let lines = tooltip_lines(&record, &Catalog::STANDARD);
        assert_eq!(lines, vec!["2024-01-06 (Sat)", "No data"]);
    }

    #[test]
    fn week_start_shifts_rows_and_day_labels() {
        let data = series("2024-01-08", &[1.0; 7]);
        let mut config = RenderConfig::document();
        config.week_start = Weekday::Mon;
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);

        assert_eq!(layout.cells.len(), 7);
        assert!(layout.cells.iter().all(|cell| cell.rect.x == 52.0));
        assert_eq!(layout.cells[0].rect.y, 40.0);
        assert_eq!(layout.cells[6].rect.y, 40.0 + 6.0 * 20.0);
        let names: Vec<&str> = layout
            .day_labels
            .iter()
            .map(|label| label.text.as_str())
            .collect();
        assert_eq!(names, vec!["Tue", "Thu", "Sat"]);
    }

    #[test]
    fn weekday_bars_scale_to_max() {
        // Five weeks from Sunday 2024-01-07: Sundays cost 8, Mondays 4, others idle.
        let costs: Vec<f64> = (0..35)
            .map(|idx| match idx % 7 {
                0 => 8.0,
                1 => 4.0,
                _ => 0.0,
            })
            .collect();
        let data = series("2024-01-07", &costs);
        let mut config = RenderConfig::document();
        config.stats = StatsToggles::all(false);
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);

        let panel = layout.weekday_panel.expect("panel");
        let bar_width = layout.width - PAD * 2.0 - 100.0;
        assert_eq!(bar_width, 40.0);
        assert_eq!(panel.bars.len(), 7);
        assert_eq!(panel.bars[0].rect.width, bar_width);
        assert_eq!(panel.bars[1].rect.width, bar_width / 2.0);
        assert_eq!(panel.bars[2].rect.width, 0.0);
        assert_eq!(panel.bars[0].fill, "#196127");
        assert_eq!(panel.bars[1].fill, "#7bc96f");
        assert_eq!(panel.bars[2].fill, "#ebedf0");
        assert_eq!(panel.bars[1].value.text, "$4.00");
    }

    #[test]
    fn stats_sub_toggles_fill_slots_in_order() {
        let data = series("2024-01-07", &[2.0, 0.0, 4.0]);
        let mut config = RenderConfig::document();
        config.stats = StatsToggles {
            daily_avg: false,
            weekly_avg: true,
            peak: true,
            active_days: false,
        };
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);
        let panel = layout.stats_panel.expect("stats panel");
        assert_eq!(panel.items.len(), 2);
        assert_eq!(panel.items[0].label, "Weekly avg");
        assert_eq!(panel.items[0].x, PAD);
        assert_eq!(panel.items[1].label, "Peak");
        assert_eq!(panel.items[1].x, PAD + 200.0);
        assert_eq!(panel.items[1].value, "$4.00");
        assert_eq!(panel.items[1].suffix, " (2024-01-09)");
    }

    #[test]
    fn date_range_filters_before_bucketing() {
        let data = series("2024-01-01", &[1.0; 31]);
        let mut config = RenderConfig::document();
        config.date_range.start = Some(date("2024-01-07"));
        config.date_range.end = Some(date("2024-01-13"));
        let layout = compute_layout(&data, &config, &Catalog::STANDARD);
        assert_eq!(layout.cells.len(), 7);
        assert_eq!(layout.stats.total_days, 7);
        assert_eq!(layout.width, PAD * 2.0 + LABEL_W + 20.0 + 4.0);
    }

    #[test]
    fn empty_series_still_lays_out() {
        let layout = compute_layout(&[], &RenderConfig::document(), &Catalog::STANDARD);
        assert!(layout.cells.is_empty());
        assert!(layout.month_labels.is_empty());
        assert_eq!(layout.width, PAD * 2.0 + LABEL_W + 4.0);
        assert_eq!(layout.legend.swatches.len(), 5);
        let total = layout.total_line.expect("total line");
        assert_eq!(total.text, "\u{1F4B0} Total: $0.00 across 0 days");
        let weekday = layout.weekday_panel.expect("weekday panel");
        assert!(weekday.bars.iter().all(|bar| bar.rect.width == 0.0));
    }

    #[test]
    fn legend_is_right_anchored() {
        let data = series("2024-01-07", &[1.0; 70]);
        let layout = compute_layout(&data, &RenderConfig::document(), &Catalog::STANDARD);
        let last = layout.legend.swatches.last().expect("swatch");
        assert_eq!(layout.legend.more.x, last.rect.x + 20.0);
        assert_eq!(layout.legend.more.x + LEGEND_TRAILING_W - LEGEND_CAPTION_W, layout.width - PAD);
    }
}
