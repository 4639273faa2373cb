use serde::Deserialize;

use heatmap_core::{ColorScheme, RenderConfig, StatsToggles, weekday_from_index};

use crate::error::Result;
use crate::util::time::resolve_range;

/// Raw query-string options. Values stay strings so malformed numbers and
/// flags fall back to defaults instead of rejecting the request.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    pub color_scheme: Option<String>,
    pub theme: Option<String>,
    pub block_size: Option<String>,
    pub block_margin: Option<String>,
    pub block_radius: Option<String>,
    pub bg: Option<String>,
    pub text_color: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub stats: Option<String>,
    pub daily_avg: Option<String>,
    pub weekly_avg: Option<String>,
    pub peak: Option<String>,
    pub active_days: Option<String>,
    pub weekday: Option<String>,
    pub week_start: Option<String>,
    pub hide_month_labels: Option<String>,
    pub hide_total_count: Option<String>,
    pub show_weekday_labels: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub fn parse_num(value: &Option<String>) -> Option<f64> {
    present(value)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
}

pub fn parse_flag(value: &Option<String>) -> Option<bool> {
    match present(value)? {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

impl RenderParams {
    /// Layers query options over `base`.
    ///
    /// `stats=false` switches the whole panel off; otherwise the four
    /// per-entry flags override individually.
    pub fn apply(&self, mut base: RenderConfig) -> Result<RenderConfig> {
        if let Some(size) = parse_num(&self.block_size) {
            base.cell_size = size;
        }
        if let Some(gap) = parse_num(&self.block_margin) {
            base.cell_gap = gap;
        }
        if let Some(radius) = parse_num(&self.block_radius) {
            base.cell_radius = radius;
        }
        if let Some(scheme) = present(&self.color_scheme).and_then(ColorScheme::parse) {
            base.color_scheme = scheme;
        }
        if let Some(theme) = present(&self.theme) {
            base.theme = Some(theme.to_string());
        }
        if let Some(bg) = present(&self.bg) {
            base.background = Some(bg.to_string());
        }
        if let Some(color) = present(&self.text_color) {
            base.text_color = Some(color.to_string());
        }

        let range = resolve_range(self.start.as_deref(), self.end.as_deref())?;
        if range.start.is_some() {
            base.date_range.start = range.start;
        }
        if range.end.is_some() {
            base.date_range.end = range.end;
        }

        if parse_flag(&self.stats) == Some(false) {
            base.stats = StatsToggles::all(false);
        } else {
            let overrides = [
                (&self.daily_avg, &mut base.stats.daily_avg),
                (&self.weekly_avg, &mut base.stats.weekly_avg),
                (&self.peak, &mut base.stats.peak),
                (&self.active_days, &mut base.stats.active_days),
            ];
            for (value, slot) in overrides {
                if let Some(flag) = parse_flag(value) {
                    *slot = flag;
                }
            }
        }

        if let Some(weekday) = parse_flag(&self.weekday) {
            base.show_weekday_distribution = weekday;
        }
        if let Some(week_start) = present(&self.week_start)
            .and_then(|value| value.parse::<u32>().ok())
            .and_then(weekday_from_index)
        {
            base.week_start = week_start;
        }
        if let Some(hide) = parse_flag(&self.hide_month_labels) {
            base.hide_month_labels = hide;
        }
        if let Some(hide) = parse_flag(&self.hide_total_count) {
            base.hide_total_count = hide;
        }
        if let Some(show) = parse_flag(&self.show_weekday_labels) {
            base.show_weekday_labels = show;
        }
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn params(pairs: &[(&str, &str)]) -> RenderParams {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), serde_json::Value::from(*value)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).expect("params")
    }

    #[test]
    fn lenient_numbers_fall_back() {
        let render = params(&[("blockSize", "abc"), ("blockMargin", "2"), ("blockRadius", "")])
            .apply(RenderConfig::document())
            .expect("apply");
        assert_eq!(render.cell_size, 16.0);
        assert_eq!(render.cell_gap, 2.0);
        assert_eq!(render.cell_radius, 3.0);
    }

    #[test]
    fn stats_false_disables_every_entry() {
        let render = params(&[("stats", "false"), ("peak", "true")])
            .apply(RenderConfig::document())
            .expect("apply");
        assert_eq!(render.stats, StatsToggles::all(false));
    }

    #[test]
    fn stats_entries_override_individually() {
        let render = params(&[("dailyAvg", "0"), ("activeDays", "false"), ("peak", "maybe")])
            .apply(RenderConfig::document())
            .expect("apply");
        assert!(!render.stats.daily_avg);
        assert!(render.stats.weekly_avg);
        assert!(render.stats.peak);
        assert!(!render.stats.active_days);
    }

    #[test]
    fn scheme_theme_and_week_start() {
        let render = params(&[
            ("colorScheme", "dark"),
            ("theme", "orange"),
            ("weekStart", "6"),
            ("weekday", "false"),
            ("showWeekdayLabels", "0"),
        ])
        .apply(RenderConfig::interactive())
        .expect("apply");
        assert_eq!(render.color_scheme, ColorScheme::Dark);
        assert_eq!(render.theme.as_deref(), Some("orange"));
        assert_eq!(render.week_start, Weekday::Sat);
        assert!(!render.show_weekday_distribution);
        assert!(!render.show_weekday_labels);
        assert_eq!(render.cell_size, 12.0);
    }

    #[test]
    fn query_range_overrides_config_bound() {
        let mut base = RenderConfig::document();
        base.date_range.start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1);
        base.date_range.end = chrono::NaiveDate::from_ymd_opt(2024, 12, 31);
        let render = params(&[("start", "2024-06-01")])
            .apply(base)
            .expect("apply");
        assert_eq!(render.date_range.start, chrono::NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(render.date_range.end, chrono::NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn invalid_date_is_an_error() {
        assert!(params(&[("end", "2024-13-01")])
            .apply(RenderConfig::document())
            .is_err());
    }
}
