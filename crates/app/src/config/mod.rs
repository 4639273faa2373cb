mod params;

use std::path::Path;

use serde::{Deserialize, Serialize};

use heatmap_core::{ColorScheme, RenderConfig, StatsToggles, weekday_from_index};

use crate::error::{AppError, Result};
use crate::util::time::resolve_range;

pub use params::{RenderParams, parse_flag, parse_num};

/// Statistics toggle as written by users: one switch for the whole panel,
/// or per entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatsSetting {
    All(bool),
    Fields(StatsFields),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_avg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_avg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_days: Option<bool>,
}

impl StatsSetting {
    /// Expands the shorthand; unset fields in the record form keep `base`.
    pub fn expand(&self, base: StatsToggles) -> StatsToggles {
        match self {
            Self::All(enabled) => StatsToggles::all(*enabled),
            Self::Fields(fields) => StatsToggles {
                daily_avg: fields.daily_avg.unwrap_or(base.daily_avg),
                weekly_avg: fields.weekly_avg.unwrap_or(base.weekly_avg),
                peak: fields.peak.unwrap_or(base.peak),
                active_days: fields.active_days.unwrap_or(base.active_days),
            },
        }
    }
}

/// Heatmap settings document (`heatmap.config.json` or the `[heatmap]`
/// table of the CLI config). Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_month_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_total_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_weekday_labels: Option<bool>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

impl HeatmapConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|err| AppError::InvalidInput(format!("parse {}: {}", path.display(), err)))
    }

    /// Layers these settings over `base`. Numbers must be finite and
    /// non-negative; unknown color schemes and week starts are ignored.
    pub fn apply(&self, mut base: RenderConfig) -> Result<RenderConfig> {
        let geometry = [
            (self.block_size, &mut base.cell_size),
            (self.block_margin, &mut base.cell_gap),
            (self.block_radius, &mut base.cell_radius),
        ];
        for (value, slot) in geometry {
            if let Some(value) = value.filter(|value| value.is_finite() && *value >= 0.0) {
                *slot = value;
            }
        }
        if let Some(scheme) = self.color_scheme.as_deref().and_then(ColorScheme::parse) {
            base.color_scheme = scheme;
        }
        if let Some(theme) = non_empty(&self.theme) {
            base.theme = Some(theme.to_string());
        }
        if let Some(bg) = non_empty(&self.bg) {
            base.background = Some(bg.to_string());
        }
        if let Some(color) = non_empty(&self.text_color) {
            base.text_color = Some(color.to_string());
        }
        if non_empty(&self.start).is_some() || non_empty(&self.end).is_some() {
            let range = resolve_range(self.start.as_deref(), self.end.as_deref())?;
            if range.start.is_some() {
                base.date_range.start = range.start;
            }
            if range.end.is_some() {
                base.date_range.end = range.end;
            }
        }
        if let Some(stats) = &self.stats {
            base.stats = stats.expand(base.stats);
        }
        if let Some(weekday) = self.weekday {
            base.show_weekday_distribution = weekday;
        }
        if let Some(week_start) = self.week_start.and_then(weekday_from_index) {
            base.week_start = week_start;
        }
        if let Some(hide) = self.hide_month_labels {
            base.hide_month_labels = hide;
        }
        if let Some(hide) = self.hide_total_count {
            base.hide_total_count = hide;
        }
        if let Some(show) = self.show_weekday_labels {
            base.show_weekday_labels = show;
        }
        Ok(base)
    }
}
