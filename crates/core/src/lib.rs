mod catalog;

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

pub use catalog::{Catalog, DEFAULT_PALETTE, Palette};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBreakdown {
    #[serde(rename = "model", alias = "label")]
    pub label: String,
    pub cost: f64,
}

/// One calendar day of usage as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub date: NaiveDate,
    #[serde(rename = "count", alias = "cost")]
    pub cost: f64,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_hit_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_breakdowns: Vec<ModelBreakdown>,
}

/// Level stored for a wire value outside 0..=4; renders with the lowest color.
pub const UNKNOWN_LEVEL: u8 = u8::MAX;

struct LevelVisitor;

impl LevelVisitor {
    fn from_i64(value: i64) -> u8 {
        if (0..=4).contains(&value) {
            value as u8
        } else {
            UNKNOWN_LEVEL
        }
    }
}

impl<'de> Visitor<'de> for LevelVisitor {
    type Value = u8;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a color level")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u8, E> {
        Ok(Self::from_i64(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u8, E> {
        Ok(i64::try_from(value).map_or(UNKNOWN_LEVEL, Self::from_i64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u8, E> {
        if value.fract() == 0.0 && (0.0..=4.0).contains(&value) {
            Ok(value as u8)
        } else {
            Ok(UNKNOWN_LEVEL)
        }
    }

    fn visit_str<E: de::Error>(self, _value: &str) -> Result<u8, E> {
        Ok(UNKNOWN_LEVEL)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<u8, E> {
        Ok(UNKNOWN_LEVEL)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u8, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u8, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u8, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}

/// Levels are advisory: anything outside 0..=4 maps to [`UNKNOWN_LEVEL`]
/// instead of rejecting the whole series.
fn lenient_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    deserializer.deserialize_any(LevelVisitor)
}

impl ActivityRecord {
    pub fn new(date: NaiveDate, cost: f64, level: u8) -> Self {
        Self {
            date,
            cost,
            level,
            input_tokens: None,
            output_tokens: None,
            total_tokens: None,
            cache_hit_rate: None,
            model_breakdowns: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.cost > 0.0
    }

    /// Weekday index with Sunday as 0.
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }
}

/// The highest-cost day of a series. `date` is `None` when no day had activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakDay {
    pub cost: f64,
    pub date: Option<NaiveDate>,
}

impl PeakDay {
    pub const NONE: PeakDay = PeakDay {
        cost: 0.0,
        date: None,
    };

    pub fn date_label(&self) -> String {
        self.date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Default for PeakDay {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub total_cost: f64,
    pub daily_avg: f64,
    pub weekly_avg: f64,
    pub peak: PeakDay,
    pub active_days: usize,
    pub total_days: usize,
}

/// Per-weekday averages over active days, indexed Sunday first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAverages {
    pub averages: [f64; 7],
    pub counts: [usize; 7],
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Which statistics panel entries are drawn. Always fully expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsToggles {
    pub daily_avg: bool,
    pub weekly_avg: bool,
    pub peak: bool,
    pub active_days: bool,
}

impl StatsToggles {
    pub const fn all(enabled: bool) -> Self {
        Self {
            daily_avg: enabled,
            weekly_avg: enabled,
            peak: enabled,
            active_days: enabled,
        }
    }

    pub fn any(&self) -> bool {
        self.daily_avg || self.weekly_avg || self.peak || self.active_days
    }
}

impl Default for StatsToggles {
    fn default() -> Self {
        Self::all(true)
    }
}

/// Inclusive bounds applied to the series before bucketing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub cell_size: f64,
    pub cell_gap: f64,
    pub cell_radius: f64,
    pub color_scheme: ColorScheme,
    pub theme: Option<String>,
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub stats: StatsToggles,
    pub show_weekday_distribution: bool,
    pub week_start: Weekday,
    pub date_range: DateRange,
    pub hide_month_labels: bool,
    pub hide_total_count: bool,
    pub show_weekday_labels: bool,
}

impl RenderConfig {
    /// Defaults for the standalone SVG document.
    pub fn document() -> Self {
        Self {
            cell_size: 16.0,
            cell_gap: 4.0,
            cell_radius: 3.0,
            color_scheme: ColorScheme::Light,
            theme: None,
            background: None,
            text_color: None,
            stats: StatsToggles::default(),
            show_weekday_distribution: true,
            week_start: Weekday::Sun,
            date_range: DateRange::default(),
            hide_month_labels: false,
            hide_total_count: false,
            show_weekday_labels: true,
        }
    }

    /// Defaults for the in-browser view, which uses a denser grid.
    pub fn interactive() -> Self {
        Self {
            cell_size: 12.0,
            cell_gap: 3.0,
            cell_radius: 2.0,
            ..Self::document()
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::document()
    }
}

/// Maps 0 = Sunday .. 6 = Saturday to a weekday.
pub fn weekday_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
