use chrono::{Datelike, Days, NaiveDate, Weekday};

use heatmap_core::{ActivityRecord, DerivedStats, PeakDay, WeekdayAverages};

/// Consecutive records of one calendar week, borrowed from the series.
pub type WeekBucket<'a> = &'a [ActivityRecord];

/// Days between `week_start` and the weekday of `date`.
pub fn week_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

fn week_key(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = u64::from(week_offset(date, week_start));
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Splits an ordered series into week buckets.
///
/// A bucket closes when the next record falls in a later calendar week,
/// which for a gap-free series is exactly when a record lands on
/// `week_start`. A gap that skips over `week_start` still closes the
/// bucket. Short first and last buckets are kept as they are.
pub fn bucket_by_week(series: &[ActivityRecord], week_start: Weekday) -> Vec<WeekBucket<'_>> {
    let mut buckets = Vec::new();
    let mut start = 0;
    let mut current_key = None;

    for (idx, record) in series.iter().enumerate() {
        let key = week_key(record.date, week_start);
        match current_key {
            Some(open) if open != key => {
                buckets.push(&series[start..idx]);
                start = idx;
                current_key = Some(key);
            }
            None => current_key = Some(key),
            _ => {}
        }
    }
    if start < series.len() {
        buckets.push(&series[start..]);
    }
    buckets
}

pub fn bucket_total(bucket: WeekBucket<'_>) -> f64 {
    bucket.iter().map(|record| record.cost).sum()
}

/// Averages cost per weekday (Sunday first) over days with positive cost.
pub fn compute_weekday_averages(series: &[ActivityRecord]) -> WeekdayAverages {
    let mut totals = [0.0f64; 7];
    let mut counts = [0usize; 7];
    for record in series.iter().filter(|record| record.is_active()) {
        let dow = record.weekday_index();
        totals[dow] += record.cost;
        counts[dow] += 1;
    }

    let mut averages = [0.0f64; 7];
    for (dow, average) in averages.iter_mut().enumerate() {
        if counts[dow] > 0 {
            *average = totals[dow] / counts[dow] as f64;
        }
    }
    let max = averages.iter().copied().fold(0.0, f64::max);

    WeekdayAverages {
        averages,
        counts,
        max,
    }
}

/// Headline numbers for a series.
///
/// `daily_avg` divides by active days while `weekly_avg` divides by active
/// weeks; both are zero when nothing is active.
pub fn compute_stats(series: &[ActivityRecord], buckets: &[WeekBucket<'_>]) -> DerivedStats {
    let total_cost: f64 = series.iter().map(|record| record.cost).sum();
    let active_days = series.iter().filter(|record| record.is_active()).count();
    let daily_avg = if active_days > 0 {
        total_cost / active_days as f64
    } else {
        0.0
    };

    let peak = series
        .iter()
        .filter(|record| record.is_active())
        .fold(PeakDay::NONE, |peak, record| {
            if record.cost > peak.cost {
                PeakDay {
                    cost: record.cost,
                    date: Some(record.date),
                }
            } else {
                peak
            }
        });

    let active_weeks: Vec<f64> = buckets
        .iter()
        .map(|bucket| bucket_total(bucket))
        .filter(|total| *total > 0.0)
        .collect();
    let weekly_avg = if active_weeks.is_empty() {
        0.0
    } else {
        active_weeks.iter().sum::<f64>() / active_weeks.len() as f64
    };

    DerivedStats {
        total_cost,
        daily_avg,
        weekly_avg,
        peak,
        active_days,
        total_days: series.len(),
    }
}
