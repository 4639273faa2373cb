use heatmap_core::ActivityRecord;

/// Quantizes `cost` against the series maximum at 25/50/75% thresholds.
pub fn to_level(cost: f64, max_cost: f64) -> u8 {
    if cost <= 0.0 || max_cost <= 0.0 {
        return 0;
    }
    let ratio = cost / max_cost;
    if ratio <= 0.25 {
        1
    } else if ratio <= 0.5 {
        2
    } else if ratio <= 0.75 {
        3
    } else {
        4
    }
}

/// Recomputes every record's level from its cost.
pub fn assign_levels(series: &mut [ActivityRecord]) {
    let max_cost = series.iter().map(|record| record.cost).fold(0.0, f64::max);
    for record in series.iter_mut() {
        record.level = to_level(record.cost, max_cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn thresholds() {
        assert_eq!(to_level(0.0, 10.0), 0);
        assert_eq!(to_level(5.0, 0.0), 0);
        assert_eq!(to_level(2.5, 10.0), 1);
        assert_eq!(to_level(2.6, 10.0), 2);
        assert_eq!(to_level(5.0, 10.0), 2);
        assert_eq!(to_level(7.5, 10.0), 3);
        assert_eq!(to_level(7.6, 10.0), 4);
        assert_eq!(to_level(10.0, 10.0), 4);
    }

    #[test]
    fn assigns_against_series_max() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).expect("date");
        let mut series: Vec<ActivityRecord> = [0.0, 1.0, 4.0, 8.0]
            .iter()
            .enumerate()
            .map(|(idx, cost)| ActivityRecord::new(date + chrono::Days::new(idx as u64), *cost, 9))
            .collect();
        assign_levels(&mut series);
        let levels: Vec<u8> = series.iter().map(|record| record.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 4]);
    }
}
