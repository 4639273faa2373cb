use chrono::NaiveDate;

use heatmap_core::DateRange;

use crate::error::{AppError, Result};

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| AppError::InvalidInput(format!("invalid date {value:?}: {err}")))
}

/// Builds an inclusive range; blank bounds are treated as absent.
pub fn resolve_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
    let bound = |value: Option<&str>| -> Result<Option<NaiveDate>> {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => parse_date(value).map(Some),
            None => Ok(None),
        }
    };
    Ok(DateRange {
        start: bound(start)?,
        end: bound(end)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("2025-02-28").expect("date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 28).expect("date"));
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("28/02/2025").is_err());
    }

    #[test]
    fn blank_bounds_are_open() {
        let range = resolve_range(Some(""), None).expect("range");
        assert!(range.is_unbounded());
        let range = resolve_range(Some("2025-01-01"), Some(" 2025-01-31 ")).expect("range");
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 1, 31));
        assert!(matches!(
            resolve_range(None, Some("soon")),
            Err(AppError::InvalidInput(_))
        ));
    }
}
