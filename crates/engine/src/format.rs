use heatmap_core::ActivityRecord;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// US dollars with two decimals and thousands separators, e.g. `$1,234.50`.
/// Half-cent ties round away from zero.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Escapes text for element content and attribute values. Line breaks
/// become character references so multi-line tooltips survive.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            other => out.push(other),
        }
    }
    out
}

/// `2024` for a single-year series, `2023~2024` when it spans years.
pub fn year_label(series: &[ActivityRecord]) -> Option<String> {
    let first = series.first()?.date.format("%Y").to_string();
    let last = series.last()?.date.format("%Y").to_string();
    if first == last {
        Some(first)
    } else {
        Some(format!("{first}~{last}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(0.004), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(12.0), "$12.00");
        assert_eq!(format_currency(-3.5), "-$3.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn currency_half_cent_rounds_up() {
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(2.625), "$2.63");
        assert_eq!(format_currency(0.375), "$0.38");
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }

    #[test]
    fn escapes_markup_and_newlines() {
        assert_eq!(
            xml_escape("a<b> & \"c\" 'd'\ne"),
            "a&lt;b&gt; &amp; &quot;c&quot; &apos;d&apos;&#10;e"
        );
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn year_labels() {
        let day = |value: &str| {
            ActivityRecord::new(
                NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("date"),
                0.0,
                0,
            )
        };
        assert_eq!(year_label(&[]), None);
        assert_eq!(
            year_label(&[day("2024-01-01"), day("2024-12-31")]).as_deref(),
            Some("2024")
        );
        assert_eq!(
            year_label(&[day("2023-12-31"), day("2024-01-01")]).as_deref(),
            Some("2023~2024")
        );
    }
}
