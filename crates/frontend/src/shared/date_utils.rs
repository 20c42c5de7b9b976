//! Utilities for date handling in the simulation panel.

use chrono::{Duration, NaiveDate};

/// Format a date the way the results table displays it.
/// Example: 2024-01-01 -> "Mon Jan 01 2024"
pub fn format_day_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// The calendar date `offset` days after `start`.
pub fn date_at_offset(start: NaiveDate, offset: u32) -> NaiveDate {
    start + Duration::days(i64::from(offset))
}

/// Parse the value of an `<input type="date">` (yyyy-mm-dd).
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// First and last day of the given month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)? - Duration::days(1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)? - Duration::days(1)
    };
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_day_date(date), "Mon Jan 01 2024");
    }

    #[test]
    fn test_date_at_offset() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            format_day_date(date_at_offset(start, 2)),
            "Wed Jan 03 2024"
        );
        assert_eq!(date_at_offset(start, 0), start);
        // Offsets cross month boundaries.
        assert_eq!(
            date_at_offset(start, 31),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_input_date("invalid"), None);
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_month_bounds() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (start, end) = month_bounds(2023, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }
}
