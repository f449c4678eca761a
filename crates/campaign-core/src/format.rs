//! Display Formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a server date for campaign cards, e.g. `Jan 5, 2024`.
///
/// Accepts `YYYY-MM-DD`, naive ISO date-times (with or without fractional
/// seconds) and RFC 3339. Anything else is returned unchanged.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive())
}

/// Value for an `<input type="date">`
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
    }

    #[test]
    fn test_format_datetimes() {
        assert_eq!(format_date("2024-02-20T10:15:00.123456"), "Feb 20, 2024");
        assert_eq!(format_date("2024-02-20T10:15:00"), "Feb 20, 2024");
        assert_eq!(format_date("2024-07-04T23:00:00+00:00"), "Jul 4, 2024");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_date("next week"), "next week");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_input_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(input_date(date), "2024-03-09");
    }
}
