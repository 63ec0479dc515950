//! Friendly day labels for forecast rows.
//!
//! All functions take the reference "today" explicitly so output does not
//! depend on the wall clock.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Compact date format used for stored forecast dates, e.g. `20150603`.
pub const STORED_DATE_FORMAT: &str = "%Y%m%d";

/// Labels for `date` as shown in the forecast list:
///
/// - today: `"Today, June 24"`
/// - within the next week: the day name (`"Tomorrow"`, `"Wednesday"`)
/// - later: `"Wed Jun 03"`
pub fn friendly_day(date: NaiveDate, today: NaiveDate) -> String {
    let days_ahead = date.signed_duration_since(today).num_days();
    if days_ahead == 0 {
        format!("Today, {}", month_day(date))
    } else if days_ahead < 7 {
        day_name(date, today)
    } else {
        date.format("%a %b %d").to_string()
    }
}

/// Labels `date` as `"<day name>, <Month dd>"`, e.g. `"Tomorrow, June 25"`.
pub fn full_friendly_day(date: NaiveDate, today: NaiveDate) -> String {
    format!("{}, {}", day_name(date, today), month_day(date))
}

/// Returns `"Today"`, `"Tomorrow"` or the full weekday name.
pub fn day_name(date: NaiveDate, today: NaiveDate) -> String {
    match date.signed_duration_since(today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A").to_string(),
    }
}

/// Formats `date` as `"June 08"`.
pub fn month_day(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}

/// Formats `date` as a medium date, e.g. `"Jun 3, 2015"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Converts a Unix timestamp in milliseconds to the calendar date at `offset`.
///
/// Returns `None` if the timestamp is out of range.
pub fn date_from_millis(millis: i64, offset: FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&offset).date_naive())
}

/// Parses a date in [`STORED_DATE_FORMAT`].
pub fn parse_stored_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, STORED_DATE_FORMAT).ok()
}

/// Formats a date in [`STORED_DATE_FORMAT`].
pub fn to_stored_date(date: NaiveDate) -> String {
    date.format(STORED_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // A Wednesday.
    fn today() -> NaiveDate {
        ymd(2015, 6, 24)
    }

    #[test]
    fn test_friendly_day() {
        assert_eq!(friendly_day(today(), today()), "Today, June 24");
        assert_eq!(friendly_day(ymd(2015, 6, 25), today()), "Tomorrow");
        assert_eq!(friendly_day(ymd(2015, 6, 27), today()), "Saturday");
        assert_eq!(friendly_day(ymd(2015, 6, 30), today()), "Tuesday");
        assert_eq!(friendly_day(ymd(2015, 7, 1), today()), "Wed Jul 01");
    }

    #[test]
    fn test_full_friendly_day() {
        assert_eq!(full_friendly_day(today(), today()), "Today, June 24");
        assert_eq!(full_friendly_day(ymd(2015, 6, 25), today()), "Tomorrow, June 25");
        assert_eq!(full_friendly_day(ymd(2015, 7, 3), today()), "Friday, July 03");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2015, 6, 3)), "Jun 3, 2015");
    }

    #[test]
    fn test_date_from_millis_respects_offset() {
        // 2015-06-24T23:30:00Z
        let millis = 1_435_188_600_000;
        let utc = FixedOffset::east_opt(0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        assert_eq!(date_from_millis(millis, utc), Some(ymd(2015, 6, 24)));
        assert_eq!(date_from_millis(millis, tokyo), Some(ymd(2015, 6, 25)));
        assert_eq!(date_from_millis(i64::MAX, utc), None);
    }

    #[test]
    fn test_stored_date() {
        assert_eq!(parse_stored_date("20150603"), Some(ymd(2015, 6, 3)));
        assert_eq!(parse_stored_date("2015-06-03"), None);
        assert_eq!(to_stored_date(ymd(2014, 1, 2)), "20140102");
    }
}
