use crate::error::{invalid_date, invalid_time, SalonResult};
use chrono::{NaiveDate, NaiveTime};

/// Parse a time string in HH:MM 24-hour format
///
/// Rejects malformed input with a typed error instead of letting it
/// propagate into comparisons.
pub fn parse_time(time_str: &str) -> SalonResult<NaiveTime> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return Err(invalid_time(time_str));
    }
    let hour = parts[0]
        .parse::<u32>()
        .map_err(|_| invalid_time(time_str))?;
    let minute = parts[1]
        .parse::<u32>()
        .map_err(|_| invalid_time(time_str))?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid_time(time_str))
}

/// Parse a date string in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> SalonResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| invalid_date(date_str))
}

/// Minutes since midnight for a time-of-day value
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    time.signed_duration_since(NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default())
        .num_minutes()
}

/// All dates from `start` to `end` inclusive, in order
///
/// Returns an empty list when `end` is before `start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(
            parse_time("00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("12:30").unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );

        // Invalid cases
        assert!(parse_time("24:00").is_err()); // Hour out of range
        assert!(parse_time("12:60").is_err()); // Minute out of range
        assert!(parse_time("12:30:45").is_err()); // Too many parts
        assert!(parse_time("12").is_err()); // Too few parts
        assert!(parse_time("12:ab").is_err()); // Invalid minute
        assert!(parse_time("ab:30").is_err()); // Invalid hour
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-18").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
        );
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("18.3.2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0);
        assert_eq!(
            minutes_of_day(NaiveTime::from_hms_opt(10, 30, 0).unwrap()),
            630
        );
        assert_eq!(
            minutes_of_day(NaiveTime::from_hms_opt(23, 59, 0).unwrap()),
            1439
        );
    }

    #[test]
    fn test_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 24).unwrap();

        let dates = date_range(start, end);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], start);
        assert_eq!(dates[6], end);

        // Single-day range
        assert_eq!(date_range(start, start).len(), 1);

        // Reversed range is empty
        assert!(date_range(end, start).is_empty());
    }
}
