//! Relative-time and clock formatting for the status page.

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Formats elapsed whole seconds as a coarse `"N <unit> ago"` string.
///
/// First matching bucket wins: under a minute counts seconds, under an hour
/// minutes, under a day hours, then days. Counts floor (90 seconds is
/// `"1 minutes ago"`) and the unit is always plural. No localization.
pub fn relative_from_secs(elapsed: i64) -> String {
    if elapsed < SECS_PER_MINUTE {
        format!("{elapsed} seconds ago")
    } else if elapsed < SECS_PER_HOUR {
        format!("{} minutes ago", elapsed / SECS_PER_MINUTE)
    } else if elapsed < SECS_PER_DAY {
        format!("{} hours ago", elapsed / SECS_PER_HOUR)
    } else {
        format!("{} days ago", elapsed / SECS_PER_DAY)
    }
}

/// Relative age of `earlier` as seen from `now`.
pub fn relative_time(earlier: DateTime<Utc>, now: DateTime<Utc>) -> String {
    relative_from_secs((now - earlier).num_seconds())
}

/// Header clock readout, e.g. `Aug 23, 2026, 3:45:07 PM`.
pub fn clock_readout(now: DateTime<Utc>) -> String {
    now.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_seconds_bucket() {
        assert_eq!(relative_from_secs(0), "0 seconds ago");
        assert_eq!(relative_from_secs(1), "1 seconds ago");
        assert_eq!(relative_from_secs(59), "59 seconds ago");
    }

    /// Bucket boundaries sit exactly on the unit thresholds.
    #[test]
    fn test_minutes_bucket_boundaries() {
        assert_eq!(relative_from_secs(60), "1 minutes ago");
        assert_eq!(relative_from_secs(90), "1 minutes ago");
        assert_eq!(relative_from_secs(3_599), "59 minutes ago");
    }

    #[test]
    fn test_hours_bucket_boundaries() {
        assert_eq!(relative_from_secs(3_600), "1 hours ago");
        assert_eq!(relative_from_secs(7_199), "1 hours ago");
        assert_eq!(relative_from_secs(86_399), "23 hours ago");
    }

    #[test]
    fn test_days_bucket_is_open_ended() {
        assert_eq!(relative_from_secs(86_400), "1 days ago");
        assert_eq!(relative_from_secs(86_400 * 30), "30 days ago");
        assert_eq!(relative_from_secs(86_400 * 365), "365 days ago");
    }

    /// Counts always use the plural form, even at exactly one unit.
    #[test]
    fn test_always_plural() {
        assert_eq!(relative_from_secs(1), "1 seconds ago");
        assert_eq!(relative_from_secs(60), "1 minutes ago");
        assert_eq!(relative_from_secs(3_600), "1 hours ago");
        assert_eq!(relative_from_secs(86_400), "1 days ago");
    }

    #[test]
    fn test_relative_time_uses_whole_seconds() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "30 seconds ago");
        assert_eq!(relative_time(now - Duration::minutes(2), now), "2 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hours ago");
        assert_eq!(relative_time(now, now), "0 seconds ago");
    }

    #[test]
    fn test_clock_readout_afternoon() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 15, 45, 7).unwrap();
        assert_eq!(clock_readout(now), "Aug 23, 2026, 3:45:07 PM");
    }

    /// Twelve-hour clock: midnight hour renders as 12 AM, no zero padding
    /// on day or hour.
    #[test]
    fn test_clock_readout_midnight_hour() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 0, 5, 9).unwrap();
        assert_eq!(clock_readout(now), "Jan 2, 2026, 12:05:09 AM");
    }

    #[test]
    fn test_clock_readout_noon() {
        let now = Utc.with_ymd_and_hms(2026, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(clock_readout(now), "Dec 31, 2026, 12:00:00 PM");
    }
}
