/// Market session and timing utilities
///
/// All checks convert to exchange-local time (US equities, New York) so the
/// host time zone and DST transitions never affect the result.
use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Utc};
use chrono_tz::America::New_York;

use crate::error::{MonitorError, Result};

/// Parse a session boundary from config ("HH:MM" or "HH:MM:SS")
pub fn parse_session_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| MonitorError::InvalidSessionTime(format!("Unparseable time: {}", s)))
}

/// Check if the instant falls on a trading day (Monday to Friday, exchange-local)
pub fn is_trading_day(now: DateTime<Utc>) -> bool {
    let now_et = now.with_timezone(&New_York);

    // Monday = 0 .. Sunday = 6
    now_et.weekday().num_days_from_monday() < 5
}

/// Check if the market is open: weekday and within [open, close] exchange-local.
/// Both boundaries are inclusive.
pub fn is_market_open(now: DateTime<Utc>, open: NaiveTime, close: NaiveTime) -> bool {
    if !is_trading_day(now) {
        return false;
    }

    let current_time = now.with_timezone(&New_York).time();
    current_time >= open && current_time <= close
}

/// Get the next weekday open instant at or after `now`, for wait logging
pub fn next_market_open(now: DateTime<Utc>, open: NaiveTime) -> DateTime<Utc> {
    let now_et = now.with_timezone(&New_York);
    let mut date = now_et.date_naive();

    // If today's open already passed, start from tomorrow
    if now_et.time() >= open {
        date = date.succ_opt().unwrap_or(date);
    }

    loop {
        if date.weekday().num_days_from_monday() < 5 {
            // LocalResult::single is None only inside a DST gap; the NYSE
            // open never falls in one, but step past it if it ever did
            if let Some(dt) = New_York.from_local_datetime(&date.and_time(open)).single() {
                return dt.with_timezone(&Utc);
            }
        }
        date = match date.succ_opt() {
            Some(d) => d,
            None => return now,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nyse_open() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 30, 0).unwrap()
    }

    fn nyse_close() -> NaiveTime {
        NaiveTime::from_hms_opt(16, 0, 0).unwrap()
    }

    fn et(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        New_York
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_open_during_session() {
        // Wednesday 2025-01-15 10:30 ET
        assert!(is_market_open(et(2025, 1, 15, 10, 30), nyse_open(), nyse_close()));
    }

    #[test]
    fn test_closed_before_open_and_after_close() {
        assert!(!is_market_open(et(2025, 1, 15, 9, 0), nyse_open(), nyse_close()));
        assert!(!is_market_open(et(2025, 1, 15, 16, 1), nyse_open(), nyse_close()));
    }

    #[test]
    fn test_boundaries_inclusive() {
        assert!(is_market_open(et(2025, 1, 15, 9, 30), nyse_open(), nyse_close()));
        assert!(is_market_open(et(2025, 1, 15, 16, 0), nyse_open(), nyse_close()));
    }

    #[test]
    fn test_closed_on_weekend() {
        // Saturday / Sunday, mid-session time
        assert!(!is_market_open(et(2025, 1, 18, 12, 0), nyse_open(), nyse_close()));
        assert!(!is_market_open(et(2025, 1, 19, 12, 0), nyse_open(), nyse_close()));
    }

    #[test]
    fn test_dst_boundaries() {
        // 10:00 New York is in-session whether ET is EST (January, UTC-5)
        // or EDT (July, UTC-4); the corresponding UTC instants differ
        let winter = et(2025, 1, 15, 10, 0);
        let summer = et(2025, 7, 16, 10, 0);
        assert_eq!(winter.time(), chrono::NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(summer.time(), chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert!(is_market_open(winter, nyse_open(), nyse_close()));
        assert!(is_market_open(summer, nyse_open(), nyse_close()));

        // 20:30 UTC is 15:30 ET in winter (open) but 16:30 ET in summer (closed)
        let winter_utc = Utc.with_ymd_and_hms(2025, 1, 15, 20, 30, 0).unwrap();
        let summer_utc = Utc.with_ymd_and_hms(2025, 7, 16, 20, 30, 0).unwrap();
        assert!(is_market_open(winter_utc, nyse_open(), nyse_close()));
        assert!(!is_market_open(summer_utc, nyse_open(), nyse_close()));
    }

    #[test]
    fn test_next_market_open_same_day() {
        // Wednesday 08:00 ET -> same day 09:30 ET
        let next = next_market_open(et(2025, 1, 15, 8, 0), nyse_open());
        assert_eq!(next, et(2025, 1, 15, 9, 30));
    }

    #[test]
    fn test_next_market_open_skips_weekend() {
        // Friday 17:00 ET -> Monday 09:30 ET
        let next = next_market_open(et(2025, 1, 17, 17, 0), nyse_open());
        assert_eq!(next, et(2025, 1, 20, 9, 30));
    }

    #[test]
    fn test_parse_session_time_formats() {
        assert_eq!(
            parse_session_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_session_time("16:00:00").unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap()
        );
        assert!(parse_session_time("9.30am").is_err());
    }
}
