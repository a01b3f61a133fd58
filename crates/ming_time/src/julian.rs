//! Gregorian calendar to Julian Day conversion.
//!
//! Classical algorithm: January and February are counted as months 13 and 14
//! of the previous year, and the century term `b = 2 - a + a/4` restores the
//! leap days the Gregorian reform dropped. Each intermediate truncation must
//! truncate toward zero, not round — the day fraction rides on top of exact
//! integer day counts, and a rounded term shifts every date near a month edge.
//!
//! Behavior for proleptic dates before the Gregorian reform is unspecified.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Continuous Julian Day for a civil timestamp.
///
/// The timestamp is converted to UTC before the calendar arithmetic, so the
/// same instant expressed in any fixed offset yields the same Julian Day.
pub fn julian_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);
    let mut year = utc.year() as i64;
    let mut month = utc.month() as i64;
    let day = utc.day() as f64;
    let hours = utc.hour() as f64
        + utc.minute() as f64 / 60.0
        + utc.second() as f64 / 3600.0
        + utc.nanosecond() as f64 / 3.6e12;

    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year / 100;
    let b = 2 - a + a / 4;

    (365.25 * (year as f64 + 4716.0)) as i64 as f64
        + (30.6001 * (month as f64 + 1.0)) as i64 as f64
        + day
        + hours / 24.0
        + b as f64
        - 1524.5
}

/// Integer Julian Day Number of the civil day containing the instant.
///
/// The JDN increments at 00:00 UTC, half a day after the continuous Julian
/// Day ticks over at noon.
pub fn julian_day_number<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    (julian_day(dt) + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn j2000_epoch() {
        let jd = julian_day(&utc(2000, 1, 1, 12, 0, 0));
        assert!((jd - J2000_JD).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn new_year_1999() {
        // 1999 Jan 1.0 = JD 2451179.5
        let jd = julian_day(&utc(1999, 1, 1, 0, 0, 0));
        assert!((jd - 2_451_179.5).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn february_previous_year_branch() {
        // 1985 Feb 17.25 = JD 2446113.75
        let jd = julian_day(&utc(1985, 2, 17, 6, 0, 0));
        assert!((jd - 2_446_113.75).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn fractional_day() {
        let jd = julian_day(&utc(1990, 1, 2, 3, 30, 0));
        assert!((jd - 2_447_893.645_833_333).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn fixed_offset_matches_utc_equivalent() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let local = tz.with_ymd_and_hms(1990, 1, 2, 4, 30, 0).unwrap();
        let jd_local = julian_day(&local);
        let jd_utc = julian_day(&utc(1990, 1, 2, 3, 30, 0));
        assert_eq!(jd_local, jd_utc);
    }

    #[test]
    fn day_number_increments_at_midnight_utc() {
        assert_eq!(julian_day_number(&utc(1999, 12, 31, 23, 59, 59)), 2_451_544);
        assert_eq!(julian_day_number(&utc(2000, 1, 1, 0, 0, 0)), 2_451_545);
        assert_eq!(julian_day_number(&utc(2000, 1, 1, 12, 0, 0)), 2_451_545);
        assert_eq!(julian_day_number(&utc(2000, 1, 1, 23, 59, 59)), 2_451_545);
    }

    #[test]
    fn day_number_for_local_instant() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let local = tz.with_ymd_and_hms(1990, 1, 2, 4, 30, 0).unwrap();
        assert_eq!(julian_day_number(&local), 2_447_894);
    }
}
