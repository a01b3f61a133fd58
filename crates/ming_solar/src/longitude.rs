//! Apparent solar ecliptic longitude, low-precision series.
//!
//! Mean longitude plus mean anomaly with two equation-of-center correction
//! terms. Accurate to a fraction of a degree over the modern era, which is
//! sufficient here: term-boundary instants are refined by bisection on this
//! same function, so the series only has to be smooth and monotonic over a
//! day, not astronomically exact. Do not substitute a higher-order series —
//! downstream fixtures are pinned to this one.

use chrono::{DateTime, TimeZone};
use ming_time::{J2000_JD, julian_day};

/// Apparent ecliptic longitude of the sun in degrees, wrapped to [0, 360).
pub fn apparent_solar_longitude_deg<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let n = julian_day(dt) - J2000_JD;
    let mean_longitude = (280.460 + 0.985_647_4 * n).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.985_600_3 * n).rem_euclid(360.0).to_radians();
    (mean_longitude + 1.915 * mean_anomaly.sin() + 0.020 * (2.0 * mean_anomaly).sin())
        .rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn longitude_at_j2000() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let lon = apparent_solar_longitude_deg(&dt);
        // n = 0: 280.460 + 1.915 sin(357.528 deg) + 0.020 sin(715.056 deg)
        assert!((lon - 280.376).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn longitude_in_range() {
        for day in 1..=28 {
            let dt = Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap();
            let lon = apparent_solar_longitude_deg(&dt);
            assert!((0.0..360.0).contains(&lon), "day {day}: {lon}");
        }
    }

    #[test]
    fn advances_roughly_one_degree_per_day() {
        let a = apparent_solar_longitude_deg(&Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
        let b = apparent_solar_longitude_deg(&Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap());
        let step = (b - a).rem_euclid(360.0);
        assert!((0.8..1.2).contains(&step), "got {step}");
    }

    #[test]
    fn near_zero_at_march_equinox() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 20, 4, 0, 0).unwrap();
        let lon = apparent_solar_longitude_deg(&dt);
        let dist = lon.min(360.0 - lon);
        assert!(dist < 1.0, "got {lon}");
    }
}
