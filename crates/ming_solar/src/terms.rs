//! Solar-term boundary search: day scan plus bisection refinement.
//!
//! The 24 term boundaries are the multiples of 15 degrees of solar
//! longitude. The locator walks a calendar year in one-day steps, watching
//! the wrapped angular difference against the next undiscovered target, and
//! bisects inside any day that brackets a crossing.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::{debug, warn};

use crate::longitude::apparent_solar_longitude_deg;

/// Number of solar terms per year.
pub const TERM_COUNT: usize = 24;

/// Angular spacing between consecutive term boundaries, in degrees.
pub const TERM_SPACING_DEG: f64 = 15.0;

/// Fixed bisection depth used to refine a crossing inside a one-day bracket.
///
/// 40 halvings of 86400 seconds resolve the instant to well under a
/// microsecond. The count is a reproducible stopping rule: results must be
/// stable bit-for-bit across runs and reimplementations, so the refinement
/// never loops on a tolerance.
pub const CROSSING_BISECTIONS: u32 = 40;

/// One solar-term boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerm {
    /// Term index 0..23; index k sits at longitude (15 * k) mod 360.
    pub term_index: u8,
    /// Target longitude of this boundary in degrees.
    pub longitude_deg: f64,
    /// Instant of the crossing, UTC.
    pub timestamp: DateTime<Utc>,
}

impl SolarTerm {
    /// Major terms (even index) mark year and month boundaries.
    pub const fn is_major(&self) -> bool {
        self.term_index % 2 == 0
    }
}

/// Signed angular distance from `current` to `target`, in (-180, 180].
///
/// The branch cut sits opposite the target, so the value crosses zero
/// exactly when the longitude crosses the target.
fn wrap_diff(target_deg: f64, current_deg: f64) -> f64 {
    let diff = (target_deg - current_deg).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// Bisect the crossing instant of `target_deg` inside `[start, end]`.
///
/// Keeps the half-interval whose endpoints still straddle the zero of the
/// wrapped difference. Returns the left endpoint after the fixed number of
/// halvings (or immediately, if the left endpoint sits exactly on the
/// boundary).
fn find_crossing(start: DateTime<Utc>, end: DateTime<Utc>, target_deg: f64) -> DateTime<Utc> {
    let mut left = start;
    let mut right = end;
    for _ in 0..CROSSING_BISECTIONS {
        let mid = left + (right - left) / 2;
        let diff_left = wrap_diff(target_deg, apparent_solar_longitude_deg(&left));
        let diff_mid = wrap_diff(target_deg, apparent_solar_longitude_deg(&mid));
        if diff_left == 0.0 {
            return left;
        }
        if diff_left * diff_mid <= 0.0 {
            right = mid;
        } else {
            left = mid;
        }
    }
    left
}

/// Locate the solar-term crossings of a calendar year, in time order.
///
/// Scans UTC days from Jan 1 to the next Jan 1. Targets are taken strictly
/// in index order, one pointer, never rewound: longitude grows monotonically
/// through the year, and its single 360-to-0 wrap lines up with the target
/// wrap. A day is consumed once a term is found in it, so a second crossing
/// in the same day would go undetected (two terms never fall that close with
/// real orbital geometry).
///
/// The list may be shorter than [`TERM_COUNT`]: targets that the longitude
/// only reaches before the pointer gets to them (the stretch between the
/// year's start longitude and 0 degrees) are never brought into view.
/// Callers must not assume a full set — in particular the 315-degree entry
/// is routinely absent.
pub fn solar_terms_for_year(year: i32) -> Vec<SolarTerm> {
    let (Some(start), Some(end)) = (
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single(),
        Utc.with_ymd_and_hms(year.saturating_add(1), 1, 1, 0, 0, 0).single(),
    ) else {
        warn!(year, "calendar year out of range, returning no solar terms");
        return Vec::new();
    };

    let mut terms = Vec::with_capacity(TERM_COUNT);
    let mut current = start;
    let mut target_index = 0u8;

    while current < end && (target_index as usize) < TERM_COUNT {
        let next_day = current + Duration::days(1);
        let target_deg = (target_index as f64 * TERM_SPACING_DEG).rem_euclid(360.0);
        let diff_current = wrap_diff(target_deg, apparent_solar_longitude_deg(&current));
        let diff_next = wrap_diff(target_deg, apparent_solar_longitude_deg(&next_day));

        if diff_current == 0.0 || diff_current * diff_next <= 0.0 {
            let crossing = find_crossing(current, next_day, target_deg);
            terms.push(SolarTerm {
                term_index: target_index,
                longitude_deg: target_deg,
                timestamp: crossing,
            });
            target_index += 1;
        }
        current = next_day;
    }

    if terms.len() < TERM_COUNT {
        debug!(
            year,
            found = terms.len(),
            "solar-term scan ended short of the full set"
        );
    }
    terms
}

/// Major terms (even index) of a calendar year, in time order.
pub fn major_terms_for_year(year: i32) -> Vec<SolarTerm> {
    solar_terms_for_year(year)
        .into_iter()
        .filter(SolarTerm::is_major)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_diff_zero_at_target() {
        assert_eq!(wrap_diff(90.0, 90.0), 0.0);
    }

    #[test]
    fn wrap_diff_signed_range() {
        assert_eq!(wrap_diff(10.0, 350.0), 20.0);
        assert_eq!(wrap_diff(350.0, 10.0), -20.0);
        assert_eq!(wrap_diff(180.0, 0.0), 180.0);
    }

    #[test]
    fn wrap_diff_sign_flips_across_crossing() {
        let before = wrap_diff(0.0, 359.9);
        let after = wrap_diff(0.0, 0.1);
        assert!(before > 0.0, "got {before}");
        assert!(after < 0.0, "got {after}");
    }

    #[test]
    fn crossing_refines_to_boundary() {
        let terms = solar_terms_for_year(2024);
        let first = &terms[0];
        let residual = wrap_diff(
            first.longitude_deg,
            apparent_solar_longitude_deg(&first.timestamp),
        );
        assert!(residual.abs() < 1e-6, "got {residual}");
    }

    #[test]
    fn out_of_range_year_is_empty() {
        assert!(solar_terms_for_year(i32::MAX - 1).is_empty());
    }
}
