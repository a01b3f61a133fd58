//! Placeholder placement computation.
//!
//! Longitudes come from a fixed mixing formula over the Julian Day and the
//! observer's coordinates — deterministic, well-spread across the zodiac,
//! and cheap. The sidereal variant shifts the same longitudes by a
//! Lahiri-style mean ayanamsha before sign lookup.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use ming_ganzhi::balance_map;
use ming_time::{J2000_JD, julian_day};

use crate::placement_types::{
    BodyPosition, SiderealCalcMode, SiderealResult, TropicalResult, WesternCalcMode,
};
use crate::sign::{ALL_PLANETS, ALL_WESTERN_ELEMENTS, Planet, Sign, WesternElement};

/// Daily advance of the placeholder base longitude, in degrees.
const BASE_RATE_DEG_PER_DAY: f64 = 13.37;

/// Per-body spacing of the placeholder longitudes, in degrees.
const BODY_SPACING_DEG: f64 = 27.5;

/// Weight of the observer's coordinates in the placeholder longitude.
const GEO_WEIGHT: f64 = 0.1;

/// Lahiri reference ayanamsha at J2000.0, in degrees.
const LAHIRI_J2000_DEG: f64 = 23.853;

/// Placeholder longitude for body `index` at a UTC instant and location.
fn placeholder_longitude_deg(index: usize, utc: &DateTime<Utc>, lat: f64, lon: f64) -> f64 {
    let base = (julian_day(utc) * BASE_RATE_DEG_PER_DAY).rem_euclid(360.0);
    let offset = (index as f64 + 1.0) * BODY_SPACING_DEG;
    let geo = (lat + lon) * GEO_WEIGHT;
    (base + offset + geo).rem_euclid(360.0)
}

/// Lahiri-style mean ayanamsha in degrees at a UTC instant.
///
/// Reference value at J2000 plus the leading terms of the IAU general
/// precession in ecliptic longitude (arcseconds per Julian century).
pub fn lahiri_mean_ayanamsha_deg(utc: &DateTime<Utc>) -> f64 {
    let t = (julian_day(utc) - J2000_JD) / 36_525.0;
    LAHIRI_J2000_DEG + (5_028.796_195 * t + 1.105_434_8 * t * t) / 3600.0
}

/// Classify a longitude and tally its element.
fn place(longitude_deg: f64, counts: &mut BTreeMap<WesternElement, u32>) -> BodyPosition {
    let sign = Sign::from_longitude(longitude_deg);
    let element = sign.element();
    *counts.entry(element).or_default() += 1;
    BodyPosition {
        longitude_deg,
        sign,
        element,
    }
}

fn empty_element_counts() -> BTreeMap<WesternElement, u32> {
    ALL_WESTERN_ELEMENTS.iter().map(|&e| (e, 0)).collect()
}

/// Tropical placements for the ten bodies.
pub fn tropical_placements(utc: &DateTime<Utc>, lat: f64, lon: f64) -> TropicalResult {
    let mut counts = empty_element_counts();
    let mut bodies: BTreeMap<Planet, BodyPosition> = BTreeMap::new();

    for (index, &planet) in ALL_PLANETS.iter().enumerate() {
        let longitude = placeholder_longitude_deg(index, utc, lat, lon);
        bodies.insert(planet, place(longitude, &mut counts));
    }

    TropicalResult {
        reference_frame_id: "tropical".to_owned(),
        calculation_mode: WesternCalcMode::placeholder(),
        bodies,
        elements: balance_map(&counts),
    }
}

/// Sidereal placements: tropical longitudes minus the mean ayanamsha.
pub fn sidereal_placements(utc: &DateTime<Utc>, lat: f64, lon: f64) -> SiderealResult {
    let ayanamsha = lahiri_mean_ayanamsha_deg(utc);
    let mut counts = empty_element_counts();
    let mut bodies: BTreeMap<Planet, BodyPosition> = BTreeMap::new();

    for (index, &planet) in ALL_PLANETS.iter().enumerate() {
        let tropical = placeholder_longitude_deg(index, utc, lat, lon);
        let sidereal = (tropical - ayanamsha).rem_euclid(360.0);
        bodies.insert(planet, place(sidereal, &mut counts));
    }

    SiderealResult {
        reference_frame_id: "sidereal".to_owned(),
        calculation_mode: SiderealCalcMode::placeholder(),
        ayanamsha_deg: ayanamsha,
        bodies,
        elements: balance_map(&counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 1, 2, 3, 30, 0).unwrap()
    }

    #[test]
    fn ten_bodies_placed() {
        let result = tropical_placements(&sample_instant(), 52.37, 4.89);
        assert_eq!(result.bodies.len(), 10);
        assert_eq!(result.elements.len(), 4);
    }

    #[test]
    fn element_ratios_normalized() {
        let result = tropical_placements(&sample_instant(), 52.37, 4.89);
        let ratio_sum: f64 = result.elements.values().map(|b| b.ratio).sum();
        assert!((ratio_sum - 1.0).abs() < 1e-6);
        let total: u32 = result.elements.values().map(|b| b.count).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn bodies_spaced_by_constant_offset() {
        let result = tropical_placements(&sample_instant(), 0.0, 0.0);
        let sun = result.bodies[&Planet::Sun].longitude_deg;
        let moon = result.bodies[&Planet::Moon].longitude_deg;
        let gap = (moon - sun).rem_euclid(360.0);
        assert!((gap - BODY_SPACING_DEG).abs() < 1e-9, "gap {gap}");
    }

    #[test]
    fn ayanamsha_magnitude_modern_era() {
        let aya = lahiri_mean_ayanamsha_deg(&sample_instant());
        assert!((23.0..24.5).contains(&aya), "got {aya}");
    }

    #[test]
    fn sidereal_shifts_by_ayanamsha() {
        let utc = sample_instant();
        let tropical = tropical_placements(&utc, 52.37, 4.89);
        let sidereal = sidereal_placements(&utc, 52.37, 4.89);
        for planet in &ALL_PLANETS {
            let t = tropical.bodies[planet].longitude_deg;
            let s = sidereal.bodies[planet].longitude_deg;
            let shift = (t - s).rem_euclid(360.0);
            assert!((shift - sidereal.ayanamsha_deg).abs() < 1e-9);
        }
    }

    #[test]
    fn deterministic() {
        let a = tropical_placements(&sample_instant(), 52.37, 4.89);
        let b = tropical_placements(&sample_instant(), 52.37, 4.89);
        assert_eq!(a, b);
    }
}
