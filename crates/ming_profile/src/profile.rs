//! Energy-profile assembly.
//!
//! Orchestration is a single pass: normalize the input, run both Western
//! placements on the UTC instant, run the pillar engine on the local
//! instant, and stitch the results together with the version/mode echo maps
//! the boundary contract exposes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ming_bazi::{BaziChart, chart_for_local};
use ming_western::{SiderealResult, TropicalResult, sidereal_placements, tropical_placements};

use crate::error::ProfileError;
use crate::input::{BirthInput, normalize_birth_input};

/// The combined profile returned on the JSON boundary. Field names are
/// stable; enumerated identifiers serialize as their string tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub birth_utc_datetime: String,
    pub birth_local_datetime_resolved: String,
    pub tz_offset_minutes_at_birth: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub calc_versions: BTreeMap<String, String>,
    pub calculation_modes: BTreeMap<String, Value>,
    pub western_tropical: TropicalResult,
    pub western_sidereal: SiderealResult,
    pub chinese_bazi: BaziChart,
}

/// Compute the full energy profile for a birth input.
pub fn energy_profile(input: &BirthInput) -> Result<EnergyProfile, ProfileError> {
    let normalized = normalize_birth_input(input)?;

    let western_tropical =
        tropical_placements(&normalized.utc, normalized.latitude, normalized.longitude);
    let western_sidereal =
        sidereal_placements(&normalized.utc, normalized.latitude, normalized.longitude);
    let chinese_bazi = chart_for_local(&normalized.local);

    let calc_versions = BTreeMap::from([
        ("western_tropical".to_owned(), "v1".to_owned()),
        ("western_sidereal".to_owned(), "v1".to_owned()),
        ("chinese_bazi".to_owned(), "v1".to_owned()),
    ]);
    let calculation_modes = BTreeMap::from([
        (
            "western_tropical".to_owned(),
            serde_json::to_value(&western_tropical.calculation_mode)?,
        ),
        (
            "western_sidereal".to_owned(),
            serde_json::to_value(&western_sidereal.calculation_mode)?,
        ),
        (
            "chinese_bazi".to_owned(),
            serde_json::to_value(&chinese_bazi.calculation_mode)?,
        ),
    ]);

    Ok(EnergyProfile {
        birth_utc_datetime: normalized.utc.to_rfc3339(),
        birth_local_datetime_resolved: normalized.local.to_rfc3339(),
        tz_offset_minutes_at_birth: normalized.tz_offset_minutes,
        latitude: normalized.latitude,
        longitude: normalized.longitude,
        altitude: normalized.altitude,
        calc_versions,
        calculation_modes,
        western_tropical,
        western_sidereal,
        chinese_bazi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_carries_normalized_instants() {
        let input = BirthInput {
            birth_date: "1990-01-02".to_owned(),
            birth_time: Some("04:30".to_owned()),
            utc_offset_minutes: 60,
            latitude: Some(52.37),
            longitude: Some(4.89),
            altitude: None,
            time_unknown: false,
        };
        let profile = energy_profile(&input).unwrap();
        assert_eq!(profile.birth_utc_datetime, "1990-01-02T03:30:00+00:00");
        assert_eq!(
            profile.birth_local_datetime_resolved,
            "1990-01-02T04:30:00+01:00"
        );
        assert_eq!(profile.tz_offset_minutes_at_birth, 60);
        assert_eq!(profile.calc_versions.len(), 3);
        assert_eq!(profile.calculation_modes.len(), 3);
    }

    #[test]
    fn invalid_input_propagates() {
        let input = BirthInput {
            birth_date: "not-a-date".to_owned(),
            birth_time: None,
            utc_offset_minutes: 0,
            latitude: None,
            longitude: None,
            altitude: None,
            time_unknown: false,
        };
        assert!(energy_profile(&input).is_err());
    }
}
