//! External birth input and its normalization.
//!
//! The input carries a calendar date, an optional wall-clock time, and a
//! fixed UTC offset in minutes. Normalization resolves the defaults (noon
//! when the time is absent or flagged unknown), coerces coordinates, and
//! produces the local/UTC instant pair the engines consume. This is the one
//! place invalid calendar input can fail; everything downstream assumes a
//! valid instant.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Wall-clock time substituted when the birth time is absent or unknown.
pub const DEFAULT_BIRTH_TIME: &str = "12:00";

/// Raw birth input as received on the JSON boundary.
///
/// Field aliases accept the camelCase spellings used by existing clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    #[serde(alias = "birthDate")]
    pub birth_date: String,
    #[serde(default, alias = "birthTime")]
    pub birth_time: Option<String>,
    #[serde(default, alias = "utcOffsetMinutes")]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default, alias = "timeUnknown")]
    pub time_unknown: bool,
}

/// Normalized birth moment: the same instant as local and UTC views.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBirth {
    pub local: DateTime<FixedOffset>,
    pub utc: DateTime<Utc>,
    pub tz_offset_minutes: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

/// Resolve defaults and build the local/UTC instant pair.
pub fn normalize_birth_input(input: &BirthInput) -> Result<NormalizedBirth, ProfileError> {
    let date = NaiveDate::parse_from_str(&input.birth_date, "%Y-%m-%d")
        .map_err(|_| ProfileError::InvalidDate(input.birth_date.clone()))?;

    let time_str = if input.time_unknown {
        DEFAULT_BIRTH_TIME
    } else {
        input.birth_time.as_deref().unwrap_or(DEFAULT_BIRTH_TIME)
    };
    let time = NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|_| ProfileError::InvalidTime(time_str.to_owned()))?;

    let offset = input
        .utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ProfileError::InvalidOffset(input.utc_offset_minutes))?;

    let local = date
        .and_time(time)
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| ProfileError::InvalidDate(input.birth_date.clone()))?;
    let utc = local.with_timezone(&Utc);

    Ok(NormalizedBirth {
        local,
        utc,
        tz_offset_minutes: input.utc_offset_minutes,
        latitude: input.latitude.unwrap_or(0.0),
        longitude: input.longitude.unwrap_or(0.0),
        altitude: input.altitude,
    })
}
