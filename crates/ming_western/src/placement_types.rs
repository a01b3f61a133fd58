//! Placement result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ming_ganzhi::Balance;

use crate::sign::{Planet, Sign, WesternElement};

/// One placed body: longitude plus its sign/element classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub longitude_deg: f64,
    pub sign: Sign,
    pub element: WesternElement,
}

/// Mode block reported on tropical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WesternCalcMode {
    pub mode_version: String,
    pub mode_id: String,
    pub house_system: String,
}

impl WesternCalcMode {
    pub fn placeholder() -> Self {
        Self {
            mode_version: "v1".to_owned(),
            mode_id: "placeholder".to_owned(),
            house_system: "none".to_owned(),
        }
    }
}

/// Mode block reported on sidereal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiderealCalcMode {
    pub mode_version: String,
    pub mode_id: String,
    pub house_system: String,
    pub ayanamsha_mode: String,
}

impl SiderealCalcMode {
    pub fn placeholder() -> Self {
        Self {
            mode_version: "v1".to_owned(),
            mode_id: "placeholder".to_owned(),
            house_system: "none".to_owned(),
            ayanamsha_mode: "lahiri_mean".to_owned(),
        }
    }
}

/// Tropical placements for the ten bodies with their element tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TropicalResult {
    pub reference_frame_id: String,
    pub calculation_mode: WesternCalcMode,
    pub bodies: BTreeMap<Planet, BodyPosition>,
    pub elements: BTreeMap<WesternElement, Balance>,
}

/// Sidereal placements: tropical longitudes shifted by the ayanamsha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiderealResult {
    pub reference_frame_id: String,
    pub calculation_mode: SiderealCalcMode,
    pub ayanamsha_deg: f64,
    pub bodies: BTreeMap<Planet, BodyPosition>,
    pub elements: BTreeMap<WesternElement, Balance>,
}
