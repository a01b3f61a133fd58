//! Chart result types: pillars, day master, balances, calculation mode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ming_ganzhi::{Balance, Branch, Element, Polarity, Stem};

/// The four temporal roles a pillar can fill. Fixed by position, never
/// reordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

/// All four roles in chart order.
pub const ALL_PILLAR_ROLES: [PillarRole; 4] = [
    PillarRole::Year,
    PillarRole::Month,
    PillarRole::Day,
    PillarRole::Hour,
];

/// One stem/branch pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

/// The day pillar's stem re-exposed as the chart's reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
}

/// One decade of the luck-cycle sequence. Reserved: the engine never
/// populates these yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycle {
    pub stem: Stem,
    pub branch: Branch,
    pub start_age: u32,
    pub end_age: u32,
}

/// Boundary-policy identifiers the engine ran with. Not tunable per call;
/// exposed so consumers can inspect what produced the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziCalcMode {
    pub mode_version: String,
    pub mode_id: String,
    pub year_boundary_mode: String,
    pub month_system_mode: String,
    pub day_boundary_mode: String,
    pub include_hidden_stems: bool,
    pub luck_cycles_enabled: bool,
}

impl BaziCalcMode {
    /// The one mode this engine implements.
    pub fn standard() -> Self {
        Self {
            mode_version: "v1".to_owned(),
            mode_id: "classical".to_owned(),
            year_boundary_mode: "major_term_315".to_owned(),
            month_system_mode: "major_term_count".to_owned(),
            day_boundary_mode: "midnight".to_owned(),
            include_hidden_stems: true,
            luck_cycles_enabled: false,
        }
    }
}

/// A complete four-pillar chart with its balance maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziChart {
    pub reference_frame_id: String,
    pub calculation_mode: BaziCalcMode,
    pub pillars: BTreeMap<PillarRole, Pillar>,
    pub day_master: DayMaster,
    pub elements_visible: BTreeMap<Element, Balance>,
    pub elements_total: BTreeMap<Element, Balance>,
    pub polarity_visible: BTreeMap<Polarity, Balance>,
    pub polarity_total: BTreeMap<Polarity, Balance>,
    pub luck_cycles: Option<Vec<LuckCycle>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_as_tags() {
        assert_eq!(
            serde_json::to_string(&PillarRole::Year).unwrap(),
            "\"year\""
        );
        assert_eq!(
            serde_json::to_string(&PillarRole::Hour).unwrap(),
            "\"hour\""
        );
    }

    #[test]
    fn pillar_roundtrip() {
        let pillar = Pillar {
            stem: Stem::Wu,
            branch: Branch::Zi,
        };
        let json = serde_json::to_string(&pillar).unwrap();
        let back: Pillar = serde_json::from_str(&json).unwrap();
        assert_eq!(pillar, back);
    }

    #[test]
    fn standard_mode_flags() {
        let mode = BaziCalcMode::standard();
        assert!(mode.include_hidden_stems);
        assert!(!mode.luck_cycles_enabled);
    }
}
