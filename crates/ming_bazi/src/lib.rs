//! Four-pillar (Bazi) chart derivation.
//!
//! This crate provides:
//! - Year/month/day/hour pillar derivation from a local instant, using
//!   solar-term boundaries for the year and month and the Julian Day Number
//!   for the day cycle
//! - Elemental and polarity balances over the chart's visible and hidden
//!   stems
//!
//! The engine is a pure function of the local instant plus the fixed cycle
//! tables; charts are built once and never mutated.

pub mod chart_types;
pub mod engine;

pub use chart_types::{
    ALL_PILLAR_ROLES, BaziCalcMode, BaziChart, DayMaster, LuckCycle, Pillar, PillarRole,
};
pub use engine::{
    CYCLE_EPOCH_YEAR, DAY_CYCLE_OFFSET, YEAR_BOUNDARY_LONGITUDE_DEG, bazi_year_for,
    chart_for_local, month_index_for,
};
