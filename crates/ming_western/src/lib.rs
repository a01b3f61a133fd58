//! Placeholder Western body placements.
//!
//! This crate provides:
//! - Tropical and sidereal placement results for the ten classical bodies
//! - Sign and element lookup over the 12-sign zodiac
//!
//! The longitude formula is an intentional placeholder, not an ephemeris: it
//! only has to be deterministic and well-distributed so the sign/element
//! tallies exercise the same aggregation path a real engine would feed.

pub mod engine;
pub mod placement_types;
pub mod sign;

pub use engine::{lahiri_mean_ayanamsha_deg, sidereal_placements, tropical_placements};
pub use placement_types::{
    BodyPosition, SiderealCalcMode, SiderealResult, TropicalResult, WesternCalcMode,
};
pub use sign::{ALL_PLANETS, ALL_SIGNS, ALL_WESTERN_ELEMENTS, Planet, Sign, WesternElement};
