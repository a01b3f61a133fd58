//! Solar longitude and solar-term boundary search.
//!
//! This crate provides:
//! - A low-precision apparent solar ecliptic longitude series
//! - A day-scan + bisection locator for the instants the longitude crosses
//!   the 24 solar-term boundaries (multiples of 15 degrees) within a year
//!
//! The longitude series is deliberately truncated; boundary instants are
//! resolved by bisection, not by formula precision.

pub mod longitude;
pub mod terms;

pub use longitude::apparent_solar_longitude_deg;
pub use terms::{
    CROSSING_BISECTIONS, SolarTerm, TERM_COUNT, TERM_SPACING_DEG, major_terms_for_year,
    solar_terms_for_year,
};
