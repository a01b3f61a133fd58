//! Julian Day clock for civil timestamps.
//!
//! This crate provides:
//! - Continuous Julian Day conversion for any `chrono` timestamp
//! - Integer Julian Day Number (JDN) for day-cycle bookkeeping
//!
//! All conversions go through UTC, so a local time with a fixed offset and
//! its UTC equivalent always map to the same Julian Day.

pub mod julian;

pub use julian::{J2000_JD, julian_day, julian_day_number};
