//! Birth input normalization and energy-profile assembly.
//!
//! This crate provides:
//! - The external input shape (date, optional time, fixed UTC offset,
//!   coordinates) and its normalization into a local + UTC instant pair
//! - The combined energy-profile result: tropical and sidereal Western
//!   placements plus the four-pillar chart, with stable field names for the
//!   JSON boundary

pub mod error;
pub mod input;
pub mod profile;

pub use error::ProfileError;
pub use input::{BirthInput, NormalizedBirth, normalize_birth_input};
pub use profile::{EnergyProfile, energy_profile};
