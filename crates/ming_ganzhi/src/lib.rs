//! Sexagenary cycle tables.
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches, with their element
//!   and polarity mappings and the hidden-stem table
//! - The 60-entry stem/branch cycle
//! - The two-hour day-branch partition (with midnight wraparound) and the
//!   month-stem / hour-stem recurrence rules
//! - Count-to-ratio balance maps over any axis
//!
//! Everything here is a pure, immutable lookup: the tables are `const`, the
//! enums are closed, and every derivation is exhaustively matched.

pub mod balance;
pub mod branch;
pub mod cycle;
pub mod element;
pub mod hour;
pub mod stem;

pub use balance::{Balance, balance_map};
pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::{CYCLE_LEN, CycleEntry, cycle_entry, hour_stem_of, month_stem_of};
pub use element::{ALL_ELEMENTS, ALL_POLARITIES, Element, Polarity};
pub use hour::{HOUR_BRANCH_BLOCKS, hour_branch};
pub use stem::{ALL_STEMS, Stem};
