//! The 60-entry sexagenary cycle and its stem recurrence rules.
//!
//! Entry `i` pairs `STEMS[i mod 10]` with `BRANCHES[i mod 12]`. Because 60
//! is the least common multiple of 10 and 12, the 60 entries are pairwise
//! distinct and only half of the 120 conceivable stem/branch pairs occur:
//! those where the two residues land on the same index.

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: i64 = 60;

/// One stem/branch pairing of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleEntry {
    pub stem: Stem,
    pub branch: Branch,
}

/// Cycle entry for an arbitrary (possibly negative) cycle index.
pub fn cycle_entry(index: i64) -> CycleEntry {
    let i = index.rem_euclid(CYCLE_LEN) as usize;
    CycleEntry {
        stem: ALL_STEMS[i % 10],
        branch: ALL_BRANCHES[i % 12],
    }
}

/// Month stem from the year stem and the month index.
///
/// The month-stem cycle is tied to the year stem by a linear recurrence:
/// stem index `(year_stem * 2 + month_index) mod 10`, the traditional
/// five-tigers rule in modular form.
pub fn month_stem_of(year_stem: Stem, month_index: usize) -> Stem {
    ALL_STEMS[(year_stem.index() as usize * 2 + month_index) % 10]
}

/// Hour stem from the day stem and the hour branch.
///
/// Same recurrence shape as the month rule, keyed by the day stem: stem
/// index `(day_stem * 2 + hour_branch) mod 10` (the five-rats rule).
pub fn hour_stem_of(day_stem: Stem, hour_branch: Branch) -> Stem {
    ALL_STEMS[(day_stem.index() as usize * 2 + hour_branch.index() as usize) % 10]
}
