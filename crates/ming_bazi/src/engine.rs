//! Pillar derivation and balance aggregation.
//!
//! Year and month pillars hang off the solar-term boundaries, the day pillar
//! off the Julian Day Number, and the hour pillar off the two-hour local
//! clock partition. All boundary comparisons are `>=`: an instant exactly on
//! a crossing already belongs to the new year or month.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use tracing::debug;

use ming_ganzhi::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_POLARITIES, Branch, Element, Polarity, Stem, balance_map,
    cycle_entry, hour_branch, hour_stem_of, month_stem_of,
};
use ming_solar::major_terms_for_year;
use ming_time::julian_day_number;

use crate::chart_types::{BaziCalcMode, BaziChart, DayMaster, Pillar, PillarRole};

/// Calendar year whose sexagenary cycle index is 0 (a Jia-Zi year).
pub const CYCLE_EPOCH_YEAR: i32 = 1984;

/// Epoch alignment added to the Julian Day Number before the day-cycle
/// lookup.
pub const DAY_CYCLE_OFFSET: i64 = 10;

/// Target longitude of the major term that opens the Bazi year.
pub const YEAR_BOUNDARY_LONGITUDE_DEG: f64 = 315.0;

/// Reference-frame tag reported on every chart.
const REFERENCE_FRAME_ID: &str = "chinese_solar";

/// Bazi year containing a local instant.
///
/// The year turns at the 315-degree major term of the instant's calendar
/// year. When the locator produced no such term — the day scan routinely
/// ends before its target pointer reaches 315 degrees — the instant is
/// treated as pre-boundary and the previous calendar year is used.
pub fn bazi_year_for<Tz: TimeZone>(local: &DateTime<Tz>) -> i32 {
    let year = local.year();
    let terms = major_terms_for_year(year);
    let boundary = terms
        .iter()
        .find(|t| t.longitude_deg == YEAR_BOUNDARY_LONGITUDE_DEG);
    match boundary {
        Some(term) if *local >= term.timestamp => year,
        Some(_) => year - 1,
        None => {
            debug!(
                year,
                "no 315-degree major term located, treating instant as pre-boundary"
            );
            year - 1
        }
    }
}

/// Month index of a local instant within a Bazi year.
///
/// Counts the major terms of `year_for_terms` at or before the instant,
/// modulo 12. The count advances by exactly one at each major-term crossing
/// and is constant in between.
pub fn month_index_for<Tz: TimeZone>(local: &DateTime<Tz>, year_for_terms: i32) -> usize {
    let mut terms = major_terms_for_year(year_for_terms);
    terms.sort_by_key(|t| t.timestamp);
    let crossed = terms.iter().filter(|t| *local >= t.timestamp).count();
    crossed % 12
}

/// Derive the full four-pillar chart for a local instant.
///
/// The instant's offset matters: solar-term comparisons run against the
/// absolute instant, while the hour block reads the local wall-clock hour.
pub fn chart_for_local<Tz: TimeZone>(local: &DateTime<Tz>) -> BaziChart {
    let mode = BaziCalcMode::standard();

    let year_for_pillar = bazi_year_for(local);
    let year_entry = cycle_entry((year_for_pillar - CYCLE_EPOCH_YEAR) as i64);

    let month_index = month_index_for(local, year_for_pillar);
    let month_branch = ALL_BRANCHES[month_index % 12];
    let month_stem = month_stem_of(year_entry.stem, month_index);

    let day_entry = cycle_entry(julian_day_number(local) + DAY_CYCLE_OFFSET);

    let hour_branch = hour_branch(local.hour());
    let hour_stem = hour_stem_of(day_entry.stem, hour_branch);

    let stems = [year_entry.stem, month_stem, day_entry.stem, hour_stem];
    let branches = [
        year_entry.branch,
        month_branch,
        day_entry.branch,
        hour_branch,
    ];

    let (elements_visible, elements_total) =
        element_counts(&stems, &branches, mode.include_hidden_stems);
    let (polarity_visible, polarity_total) =
        polarity_counts(&stems, &branches, mode.include_hidden_stems);

    let pillars = BTreeMap::from([
        (
            PillarRole::Year,
            Pillar {
                stem: year_entry.stem,
                branch: year_entry.branch,
            },
        ),
        (
            PillarRole::Month,
            Pillar {
                stem: month_stem,
                branch: month_branch,
            },
        ),
        (
            PillarRole::Day,
            Pillar {
                stem: day_entry.stem,
                branch: day_entry.branch,
            },
        ),
        (
            PillarRole::Hour,
            Pillar {
                stem: hour_stem,
                branch: hour_branch,
            },
        ),
    ]);

    BaziChart {
        reference_frame_id: REFERENCE_FRAME_ID.to_owned(),
        calculation_mode: mode,
        pillars,
        day_master: DayMaster {
            stem: day_entry.stem,
            element: day_entry.stem.element(),
            polarity: day_entry.stem.polarity(),
        },
        elements_visible: balance_map(&elements_visible),
        elements_total: balance_map(&elements_total),
        polarity_visible: balance_map(&polarity_visible),
        polarity_total: balance_map(&polarity_total),
        luck_cycles: None,
    }
}

/// Tally stem elements and branch primary elements into the visible map;
/// hidden stems additionally feed the total map.
fn element_counts(
    stems: &[Stem; 4],
    branches: &[Branch; 4],
    include_hidden: bool,
) -> (BTreeMap<Element, u32>, BTreeMap<Element, u32>) {
    let mut visible: BTreeMap<Element, u32> = ALL_ELEMENTS.iter().map(|&e| (e, 0)).collect();
    let mut total = visible.clone();

    for stem in stems {
        let element = stem.element();
        *visible.entry(element).or_default() += 1;
        *total.entry(element).or_default() += 1;
    }
    for branch in branches {
        let primary = branch.primary_element();
        *visible.entry(primary).or_default() += 1;
        *total.entry(primary).or_default() += 1;
        if include_hidden {
            for hidden in branch.hidden_stems() {
                *total.entry(hidden.element()).or_default() += 1;
            }
        }
    }
    (visible, total)
}

/// Tally stem polarities; branches carry no visible polarity, only their
/// hidden stems feed the total map.
fn polarity_counts(
    stems: &[Stem; 4],
    branches: &[Branch; 4],
    include_hidden: bool,
) -> (BTreeMap<Polarity, u32>, BTreeMap<Polarity, u32>) {
    let mut visible: BTreeMap<Polarity, u32> = ALL_POLARITIES.iter().map(|&p| (p, 0)).collect();
    let mut total = visible.clone();

    for stem in stems {
        let polarity = stem.polarity();
        *visible.entry(polarity).or_default() += 1;
        *total.entry(polarity).or_default() += 1;
    }
    if include_hidden {
        for branch in branches {
            for hidden in branch.hidden_stems() {
                *total.entry(hidden.polarity()).or_default() += 1;
            }
        }
    }
    (visible, total)
}
